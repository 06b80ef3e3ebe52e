mod forces;

use eframe::egui::Vec2;
use tracing::debug;

use super::RenderGraph;
use forces::{accumulate_repulsion, spring_between};

const REST_SPEED_SQ: f32 = 0.05 * 0.05;

/// Tunables of the spring layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSettings {
    pub repulsion: f32,
    pub spring: f32,
    pub rest_length: f32,
    pub velocity_damping: f32,
    pub max_iterations: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            repulsion: 52_000.0,
            spring: 0.028,
            rest_length: 110.0,
            velocity_damping: 0.86,
            max_iterations: 600,
        }
    }
}

pub(super) fn step_layout(
    cache: &mut RenderGraph,
    settings: LayoutSettings,
    delta_seconds: f32,
) -> bool {
    let node_count = cache.nodes.len();
    if node_count < 2 {
        if let Some(node) = cache.nodes.first_mut() {
            node.velocity = Vec2::ZERO;
        }
        return false;
    }

    let scratch = &mut cache.physics_scratch;
    scratch.forces.clear();
    scratch.forces.resize(node_count, Vec2::ZERO);
    scratch.positions.clear();
    scratch
        .positions
        .extend(cache.nodes.iter().map(|node| node.world_pos));

    let forces = &mut scratch.forces;
    let positions = &scratch.positions;

    let softening = 400.0;
    let spring_damping = 0.2;
    let center_pull = 0.0012;
    let time_step_scale = (delta_seconds * 60.0).clamp(0.25, 3.0);
    let damping_factor = settings.velocity_damping.clamp(0.5, 0.99).powf(time_step_scale);

    accumulate_repulsion(positions, settings.repulsion, softening, forces);

    for edge in &cache.edges {
        let (from, to) = (edge.from, edge.to);
        if from >= node_count || to >= node_count || from == to {
            continue;
        }

        let relative_velocity = cache.nodes[from].velocity - cache.nodes[to].velocity;
        if let Some(correction) = spring_between(
            positions[from],
            positions[to],
            relative_velocity,
            settings.rest_length,
            settings.spring,
            spring_damping,
        ) {
            forces[from] += correction;
            forces[to] -= correction;
        }
    }

    for (force, position) in forces.iter_mut().zip(positions.iter()) {
        *force -= *position * center_pull;
    }

    let max_force = 180.0;
    let max_speed = 24.0;
    let min_sleep_speed_sq = 0.02 * 0.02;
    let min_sleep_force_sq = 0.08 * 0.08;
    let mut any_motion = false;
    for (node, force_value) in cache.nodes.iter_mut().zip(forces.iter()) {
        if node.pinned {
            node.velocity = Vec2::ZERO;
            continue;
        }

        let mut force = *force_value;
        let force_sq = force.length_sq();
        if force_sq > max_force * max_force {
            force *= max_force / force_sq.sqrt();
        }

        let mut velocity = (node.velocity + (force * (0.055 * time_step_scale))) * damping_factor;
        let mut speed_sq = velocity.length_sq();
        if speed_sq > max_speed * max_speed {
            velocity *= max_speed / speed_sq.sqrt();
            speed_sq = max_speed * max_speed;
        }

        if speed_sq < min_sleep_speed_sq && force_sq < min_sleep_force_sq {
            velocity = Vec2::ZERO;
            speed_sq = 0.0;
        }

        node.velocity = velocity;
        node.world_pos += velocity * time_step_scale;
        if speed_sq > REST_SPEED_SQ {
            any_motion = true;
        }
    }

    any_motion
}

/// An animated layout pass: stepped once per frame until the graph rests or the cap is hit.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct LayoutRun {
    remaining: usize,
    steps: usize,
}

impl LayoutRun {
    pub(super) fn start(&mut self, settings: LayoutSettings) {
        debug!(max_iterations = settings.max_iterations, "layout pass requested");
        self.remaining = settings.max_iterations;
        self.steps = 0;
    }

    pub(super) fn is_running(&self) -> bool {
        self.remaining > 0
    }

    /// Advances the pass by one step; returns whether it is still running.
    pub(super) fn tick(
        &mut self,
        cache: &mut RenderGraph,
        settings: LayoutSettings,
        delta_seconds: f32,
    ) -> bool {
        if self.remaining == 0 {
            return false;
        }

        let moved = step_layout(cache, settings, delta_seconds);
        self.remaining -= 1;
        self.steps += 1;

        if !moved || self.remaining == 0 {
            debug!(steps = self.steps, at_rest = !moved, "layout pass finished");
            self.remaining = 0;
            for node in &mut cache.nodes {
                node.velocity = Vec2::ZERO;
            }
        }
        self.remaining > 0
    }
}
