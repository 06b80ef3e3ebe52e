use std::collections::HashMap;

use eframe::egui::{Vec2, vec2};

use crate::util::stable_pair;

use super::super::{NodeSpec, RenderEdge, RenderGraph, RenderNode};

const NEW_NODE_OFFSET: f32 = 70.0;

fn jitter_direction(id: &str, index: usize) -> Vec2 {
    let (jx, jy) = stable_pair(id);
    let direction = vec2(jx, jy);
    if direction.length_sq() <= 0.0001 {
        let angle = ((index as f32) * 0.618_034 + 0.11) * std::f32::consts::TAU;
        vec2(angle.cos(), angle.sin())
    } else {
        direction.normalized()
    }
}

impl RenderGraph {
    /// Replaces nodes and edges with the model's, keeping the position and view
    /// state of every node whose id survives.
    pub(crate) fn sync(&mut self, specs: Vec<NodeSpec>, edges: Vec<RenderEdge>) {
        let mut prior_nodes = std::mem::take(&mut self.nodes)
            .into_iter()
            .map(|node| (node.id.clone(), node))
            .collect::<HashMap<_, _>>();

        let mut placed = Vec::with_capacity(specs.len());
        let mut next_nodes = Vec::with_capacity(specs.len());
        for spec in specs {
            let node = match prior_nodes.remove(&spec.id) {
                Some(mut node) => {
                    if let Some(highlighted) = spec.highlighted {
                        node.highlighted = highlighted;
                    }
                    placed.push(true);
                    node
                }
                None => {
                    placed.push(false);
                    RenderNode {
                        id: spec.id,
                        world_pos: Vec2::ZERO,
                        velocity: Vec2::ZERO,
                        highlighted: spec.highlighted.unwrap_or(false),
                        pinned: false,
                    }
                }
            };
            next_nodes.push(node);
        }

        let node_count = next_nodes.len();
        let edges = edges
            .into_iter()
            .filter(|edge| edge.from < node_count && edge.to < node_count && edge.from != edge.to)
            .collect::<Vec<_>>();

        for index in 0..node_count {
            if placed[index] {
                continue;
            }

            let anchor = edges.iter().find_map(|edge| {
                let other = if edge.from == index {
                    edge.to
                } else if edge.to == index {
                    edge.from
                } else {
                    return None;
                };
                placed[other].then(|| next_nodes[other].world_pos)
            });

            let direction = jitter_direction(&next_nodes[index].id, index);
            next_nodes[index].world_pos = match anchor {
                Some(anchor) => anchor + direction * NEW_NODE_OFFSET,
                None => {
                    let placed_positions = next_nodes
                        .iter()
                        .zip(&placed)
                        .filter_map(|(node, &placed)| placed.then_some(node.world_pos))
                        .collect::<Vec<_>>();
                    if placed_positions.is_empty() {
                        Vec2::ZERO
                    } else {
                        let centroid = placed_positions
                            .iter()
                            .fold(Vec2::ZERO, |sum, position| sum + *position)
                            / placed_positions.len() as f32;
                        centroid + direction * NEW_NODE_OFFSET
                    }
                }
            };
            placed[index] = true;
        }

        self.nodes = next_nodes;
        self.edges = edges;
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn degree(&self, index: usize) -> usize {
        self.edges
            .iter()
            .filter(|edge| edge.from == index || edge.to == index)
            .count()
    }

    pub(crate) fn toggle_highlight(&mut self, indices: &[usize]) {
        for &index in indices {
            if let Some(node) = self.nodes.get_mut(index) {
                node.highlighted = !node.highlighted;
            }
        }
    }

    pub(crate) fn is_highlighted(&self, index: usize) -> bool {
        self.nodes.get(index).is_some_and(|node| node.highlighted)
    }
}
