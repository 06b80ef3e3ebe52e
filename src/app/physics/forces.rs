use eframe::egui::{Vec2, vec2};

pub(super) fn repulsion_between(
    point_a: Vec2,
    point_b: Vec2,
    repulsion_strength: f32,
    softening: f32,
) -> Vec2 {
    let delta = point_a - point_b;
    let distance_sq = delta.length_sq();
    let distance = distance_sq.sqrt();
    let direction = if distance > 0.0001 {
        delta / distance
    } else {
        vec2(1.0, 0.0)
    };
    direction * (repulsion_strength / (distance_sq + softening))
}

pub(super) fn accumulate_repulsion(
    positions: &[Vec2],
    repulsion_strength: f32,
    softening: f32,
    forces: &mut [Vec2],
) {
    for from in 0..positions.len() {
        for to in (from + 1)..positions.len() {
            let push =
                repulsion_between(positions[from], positions[to], repulsion_strength, softening);
            forces[from] += push;
            forces[to] -= push;
        }
    }
}

/// Spring force acting on `from`; `to` receives the negation.
pub(super) fn spring_between(
    from_pos: Vec2,
    to_pos: Vec2,
    relative_velocity: Vec2,
    rest_length: f32,
    spring_strength: f32,
    spring_damping: f32,
) -> Option<Vec2> {
    let delta = from_pos - to_pos;
    let distance_sq = delta.length_sq();
    if distance_sq <= 0.0001 * 0.0001 {
        return None;
    }
    let distance = distance_sq.sqrt();
    let direction = delta / distance;

    let spring = (distance - rest_length) * spring_strength;
    let damping_force = relative_velocity.dot(direction) * spring_damping;
    Some(-(direction * (spring + damping_force)))
}
