//! Locomotion domain: horizontal velocity smoothing and facing.

use crate::locomotion::{CharacterMotionState, Facing, InputSnapshot, MovementConfig};

/// Eases horizontal velocity toward the walk/run target, or toward zero when
/// there is no input. The caller picks ground or air rates.
pub fn apply_horizontal(
    state: &mut CharacterMotionState,
    config: &MovementConfig,
    input: &InputSnapshot,
    acceleration: f32,
    deceleration: f32,
    dt: f32,
) {
    if input.horizontal != 0.0 {
        turn_check(state, input.horizontal);

        let target = input.horizontal * config.max_speed(input.run_held);
        state.horizontal_velocity = lerp(state.horizontal_velocity, target, acceleration * dt);
    } else {
        state.horizontal_velocity = lerp(state.horizontal_velocity, 0.0, deceleration * dt);
    }
}

/// Flips facing when the input points away from it. Returns whether a turn happened.
pub fn turn_check(state: &mut CharacterMotionState, horizontal: f32) -> bool {
    let turn_to = match state.facing {
        Facing::Right if horizontal < 0.0 => Facing::Left,
        Facing::Left if horizontal > 0.0 => Facing::Right,
        _ => return false,
    };
    state.facing = turn_to;
    true
}

/// Linear interpolation with `t` clamped to [0, 1].
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    from + (to - from) * t
}
