//! Locomotion domain: jump buffer and coyote countdowns.

use crate::locomotion::{CharacterMotionState, MovementConfig};

/// Decays the jump buffer and coyote window by `dt`.
///
/// Values are not clamped; anything at or below zero counts as expired.
pub fn tick_timers(state: &mut CharacterMotionState, config: &MovementConfig, dt: f32) {
    state.jump_buffer_remaining -= dt;

    if state.is_grounded() {
        state.coyote_remaining = config.jump_coyote_time;
    } else {
        state.coyote_remaining -= dt;
    }
}
