//! Locomotion domain: jump state machine (buffering, coyote, multi-jump, landing).

use bevy::prelude::*;

use crate::locomotion::{CharacterMotionState, InputSnapshot, JumpPhase, MovementProfile};

/// Applies one frame of jump input. Rules run in a fixed order and later rules
/// may override what earlier ones did this frame.
pub fn apply_jump_input(
    state: &mut CharacterMotionState,
    profile: &MovementProfile,
    input: &InputSnapshot,
) {
    let config = profile.config();

    if input.jump_pressed {
        state.jump_buffer_remaining = config.jump_buffer_time;
        state.jump_released_during_buffer = false;
    }

    if input.jump_released {
        release_jump(state, profile);
    }

    let allowed = config.number_of_jumps_allowed;

    if state.jump_buffered()
        && !state.is_jumping()
        && (state.is_grounded() || state.coyote_available())
        && state.jumps_used < allowed
    {
        initiate_jump(state, profile, 1);
        debug!(
            "Ground jump: grounded={}, coyote_remaining={:.3}, jumps_used={}",
            state.is_grounded(),
            state.coyote_remaining,
            state.jumps_used
        );

        if state.jump_released_during_buffer {
            state.phase = JumpPhase::FastFalling;
            state.fast_fall_release_speed = state.vertical_velocity;
        }
    } else if state.jump_buffered() && state.is_jumping() && state.jumps_used < allowed {
        initiate_jump(state, profile, 1);
        debug!("Chained jump: jumps_used={}", state.jumps_used);
    } else if state.jump_buffered()
        && state.is_falling()
        && state.jumps_used + 1 < allowed
    {
        // The ground jump is forfeited once coyote time has run out.
        initiate_jump(state, profile, 2);
        debug!("Air jump after coyote: jumps_used={}", state.jumps_used);
    }

    if (state.is_jumping() || state.is_falling())
        && state.is_grounded()
        && state.vertical_velocity <= 0.0
    {
        land(state, profile);
    }
}

fn release_jump(state: &mut CharacterMotionState, profile: &MovementProfile) {
    if state.jump_buffered() {
        state.jump_released_during_buffer = true;
    }

    if !state.is_jumping() || state.vertical_velocity <= 0.0 {
        return;
    }

    state.phase = JumpPhase::FastFalling;
    if state.past_apex_threshold {
        state.past_apex_threshold = false;
        state.fast_fall_elapsed = profile.config().time_for_upwards_cancel;
        state.vertical_velocity = 0.0;
    } else {
        state.fast_fall_release_speed = state.vertical_velocity;
    }
}

/// Starts (or restarts) an ascent, spending `credits` jumps. Leaves the
/// fast-fall and apex timers alone; only landing resets those.
pub fn initiate_jump(state: &mut CharacterMotionState, profile: &MovementProfile, credits: u32) {
    state.phase = JumpPhase::Ascending;
    state.jump_buffer_remaining = 0.0;
    state.jumps_used += credits;
    state.vertical_velocity = profile.initial_jump_velocity();
}

fn land(state: &mut CharacterMotionState, profile: &MovementProfile) {
    debug!(
        "Landed: vy={:.2}, jumps_used={} -> 0",
        state.vertical_velocity, state.jumps_used
    );
    state.phase = JumpPhase::Grounded;
    state.vertical_velocity = profile.config().resting_gravity;
    state.jumps_used = 0;
    state.fast_fall_elapsed = 0.0;
    state.fast_fall_release_speed = 0.0;
    state.past_apex_threshold = false;
}
