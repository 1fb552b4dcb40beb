//! Locomotion domain: vertical velocity integration for each jump phase.

use bevy::prelude::*;

use crate::locomotion::{CharacterMotionState, JumpPhase, MovementProfile};

/// Upper bound on vertical velocity; guards against injected velocities.
pub const MAX_RISE_SPEED: f32 = 50.0;

/// Velocity forced once the apex hang runs out, so the next tick descends.
pub const APEX_RELEASE_VELOCITY: f32 = -0.01;

/// Advances vertical velocity by one fixed tick using the current phase and
/// collision flags.
pub fn integrate_vertical(state: &mut CharacterMotionState, profile: &MovementProfile, dt: f32) {
    let config = profile.config();
    let gravity = profile.gravity();
    let release_gravity = gravity * config.gravity_on_release_multiplier;
    let grounded = state.is_grounded();
    let mut velocity = state.vertical_velocity;

    if state.is_jumping() {
        if state.bumped_head() && !state.is_fast_falling() {
            debug!("Head bump at vy={:.2}", velocity);
            state.phase = JumpPhase::FastFalling;
        }
        let fast_falling = state.is_fast_falling();

        if velocity >= 0.0 {
            state.apex_point = apex_point(profile, velocity);

            if state.apex_point > config.apex_threshold {
                if !state.past_apex_threshold {
                    state.past_apex_threshold = true;
                    state.time_past_apex = 0.0;
                }
                state.time_past_apex += dt;
                velocity = if state.time_past_apex < config.apex_hang_time {
                    0.0
                } else {
                    APEX_RELEASE_VELOCITY
                };
                if !fast_falling {
                    state.phase = JumpPhase::ApexHang;
                }
            } else if !fast_falling {
                velocity += gravity * dt;
                state.phase = JumpPhase::Ascending;
            }
        } else if !fast_falling {
            velocity += gravity * dt;
            state.past_apex_threshold = false;
            state.phase = JumpPhase::Descending;
        }
    } else if grounded && state.phase == JumpPhase::Grounded {
        velocity = config.resting_gravity;
    } else {
        velocity += release_gravity * dt;
        if !grounded {
            velocity += gravity * dt;
        }
        state.phase = JumpPhase::Falling;
    }

    if state.is_fast_falling() {
        let cancel_time = config.time_for_upwards_cancel;
        if state.fast_fall_elapsed >= cancel_time {
            velocity += release_gravity * dt;
        } else {
            let t = state.fast_fall_elapsed / cancel_time;
            velocity = state.fast_fall_release_speed * (1.0 - t);
        }
        state.fast_fall_elapsed += dt;
    }

    state.vertical_velocity = clamp_vertical(velocity, config.max_fall_speed);
}

/// Inverse lerp of `velocity` from the take-off speed down to zero.
pub fn apex_point(profile: &MovementProfile, velocity: f32) -> f32 {
    inverse_lerp(profile.initial_jump_velocity(), 0.0, velocity)
}

/// Clamped inverse lerp; a degenerate range yields zero.
pub fn inverse_lerp(from: f32, to: f32, value: f32) -> f32 {
    if from == to {
        return 0.0;
    }
    ((value - from) / (to - from)).clamp(0.0, 1.0)
}

/// Clamps into [-max_fall_speed, MAX_RISE_SPEED], recovering from non-finite input.
pub fn clamp_vertical(velocity: f32, max_fall_speed: f32) -> f32 {
    if !velocity.is_finite() {
        warn!("Non-finite vertical velocity {}, resetting to 0", velocity);
        return 0.0;
    }

    let floor = if max_fall_speed.is_finite() {
        -max_fall_speed.abs()
    } else {
        -MAX_RISE_SPEED
    };
    velocity.clamp(floor, MAX_RISE_SPEED)
}
