//! Locomotion domain: platformer jump/fall state machine, gravity integration,
//! and horizontal movement for a single character.
//!
//! The host drives two steps per simulation tick:
//! - [`frame_update`]: timers, then the jump decision.
//! - [`fixed_update`]: collision probes, vertical integration, horizontal
//!   filter, and the velocity write-back.
//!
//! Given the same state, profile, input, collisions and `dt`, a step always
//! produces the same result.

mod arc;
mod config;
mod horizontal;
mod jump;
mod probe;
mod state;
mod timers;
mod vertical;


pub use arc::{ArcSettings, predict_jump_arc};
pub use config::{ConfigError, JumpConstants, MovementConfig, MovementProfile, WORLD_GRAVITY};
pub use horizontal::{apply_horizontal, turn_check};
pub use jump::{apply_jump_input, initiate_jump};
pub use probe::{BodyBounds, CharacterBody, ProbeBox, probe_collisions};
pub use state::{CharacterMotionState, CollisionResult, Facing, InputSnapshot, JumpPhase};
pub use timers::tick_timers;
pub use vertical::{
    APEX_RELEASE_VELOCITY, MAX_RISE_SPEED, apex_point, clamp_vertical, integrate_vertical,
    inverse_lerp,
};

use bevy::prelude::*;

/// Frame step: decays timers and applies jump input. Writes no velocity.
pub fn frame_update(
    state: &mut CharacterMotionState,
    profile: &MovementProfile,
    input: &InputSnapshot,
    dt: f32,
) {
    let dt = sanitize_dt(dt);
    tick_timers(state, profile.config(), dt);
    apply_jump_input(state, profile, input);
}

/// Fixed step against a host body: probes, integrates, and writes the velocity.
pub fn fixed_update(
    state: &mut CharacterMotionState,
    profile: &MovementProfile,
    input: &InputSnapshot,
    dt: f32,
    body: &mut impl CharacterBody,
) -> Vec2 {
    let collisions = probe_collisions(body, profile.config());
    let velocity = step_fixed(state, profile, input, collisions, dt);
    body.set_velocity(velocity);
    velocity
}

/// Fixed step with collision results supplied by the caller.
pub fn step_fixed(
    state: &mut CharacterMotionState,
    profile: &MovementProfile,
    input: &InputSnapshot,
    collisions: CollisionResult,
    dt: f32,
) -> Vec2 {
    let dt = sanitize_dt(dt);
    let input = input.sanitized();
    let config = profile.config();

    state.collisions = collisions;
    integrate_vertical(state, profile, dt);

    let (acceleration, deceleration) = config.horizontal_rates(state.is_grounded());
    apply_horizontal(state, config, &input, acceleration, deceleration, dt);

    state.velocity()
}

/// Negative or non-finite tick lengths are treated as empty ticks.
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}
