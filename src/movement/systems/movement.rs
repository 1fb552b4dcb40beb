//! Movement domain: frame and fixed-step locomotion systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{self, CharacterMotionState, MovementProfile};
use crate::movement::systems::collisions::{AvianBody, body_bounds};
use crate::movement::{MovementInput, Player};

/// Frame step: timers and the jump decision, on the frame delta.
pub(crate) fn apply_frame_locomotion(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<(&MovementProfile, &mut CharacterMotionState), With<Player>>,
) {
    let dt = time.delta_secs();
    let snapshot = input.snapshot();

    for (profile, mut state) in &mut query {
        locomotion::frame_update(&mut state, profile, &snapshot, dt);
    }
}

/// Fixed step: probes, integration, and the velocity write, on the fixed delta.
pub(crate) fn apply_fixed_locomotion(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    input: Res<MovementInput>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &MovementProfile,
            &mut CharacterMotionState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let snapshot = input.snapshot();

    for (entity, transform, collider, profile, mut state, mut velocity) in &mut query {
        let was_grounded = state.is_grounded();
        let bounds = body_bounds(transform, collider);
        if bounds.is_none() {
            warn_once!("Player collider is not a box; ground and head probes are skipped");
        }

        let mut body = AvianBody::new(&spatial_query, entity, bounds, &mut velocity);
        locomotion::fixed_update(&mut state, profile, &snapshot, dt, &mut body);

        if state.is_grounded() != was_grounded {
            debug!(
                "Ground contact changed: grounded={}, phase={:?}, jumps_used={}",
                state.is_grounded(),
                state.phase,
                state.jumps_used
            );
        }
    }
}

/// Mirrors facing onto the sprite.
pub(crate) fn update_facing(
    mut query: Query<(&CharacterMotionState, &mut Sprite), (With<Player>, Changed<CharacterMotionState>)>,
) {
    for (state, mut sprite) in &mut query {
        let flip = !state.facing.is_right();
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
