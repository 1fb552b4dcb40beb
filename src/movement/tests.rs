//! Movement domain: tests for input mapping and the locomotion systems.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::collisions::body_bounds;
use super::systems::{apply_frame_locomotion, update_facing};
use super::{MovementInput, Player};
use crate::locomotion::{
    CharacterMotionState, CollisionResult, Facing, JumpPhase, MovementProfile,
};

fn world_with_frame(dt: Duration, input: MovementInput) -> World {
    let mut world = World::new();
    let mut time = Time::<()>::default();
    time.advance_by(dt);
    world.insert_resource(time);
    world.insert_resource(input);
    world
}

// -----------------------------------------------------------------------------
// Input tests
// -----------------------------------------------------------------------------

#[test]
fn test_snapshot_carries_axis_and_edges() {
    let input = MovementInput {
        axis: -1.0,
        run_held: true,
        jump_just_pressed: true,
        jump_just_released: false,
    };

    let snapshot = input.snapshot();

    assert_eq!(snapshot.horizontal, -1.0);
    assert!(snapshot.run_held);
    assert!(snapshot.jump_pressed);
    assert!(!snapshot.jump_released);
}

#[test]
fn test_default_input_is_idle() {
    let snapshot = MovementInput::default().snapshot();
    assert_eq!(snapshot.horizontal, 0.0);
    assert!(!snapshot.jump_pressed && !snapshot.jump_released && !snapshot.run_held);
}

// -----------------------------------------------------------------------------
// System tests
// -----------------------------------------------------------------------------

#[test]
fn test_frame_system_starts_jump_for_grounded_player() {
    let mut world = world_with_frame(
        Duration::from_millis(16),
        MovementInput {
            jump_just_pressed: true,
            ..default()
        },
    );
    let profile = MovementProfile::default();
    let jump_velocity = profile.initial_jump_velocity();
    let player = world
        .spawn((
            Player,
            profile,
            CharacterMotionState {
                collisions: CollisionResult {
                    grounded: true,
                    bumped_head: false,
                },
                ..default()
            },
        ))
        .id();

    world
        .run_system_once(apply_frame_locomotion)
        .expect("frame system runs");

    let state = world.get::<CharacterMotionState>(player).unwrap();
    assert_eq!(state.phase, JumpPhase::Ascending);
    assert_eq!(state.jumps_used, 1);
    assert_eq!(state.vertical_velocity, jump_velocity);
}

#[test]
fn test_frame_system_ignores_non_players() {
    let mut world = world_with_frame(
        Duration::from_millis(16),
        MovementInput {
            jump_just_pressed: true,
            ..default()
        },
    );
    let npc = world
        .spawn((
            MovementProfile::default(),
            CharacterMotionState {
                collisions: CollisionResult {
                    grounded: true,
                    bumped_head: false,
                },
                ..default()
            },
        ))
        .id();

    world
        .run_system_once(apply_frame_locomotion)
        .expect("frame system runs");

    let state = world.get::<CharacterMotionState>(npc).unwrap();
    assert!(!state.is_jumping());
}

#[test]
fn test_frame_system_decays_coyote_with_frame_delta() {
    let mut world = world_with_frame(Duration::from_millis(25), MovementInput::default());
    let player = world
        .spawn((
            Player,
            MovementProfile::default(),
            CharacterMotionState {
                phase: JumpPhase::Falling,
                coyote_remaining: 0.1,
                ..default()
            },
        ))
        .id();

    world
        .run_system_once(apply_frame_locomotion)
        .expect("frame system runs");

    let state = world.get::<CharacterMotionState>(player).unwrap();
    assert!((state.coyote_remaining - 0.075).abs() < 1e-4);
}

#[test]
fn test_facing_flips_sprite() {
    let mut world = World::new();
    let player = world
        .spawn((
            Player,
            Sprite::default(),
            CharacterMotionState {
                facing: Facing::Left,
                ..default()
            },
        ))
        .id();

    world.run_system_once(update_facing).expect("facing system runs");
    assert!(world.get::<Sprite>(player).unwrap().flip_x);

    world
        .get_mut::<CharacterMotionState>(player)
        .unwrap()
        .facing = Facing::Right;
    world.run_system_once(update_facing).expect("facing system runs");
    assert!(!world.get::<Sprite>(player).unwrap().flip_x);
}

// -----------------------------------------------------------------------------
// Probe bounds tests
// -----------------------------------------------------------------------------

#[test]
fn test_body_bounds_from_box_collider() {
    let transform = Transform::from_xyz(1.0, 2.0, 0.0);
    let collider = Collider::rectangle(1.0, 2.0);

    let bounds = body_bounds(&transform, &collider).expect("box collider has bounds");

    assert_eq!(bounds.feet.min, Vec2::new(0.5, 1.0));
    assert_eq!(bounds.body.max, Vec2::new(1.5, 3.0));
}

#[test]
fn test_body_bounds_missing_for_round_collider() {
    let transform = Transform::default();
    let collider = Collider::circle(0.5);

    assert!(body_bounds(&transform, &collider).is_none());
}
