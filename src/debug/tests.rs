//! Debug domain: tests for hotkeys, respawn, reload, and overlay text.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::LocomotionDebug;
use super::systems::{
    handle_debug_hotkeys, reload_movement_config, respawn_player, update_status_message,
};
use super::ui::info_text;
use crate::content::{MovementRegistry, PLAYER_PROFILE_ID};
use crate::locomotion::{CharacterMotionState, JumpPhase, MovementConfig, MovementProfile};
use crate::movement::{Player, SpawnPoint};

fn world_with_keys(keys: &[KeyCode]) -> World {
    let mut world = World::new();
    let mut keyboard = ButtonInput::<KeyCode>::default();
    for key in keys {
        keyboard.press(*key);
    }
    world.insert_resource(keyboard);
    world.init_resource::<LocomotionDebug>();
    world
}

// -----------------------------------------------------------------------------
// Hotkey tests
// -----------------------------------------------------------------------------

#[test]
fn test_function_keys_toggle_views() {
    let mut world = world_with_keys(&[KeyCode::F2, KeyCode::F5, KeyCode::F7]);

    world
        .run_system_once(handle_debug_hotkeys)
        .expect("hotkey system runs");

    let debug = world.resource::<LocomotionDebug>();
    assert!(debug.show_ground_box);
    assert!(!debug.show_head_box);
    assert!(debug.show_run_arc);
    assert!(!debug.show_walk_arc);
    assert!(!debug.stop_on_collision);
    assert!(debug.any_arc());
    assert!(debug.status_message.is_some());
}

#[test]
fn test_movement_keys_do_not_toggle_views() {
    let mut world = world_with_keys(&[KeyCode::Space, KeyCode::KeyA]);

    world
        .run_system_once(handle_debug_hotkeys)
        .expect("hotkey system runs");

    let debug = world.resource::<LocomotionDebug>();
    assert!(!debug.show_ground_box && !debug.show_info && !debug.any_arc());
    assert!(debug.status_message.is_none());
}

#[test]
fn test_arc_settings_follow_toggles() {
    let debug = LocomotionDebug {
        draw_right: false,
        arc_resolution: 10,
        visualization_steps: 30,
        ..default()
    };

    let settings = debug.arc_settings();
    assert!(!settings.draw_right);
    assert_eq!(settings.resolution, 10);
    assert_eq!(settings.steps, 30);
}

#[test]
fn test_status_message_fades() {
    let mut world = world_with_keys(&[]);
    let mut time = Time::<()>::default();
    time.advance_by(Duration::from_millis(600));
    world.insert_resource(time);
    world
        .resource_mut::<LocomotionDebug>()
        .set_message("hello", 1.0);

    world
        .run_system_once(update_status_message)
        .expect("status system runs");
    assert!(world.resource::<LocomotionDebug>().status_message.is_some());

    world
        .run_system_once(update_status_message)
        .expect("status system runs");
    assert!(world.resource::<LocomotionDebug>().status_message.is_none());
}

// -----------------------------------------------------------------------------
// Respawn / reload tests
// -----------------------------------------------------------------------------

#[test]
fn test_respawn_resets_player() {
    let mut world = world_with_keys(&[KeyCode::KeyR]);
    let player = world
        .spawn((
            Player,
            SpawnPoint(Vec2::new(0.0, 2.0)),
            Transform::from_xyz(14.0, -3.0, 0.5),
            CharacterMotionState {
                phase: JumpPhase::Descending,
                vertical_velocity: -12.0,
                jumps_used: 2,
                ..default()
            },
            LinearVelocity(Vec2::new(5.0, -12.0)),
        ))
        .id();

    world
        .run_system_once(respawn_player)
        .expect("respawn system runs");

    let transform = world.get::<Transform>(player).unwrap();
    assert_eq!(transform.translation, Vec3::new(0.0, 2.0, 0.5));
    assert_eq!(
        world.get::<CharacterMotionState>(player).unwrap(),
        &CharacterMotionState::default()
    );
    assert_eq!(world.get::<LinearVelocity>(player).unwrap().0, Vec2::ZERO);
}

#[test]
fn test_reload_applies_player_profile() {
    let mut world = world_with_keys(&[KeyCode::F8]);
    let mut profile = MovementProfile::default();
    profile.edit(|config| config.jump_height = 1.0);
    let player = world.spawn((Player, profile)).id();

    world
        .run_system_once(reload_movement_config)
        .expect("reload system runs");

    let registry = world.resource::<MovementRegistry>();
    let expected = registry.config_or_default(PLAYER_PROFILE_ID);
    let profile = world.get::<MovementProfile>(player).unwrap();
    assert_eq!(profile.config(), &expected);
    assert_eq!(profile.config().jump_height, MovementConfig::default().jump_height);
}

// -----------------------------------------------------------------------------
// Overlay tests
// -----------------------------------------------------------------------------

#[test]
fn test_info_text_reports_state() {
    let profile = MovementProfile::default();
    let state = CharacterMotionState {
        phase: JumpPhase::Ascending,
        horizontal_velocity: 3.0,
        vertical_velocity: 10.5,
        jumps_used: 1,
        ..default()
    };

    let text = info_text(Vec2::new(1.0, 2.0), &state, &profile, Some("Respawned"));

    assert!(text.contains("Pos: (1.00, 2.00)"));
    assert!(text.contains("Vel: (3.00, 10.50)"));
    assert!(text.contains("Phase: Ascending"));
    assert!(text.contains("Jumps: 1/2"));
    assert!(text.ends_with("> Respawned"));
}
