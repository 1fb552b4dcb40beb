//! Core domain: tests for the camera follow system.

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::MainCamera;
use super::systems::follow_player;
use crate::movement::Player;

fn world_with_delta(dt: Duration) -> World {
    let mut world = World::new();
    let mut time = Time::<()>::default();
    time.advance_by(dt);
    world.insert_resource(time);
    world
}

#[test]
fn test_camera_moves_toward_player_and_keeps_depth() {
    let mut world = world_with_delta(Duration::from_millis(50));
    world.spawn((Player, Transform::from_xyz(10.0, 4.0, 0.0)));
    let camera = world
        .spawn((MainCamera, Transform::from_xyz(0.0, 0.0, 999.0)))
        .id();

    world
        .run_system_once(follow_player)
        .expect("follow system runs");

    let translation = world.get::<Transform>(camera).unwrap().translation;
    assert!((translation.x - 3.0).abs() < 1e-4);
    assert!((translation.y - 1.2).abs() < 1e-4);
    assert_eq!(translation.z, 999.0);
}

#[test]
fn test_camera_snaps_on_long_frames() {
    let mut world = world_with_delta(Duration::from_secs(1));
    world.spawn((Player, Transform::from_xyz(-5.0, 2.0, 0.0)));
    let camera = world.spawn((MainCamera, Transform::default())).id();

    world
        .run_system_once(follow_player)
        .expect("follow system runs");

    let translation = world.get::<Transform>(camera).unwrap().translation;
    assert_eq!(translation.truncate(), Vec2::new(-5.0, 2.0));
}

#[test]
fn test_camera_stays_without_player() {
    let mut world = world_with_delta(Duration::from_millis(50));
    let camera = world
        .spawn((MainCamera, Transform::from_xyz(1.0, 1.0, 0.0)))
        .id();

    world
        .run_system_once(follow_player)
        .expect("follow system runs");

    let translation = world.get::<Transform>(camera).unwrap().translation;
    assert_eq!(translation.truncate(), Vec2::ONE);
}
