//! Movement domain: test room for trying out jump tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

/// Static ground blocks as (center, size) in world units.
const ROOM_BLOCKS: [(Vec2, Vec2); 7] = [
    // Floor
    (Vec2::new(0.0, -1.0), Vec2::new(60.0, 2.0)),
    // Side walls
    (Vec2::new(-31.0, 10.0), Vec2::new(2.0, 24.0)),
    (Vec2::new(31.0, 10.0), Vec2::new(2.0, 24.0)),
    // Platforms, each reachable from the one below with a single jump
    (Vec2::new(-14.0, 4.5), Vec2::new(8.0, 0.6)),
    (Vec2::new(0.0, 9.5), Vec2::new(6.0, 0.6)),
    (Vec2::new(14.0, 14.5), Vec2::new(8.0, 0.6)),
    // Low ceiling for head bumps
    (Vec2::new(22.0, 4.0), Vec2::new(8.0, 0.6)),
];

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    for (center, size) in ROOM_BLOCKS {
        commands.spawn((
            Ground,
            Sprite {
                color: ground_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }
}
