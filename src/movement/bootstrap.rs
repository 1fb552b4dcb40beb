//! Movement domain: player bootstrap from the loaded movement config.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{MovementRegistry, PLAYER_PROFILE_ID};
use crate::locomotion::{CharacterMotionState, MovementConfig, MovementProfile};
use crate::movement::{GameLayer, Player, SpawnPoint};

/// Player collider size in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 2.0);

const PLAYER_SPAWN: Vec2 = Vec2::new(0.0, 2.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    registry: Option<Res<MovementRegistry>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let config = match &registry {
        Some(registry) => registry.config_or_default(PLAYER_PROFILE_ID),
        None => {
            warn!("MovementRegistry not available, using default movement config");
            MovementConfig::default()
        }
    };
    let profile = MovementProfile::new(config);

    info!(
        "Spawning player: walk={}, run={}, jump_height={}, jumps={}, gravity={:.2}, jump_velocity={:.2}",
        profile.config().max_walk_speed,
        profile.config().max_run_speed,
        profile.config().jump_height,
        profile.config().number_of_jumps_allowed,
        profile.gravity(),
        profile.initial_jump_velocity()
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            SpawnPoint(PLAYER_SPAWN),
            CharacterMotionState::default(),
            profile,
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN.extend(0.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity comes from the locomotion integrator
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
