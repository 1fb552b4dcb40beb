//! Core domain: camera setup and follow.

use bevy::prelude::*;

use crate::movement::Player;

/// Physics tick rate for the fixed locomotion step.
pub const FIXED_TIMESTEP_HZ: f64 = 50.0;

/// Screen pixels per world unit.
pub const CAMERA_PIXELS_PER_UNIT: f32 = 32.0;

/// Fraction of the remaining distance the camera closes per second.
const FOLLOW_RATE: f32 = 6.0;

#[derive(Component, Debug)]
pub struct MainCamera;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / CAMERA_PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Eases the camera toward the player, keeping its z.
pub(crate) fn follow_player(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(player) = player_query.iter().next() else {
        return;
    };

    let t = (FOLLOW_RATE * time.delta_secs()).clamp(0.0, 1.0);
    for mut camera in &mut camera_query {
        let target = player.translation.truncate();
        let current = camera.translation.truncate();
        let next = current.lerp(target, t);
        camera.translation.x = next.x;
        camera.translation.y = next.y;
    }
}
