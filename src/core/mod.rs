//! Core domain: camera and simulation clock shared by the other domains.

mod systems;

#[cfg(test)]
mod tests;

pub use systems::{CAMERA_PIXELS_PER_UNIT, FIXED_TIMESTEP_HZ, MainCamera};

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_TIMESTEP_HZ))
            .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.12)))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_player);
    }
}
