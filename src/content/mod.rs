//! Content domain: data-driven movement tuning loaded at startup.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{DataFile, MovementProfileDef, SCHEMA_VERSION};
pub use loader::{ContentFormat, ContentLoadError, load_movement_registry, parse_data_file};
pub use registry::{MovementRegistry, PLAYER_PROFILE_ID};
pub use validation::{ValidationWarning, validate_movement_config};

use bevy::prelude::*;
use std::path::Path;

/// Movement profiles shipped with the game.
pub const MOVEMENT_DATA_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // Loaded before Startup so spawn systems can read it.
        app.add_systems(PreStartup, load_movement_content);
    }
}

fn load_movement_content(mut commands: Commands) {
    let registry = MovementRegistry::load_or_default(Path::new(MOVEMENT_DATA_PATH));
    commands.insert_resource(registry);
}
