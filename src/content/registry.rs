//! MovementRegistry resource providing lookups for loaded movement profiles.

use bevy::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use super::loader::load_movement_registry;
use super::validation::validate_movement_config;
use crate::locomotion::MovementConfig;

/// Profile id the player character is spawned with.
pub const PLAYER_PROFILE_ID: &str = "player";

/// Central registry for loaded movement tunings, keyed by profile id.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementRegistry {
    pub profiles: HashMap<String, MovementConfig>,
}

impl MovementRegistry {
    pub fn get(&self, id: &str) -> Option<&MovementConfig> {
        self.profiles.get(id)
    }

    /// Config for `id`, or the stock tuning when the id is unknown.
    pub fn config_or_default(&self, id: &str) -> MovementConfig {
        match self.get(id) {
            Some(config) => config.clone(),
            None => {
                warn!("Movement profile '{}' not found, using defaults", id);
                MovementConfig::default()
            }
        }
    }

    /// Loads `path`, logging validation warnings. Falls back to an empty
    /// registry when the file cannot be loaded.
    pub fn load_or_default(path: &Path) -> Self {
        match load_movement_registry(path) {
            Ok(registry) => {
                for (id, config) in &registry.profiles {
                    for warning in validate_movement_config(config) {
                        warn!("Movement profile '{}': {}", id, warning);
                    }
                }
                info!("{}", registry.summary());
                registry
            }
            Err(e) => {
                warn!("{}; falling back to default movement tuning", e);
                Self::default()
            }
        }
    }

    /// Returns a summary of loaded profiles for logging.
    pub fn summary(&self) -> String {
        let mut ids: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        ids.sort_unstable();
        format!(
            "MovementRegistry loaded: {} profile(s) [{}]",
            ids.len(),
            ids.join(", ")
        )
    }
}
