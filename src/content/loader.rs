//! Loader for movement content files (RON or JSON) at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::MovementRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Serialization formats accepted for content files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Ron,
    Json,
}

impl ContentFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ron" => Some(ContentFormat::Ron),
            "json" => Some(ContentFormat::Json),
            _ => None,
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a DataFile<T> from text in the given format.
pub fn parse_data_file<T>(
    contents: &str,
    format: ContentFormat,
    file_name: &str,
) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = match format {
        ContentFormat::Ron => ron_options()
            .from_str::<DataFile<T>>(contents)
            .map_err(|e| e.to_string()),
        ContentFormat::Json => {
            serde_json::from_str::<DataFile<T>>(contents).map_err(|e| e.to_string())
        }
    }
    .map_err(|message| ContentLoadError {
        file: file_name.to_string(),
        message: format!("Parse error: {}", message),
    })?;

    if data.schema_version != SCHEMA_VERSION {
        warn!(
            "{} has schema_version {}, expected {}",
            file_name, data.schema_version, SCHEMA_VERSION
        );
    }

    Ok(data.items)
}

/// Load a DataFile<T> from disk, choosing the format by extension.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let format = ContentFormat::from_path(path).ok_or_else(|| ContentLoadError {
        file: file_name.clone(),
        message: "unsupported extension (expected .ron or .json)".to_string(),
    })?;
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_data_file(&contents, format, &file_name)
}

/// Load all movement profiles from `path` into a MovementRegistry.
pub fn load_movement_registry(path: &Path) -> Result<MovementRegistry, ContentLoadError> {
    let mut registry = MovementRegistry::default();

    for def in load_data_file::<MovementProfileDef>(path)? {
        if registry.profiles.contains_key(&def.id) {
            warn!("Duplicate movement profile '{}', keeping the last one", def.id);
        }
        registry.profiles.insert(def.id, def.config);
    }

    Ok(registry)
}
