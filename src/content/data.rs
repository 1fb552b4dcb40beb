//! Data definitions for movement content files.
//!
//! These structs mirror the structure in assets/data/movement.ron and are
//! used for deserialization. The MovementRegistry provides lookup by id.

use serde::{Deserialize, Serialize};

use crate::locomotion::MovementConfig;

// ============================================================================
// Common wrapper for content files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

/// Schema version this build writes and expects.
pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Movement profiles (movement.ron)
// ============================================================================

/// A named movement tuning. Fields left out of `config` keep their defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementProfileDef {
    pub id: String,
    #[serde(default)]
    pub config: MovementConfig,
}
