//! Content domain: tests for movement data parsing, loading, and validation.

use std::fs;
use std::path::{Path, PathBuf};

use super::*;
use crate::locomotion::MovementConfig;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("locomotion-{}-{}", std::process::id(), name));
    fs::write(&path, contents).expect("temp file should be writable");
    path
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_ron_partial_override_keeps_defaults() {
    let ron = r#"(
        schema_version: 1,
        items: [
            (id: "floaty", config: (jump_height: 9.0, apex_hang_time: 0.2)),
        ],
    )"#;

    let defs: Vec<MovementProfileDef> =
        parse_data_file(ron, ContentFormat::Ron, "inline.ron").expect("should parse");

    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].id, "floaty");
    assert_eq!(defs[0].config.jump_height, 9.0);
    assert_eq!(defs[0].config.apex_hang_time, 0.2);
    assert_eq!(
        defs[0].config.max_walk_speed,
        MovementConfig::default().max_walk_speed
    );
}

#[test]
fn test_ron_profile_without_config_uses_defaults() {
    let ron = r#"(schema_version: 1, items: [(id: "stock")])"#;

    let defs: Vec<MovementProfileDef> =
        parse_data_file(ron, ContentFormat::Ron, "inline.ron").expect("should parse");

    assert_eq!(defs[0].config, MovementConfig::default());
}

#[test]
fn test_json_parse() {
    let json = r#"{
        "schema_version": 1,
        "items": [
            { "id": "heavy", "config": { "max_fall_speed": 40.0, "number_of_jumps_allowed": 1 } }
        ]
    }"#;

    let defs: Vec<MovementProfileDef> =
        parse_data_file(json, ContentFormat::Json, "inline.json").expect("should parse");

    assert_eq!(defs[0].id, "heavy");
    assert_eq!(defs[0].config.max_fall_speed, 40.0);
    assert_eq!(defs[0].config.number_of_jumps_allowed, 1);
}

#[test]
fn test_malformed_input_reports_parse_error() {
    let result: Result<Vec<MovementProfileDef>, _> =
        parse_data_file("(schema_version: 1, items: [", ContentFormat::Ron, "broken.ron");

    let err = result.expect_err("should fail");
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_format_from_path() {
    assert_eq!(
        ContentFormat::from_path(Path::new("a/movement.ron")),
        Some(ContentFormat::Ron)
    );
    assert_eq!(
        ContentFormat::from_path(Path::new("movement.json")),
        Some(ContentFormat::Json)
    );
    assert_eq!(ContentFormat::from_path(Path::new("movement.toml")), None);
    assert_eq!(ContentFormat::from_path(Path::new("movement")), None);
}

// -----------------------------------------------------------------------------
// Loading tests
// -----------------------------------------------------------------------------

#[test]
fn test_missing_file_reports_io_error() {
    let err = load_movement_registry(Path::new("does/not/exist.ron")).expect_err("should fail");
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let path = temp_file("movement.yaml", "items: []");
    let err = load_movement_registry(&path).expect_err("should fail");
    assert!(err.message.contains("unsupported extension"));
    let _ = fs::remove_file(path);
}

#[test]
fn test_load_registry_from_file() {
    let path = temp_file(
        "registry.ron",
        r#"(
            schema_version: 1,
            items: [
                (id: "player"),
                (id: "double", config: (number_of_jumps_allowed: 3)),
            ],
        )"#,
    );

    let registry = load_movement_registry(&path).expect("should load");
    let _ = fs::remove_file(path);

    assert_eq!(registry.profiles.len(), 2);
    assert_eq!(registry.get("player"), Some(&MovementConfig::default()));
    assert_eq!(
        registry.config_or_default("double").number_of_jumps_allowed,
        3
    );
    assert_eq!(
        registry.config_or_default("missing"),
        MovementConfig::default()
    );
    assert!(registry.summary().contains("2 profile(s) [double, player]"));
}

#[test]
fn test_duplicate_ids_keep_last() {
    let path = temp_file(
        "duplicates.json",
        r#"{"schema_version": 1, "items": [
            {"id": "player", "config": {"jump_height": 3.0}},
            {"id": "player", "config": {"jump_height": 4.0}}
        ]}"#,
    );

    let registry = load_movement_registry(&path).expect("should load");
    let _ = fs::remove_file(path);

    assert_eq!(registry.profiles.len(), 1);
    assert_eq!(registry.profiles["player"].jump_height, 4.0);
}

#[test]
fn test_load_or_default_falls_back_to_empty() {
    let registry = MovementRegistry::load_or_default(Path::new("nope/movement.ron"));
    assert!(registry.profiles.is_empty());
    assert_eq!(
        registry.config_or_default(PLAYER_PROFILE_ID),
        MovementConfig::default()
    );
}

#[test]
fn test_shipped_movement_data_is_valid() {
    let path = Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/data/movement.ron"
    ));

    let registry = load_movement_registry(path).expect("shipped data should load");
    let player = registry
        .get(PLAYER_PROFILE_ID)
        .expect("player profile should exist");

    assert!(validate_movement_config(player).is_empty());
    for (id, config) in &registry.profiles {
        let warnings = validate_movement_config(config);
        assert!(warnings.is_empty(), "profile '{}': {:?}", id, warnings);
    }
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_config_has_no_warnings() {
    assert!(validate_movement_config(&MovementConfig::default()).is_empty());
}

#[test]
fn test_out_of_range_values_warn() {
    let config = MovementConfig {
        max_walk_speed: 0.5,
        head_width: 1.5,
        number_of_jumps_allowed: 0,
        apex_threshold: 0.2,
        ..MovementConfig::default()
    };

    let fields: Vec<&str> = validate_movement_config(&config)
        .iter()
        .map(|w| w.field)
        .collect();

    assert_eq!(
        fields,
        vec![
            "max_walk_speed",
            "head_width",
            "number_of_jumps_allowed",
            "apex_threshold"
        ]
    );
}

#[test]
fn test_non_positive_and_nan_values_warn() {
    let config = MovementConfig {
        jump_height: 0.0,
        time_till_jump_apex: f32::NAN,
        max_fall_speed: -3.0,
        ..MovementConfig::default()
    };

    let warnings = validate_movement_config(&config);
    assert_eq!(warnings.len(), 3);
    assert!(warnings.iter().all(|w| w.expected == "> 0"));
    assert!(warnings[0].to_string().contains("jump_height"));
}

#[test]
fn test_nan_range_value_warns() {
    let config = MovementConfig {
        gravity_on_release_multiplier: f32::NAN,
        ..MovementConfig::default()
    };

    let warnings = validate_movement_config(&config);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "gravity_on_release_multiplier");
}
