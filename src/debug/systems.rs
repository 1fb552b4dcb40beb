//! Debug domain: hotkeys, gizmos, and runtime tuning tweaks.

use std::path::Path;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{
    MOVEMENT_DATA_PATH, PLAYER_PROFILE_ID, load_movement_registry, validate_movement_config,
};
use crate::debug::state::LocomotionDebug;
use crate::debug::ui::{DebugInfoOverlay, info_text, spawn_debug_info_overlay};
use crate::locomotion::{CharacterMotionState, MovementProfile, predict_jump_arc};
use crate::movement::{GameLayer, Player, SpawnPoint, body_bounds};

const HIT_COLOR: Color = Color::srgb(0.2, 0.9, 0.3);
const MISS_COLOR: Color = Color::srgb(0.9, 0.2, 0.2);
const WALK_ARC_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
const RUN_ARC_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);

/// Toggle debug views with the function keys
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug: ResMut<LocomotionDebug>,
) {
    for key in keyboard.get_just_pressed() {
        let debug = &mut *debug;
        let (label, flag) = match key {
            KeyCode::F1 => ("Info overlay", &mut debug.show_info),
            KeyCode::F2 => ("Ground box", &mut debug.show_ground_box),
            KeyCode::F3 => ("Head box", &mut debug.show_head_box),
            KeyCode::F4 => ("Walk arc", &mut debug.show_walk_arc),
            KeyCode::F5 => ("Run arc", &mut debug.show_run_arc),
            KeyCode::F6 => ("Arc drawn right", &mut debug.draw_right),
            KeyCode::F7 => ("Arc stops on collision", &mut debug.stop_on_collision),
            _ => continue,
        };
        *flag = !*flag;
        let msg = format!("{} {}", label, if *flag { "ON" } else { "OFF" });
        info!("[DEBUG] {}", msg);
        debug.set_message(msg, 2.0);
    }
}

/// F8: reload movement data and apply the player profile to every player.
pub(crate) fn reload_movement_config(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug: ResMut<LocomotionDebug>,
    mut players: Query<&mut MovementProfile, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F8) {
        return;
    }

    let registry = match load_movement_registry(Path::new(MOVEMENT_DATA_PATH)) {
        Ok(registry) => registry,
        Err(e) => {
            warn!("[DEBUG] Reload failed, keeping current tuning: {}", e);
            debug.set_message("Reload failed", 3.0);
            return;
        }
    };

    let config = registry.config_or_default(PLAYER_PROFILE_ID);
    for warning in validate_movement_config(&config) {
        warn!("[DEBUG] Movement profile '{}': {}", PLAYER_PROFILE_ID, warning);
    }
    for mut profile in &mut players {
        profile.replace(config.clone());
    }

    info!("[DEBUG] {}", registry.summary());
    commands.insert_resource(registry);
    debug.set_message("Movement config reloaded", 2.0);
}

/// F9: log the player's tuning as RON, ready to paste into the data file.
pub(crate) fn dump_movement_config(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug: ResMut<LocomotionDebug>,
    players: Query<&MovementProfile, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F9) {
        return;
    }

    for profile in &players {
        match ron::ser::to_string_pretty(profile.config(), ron::ser::PrettyConfig::default()) {
            Ok(text) => info!("[DEBUG] Current movement config:\n{}", text),
            Err(e) => warn!("[DEBUG] Could not serialize movement config: {}", e),
        }
    }
    debug.set_message("Movement config written to log", 2.0);
}

/// R: put the player back at its spawn point with a fresh motion state.
pub(crate) fn respawn_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug: ResMut<LocomotionDebug>,
    mut players: Query<
        (
            &SpawnPoint,
            &mut Transform,
            &mut CharacterMotionState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    for (spawn, mut transform, mut state, mut velocity) in &mut players {
        transform.translation.x = spawn.0.x;
        transform.translation.y = spawn.0.y;
        *state = CharacterMotionState::default();
        velocity.0 = Vec2::ZERO;
        info!("[DEBUG] Respawned player at {:?}", spawn.0);
    }
    debug.set_message("Respawned", 2.0);
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug: ResMut<LocomotionDebug>) {
    if let Some((_, ref mut duration)) = debug.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug.status_message = None;
        }
    }
}

/// Ground and head probe boxes over their full sweep.
pub(crate) fn draw_probe_boxes(
    mut gizmos: Gizmos,
    debug: Res<LocomotionDebug>,
    players: Query<(&Transform, &Collider, &MovementProfile, &CharacterMotionState), With<Player>>,
) {
    for (transform, collider, profile, state) in &players {
        let Some(bounds) = body_bounds(transform, collider) else {
            continue;
        };

        if debug.show_ground_box {
            let rect = bounds.ground_probe(profile.config()).swept_rect();
            let color = if state.is_grounded() { HIT_COLOR } else { MISS_COLOR };
            gizmos.rect_2d(Isometry2d::from_translation(rect.center()), rect.size(), color);
        }

        if debug.show_head_box {
            let rect = bounds.head_probe(profile.config()).swept_rect();
            let color = if state.bumped_head() { HIT_COLOR } else { MISS_COLOR };
            gizmos.rect_2d(Isometry2d::from_translation(rect.center()), rect.size(), color);
        }
    }
}

/// Predicted walk and run jump arcs from the player's feet.
pub(crate) fn draw_jump_arcs(
    mut gizmos: Gizmos,
    debug: Res<LocomotionDebug>,
    spatial_query: SpatialQuery,
    players: Query<(Entity, &Transform, &Collider, &MovementProfile), With<Player>>,
) {
    for (entity, transform, collider, profile) in &players {
        let start = match body_bounds(transform, collider) {
            Some(bounds) => Vec2::new(bounds.feet.center().x, bounds.feet.min.y),
            None => transform.translation.truncate(),
        };
        let filter = SpatialQueryFilter::from_mask(GameLayer::Ground)
            .with_excluded_entities([entity]);

        let arcs = [
            (debug.show_walk_arc, profile.config().max_walk_speed, WALK_ARC_COLOR),
            (debug.show_run_arc, profile.config().max_run_speed, RUN_ARC_COLOR),
        ];
        for (enabled, speed, color) in arcs {
            if !enabled {
                continue;
            }
            let points = predict_jump_arc(profile, start, speed, debug.arc_settings());
            let points = if debug.stop_on_collision {
                truncate_at_ground(&spatial_query, &filter, points)
            } else {
                points
            };
            gizmos.linestrip_2d(points, color);
        }
    }
}

/// Cuts the arc at the first segment that hits ground, ending on the hit point.
fn truncate_at_ground(
    spatial_query: &SpatialQuery,
    filter: &SpatialQueryFilter,
    points: Vec<Vec2>,
) -> Vec<Vec2> {
    let mut kept = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        kept.push(from);
        let Ok(direction) = Dir2::new(to - from) else {
            continue;
        };
        if let Some(hit) =
            spatial_query.cast_ray(from, direction, from.distance(to), true, filter)
        {
            kept.push(from + *direction * hit.distance);
            return kept;
        }
    }
    if let Some(last) = points.last() {
        kept.push(*last);
    }
    kept
}

/// Keep the info overlay in sync with the first player's state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug: Res<LocomotionDebug>,
    players: Query<(&Transform, &CharacterMotionState, &MovementProfile), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, state, profile)), Ok(mut text)) =
        (players.iter().next(), overlay_query.single_mut())
    {
        let status = debug.status_message.as_ref().map(|(msg, _)| msg.as_str());
        **text = info_text(transform.translation.truncate(), state, profile, status);
    }
}
