//! Debug domain: state overlay spawning and text.

use bevy::prelude::*;

use crate::locomotion::{CharacterMotionState, MovementProfile};

/// Marker for the locomotion info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) const HOTKEY_HINT: &str = "F1 info | F2 ground | F3 head | F4 walk arc | F5 run arc\n\
F6 arc side | F7 arc stop | F8 reload | F9 dump | R respawn";

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

/// Overlay body for one character.
pub(crate) fn info_text(
    position: Vec2,
    state: &CharacterMotionState,
    profile: &MovementProfile,
    status: Option<&str>,
) -> String {
    let velocity = state.velocity();
    let mut text = format!(
        "Pos: ({:.2}, {:.2})\nVel: ({:.2}, {:.2})\nPhase: {:?}\nGrounded: {} | Head: {}\n\
         Jumps: {}/{}\nBuffer: {:.3} | Coyote: {:.3}\nApex: {:.2}\nFacing: {:?}\n\
         Gravity: {:.2} | Jump velocity: {:.2}\n{}",
        position.x,
        position.y,
        velocity.x,
        velocity.y,
        state.phase,
        state.is_grounded(),
        state.bumped_head(),
        state.jumps_used,
        profile.config().number_of_jumps_allowed,
        state.jump_buffer_remaining.max(0.0),
        state.coyote_remaining.max(0.0),
        state.apex_point,
        state.facing,
        profile.gravity(),
        profile.initial_jump_velocity(),
        HOTKEY_HINT,
    );
    if let Some(status) = status {
        text.push_str("\n> ");
        text.push_str(status);
    }
    text
}
