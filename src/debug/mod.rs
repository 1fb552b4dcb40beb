//! Debug tooling for tuning locomotion (dev-tools feature).
//!
//! Features:
//! - Ground and head probe boxes, colored by hit
//! - Predicted walk and run jump arcs, optionally cut at the first ground hit
//! - Hot-reload of the movement data file and a RON dump of the live tuning
//! - Respawn at the spawn point
//! - State overlay (phase, velocity, jump credits, timers)

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use state::LocomotionDebug;
pub use ui::DebugInfoOverlay;

use bevy::prelude::*;

use crate::debug::systems::{
    draw_jump_arcs, draw_probe_boxes, dump_movement_config, handle_debug_hotkeys,
    reload_movement_config, respawn_player, update_debug_info_overlay, update_status_message,
};
use crate::movement::FrameLocomotionSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionDebug>()
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    reload_movement_config,
                    dump_movement_config,
                    respawn_player,
                    update_status_message,
                )
                    .chain()
                    .before(FrameLocomotionSet),
            )
            .add_systems(
                Update,
                (
                    draw_probe_boxes.run_if(|debug: Res<LocomotionDebug>| {
                        debug.show_ground_box || debug.show_head_box
                    }),
                    draw_jump_arcs.run_if(|debug: Res<LocomotionDebug>| debug.any_arc()),
                    update_debug_info_overlay,
                )
                    .after(FrameLocomotionSet),
            );
    }
}
