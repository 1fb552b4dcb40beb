//! Movement domain: bevy/avian2d host for the locomotion core.
//!
//! Frame work (input, timers, jump decision) runs in `Update`; probes,
//! integration and the velocity write run in `FixedUpdate`.

mod bootstrap;
mod components;
mod dev;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use bootstrap::PLAYER_SIZE;
pub use components::{GameLayer, Ground, Player, SpawnPoint};
pub use resources::MovementInput;

pub(crate) use systems::collisions::body_bounds;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    apply_fixed_locomotion, apply_frame_locomotion, read_input, update_facing,
};

/// Frame-step systems, in order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameLocomotionSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(
                Update,
                (read_input, apply_frame_locomotion, update_facing)
                    .chain()
                    .in_set(FrameLocomotionSet),
            )
            .add_systems(FixedUpdate, apply_fixed_locomotion);
    }
}
