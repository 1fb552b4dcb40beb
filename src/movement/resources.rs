//! Movement domain: input resources.

use bevy::prelude::*;

use crate::locomotion::InputSnapshot;

/// Input sampled once per frame. Jump edges only last for the frame they
/// were read in.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    pub axis: f32,
    pub run_held: bool,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
}

impl MovementInput {
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            horizontal: self.axis,
            run_held: self.run_held,
            jump_pressed: self.jump_just_pressed,
            jump_released: self.jump_just_released,
        }
    }
}
