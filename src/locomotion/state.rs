//! Locomotion domain: per-character motion state and per-tick inputs.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn is_right(self) -> bool {
        self == Facing::Right
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Airborne state of the jump state machine.
///
/// Every phase except `Grounded` and `Falling` means a jump is in progress.
/// Timers that outlive a single phase live on [`CharacterMotionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Grounded,
    /// Airborne without having jumped (walked off a ledge).
    Falling,
    Ascending,
    /// Suspended near the top of the arc.
    ApexHang,
    Descending,
    /// Jump cut or head bump. Velocity eases from the release speed to zero
    /// over the upward-cancel window, then falls under release gravity.
    FastFalling,
}

impl JumpPhase {
    pub fn is_jumping(self) -> bool {
        !matches!(self, JumpPhase::Grounded | JumpPhase::Falling)
    }

    pub fn is_fast_falling(self) -> bool {
        self == JumpPhase::FastFalling
    }
}

/// Ground and head probe outcome for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionResult {
    pub grounded: bool,
    pub bumped_head: bool,
}

impl CollisionResult {
    /// Missing probe results count as no contact.
    pub fn from_probes(ground: Option<bool>, head: Option<bool>) -> Self {
        Self {
            grounded: ground.unwrap_or(false),
            bumped_head: head.unwrap_or(false),
        }
    }
}

/// Player intent for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    /// Horizontal axis in [-1, 1].
    pub horizontal: f32,
    pub run_held: bool,
    pub jump_pressed: bool,
    pub jump_released: bool,
}

impl InputSnapshot {
    pub fn moving(horizontal: f32) -> Self {
        Self {
            horizontal,
            ..default()
        }
    }

    pub fn jump_press() -> Self {
        Self {
            jump_pressed: true,
            ..default()
        }
    }

    pub fn jump_release() -> Self {
        Self {
            jump_released: true,
            ..default()
        }
    }

    /// Clamps the axis to [-1, 1]; non-finite values become zero.
    pub fn sanitized(self) -> Self {
        let horizontal = if self.horizontal.is_finite() {
            self.horizontal.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        Self { horizontal, ..self }
    }
}

/// Everything the simulation carries between ticks for one character.
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub struct CharacterMotionState {
    pub facing: Facing,
    pub horizontal_velocity: f32,
    pub vertical_velocity: f32,
    pub collisions: CollisionResult,
    pub phase: JumpPhase,
    /// Progress through the ascent, 0 at take-off and 1 at zero velocity.
    pub apex_point: f32,
    pub jumps_used: u32,
    pub jump_buffer_remaining: f32,
    pub jump_released_during_buffer: bool,
    pub coyote_remaining: f32,
    /// Seconds spent fast-falling since the last landing.
    pub fast_fall_elapsed: f32,
    /// Vertical velocity captured when the jump was cut.
    pub fast_fall_release_speed: f32,
    /// Set on first crossing the apex threshold, cleared on free descent.
    pub past_apex_threshold: bool,
    pub time_past_apex: f32,
}

impl CharacterMotionState {
    pub fn is_grounded(&self) -> bool {
        self.collisions.grounded
    }

    pub fn bumped_head(&self) -> bool {
        self.collisions.bumped_head
    }

    pub fn is_jumping(&self) -> bool {
        self.phase.is_jumping()
    }

    pub fn is_falling(&self) -> bool {
        self.phase == JumpPhase::Falling
    }

    pub fn is_fast_falling(&self) -> bool {
        self.phase.is_fast_falling()
    }

    pub fn is_past_apex_threshold(&self) -> bool {
        self.past_apex_threshold
    }

    pub fn jump_buffered(&self) -> bool {
        self.jump_buffer_remaining > 0.0
    }

    pub fn coyote_available(&self) -> bool {
        self.coyote_remaining > 0.0
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.horizontal_velocity, self.vertical_velocity)
    }
}
