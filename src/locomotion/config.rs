//! Locomotion domain: tuning parameters and the jump constants derived from them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Host-world gravity the landing rule snaps vertical velocity to.
pub const WORLD_GRAVITY: f32 = -9.81;

/// Per-character movement tuning. Read-only to the simulation; edit it through
/// [`MovementProfile`] so the derived jump constants stay in sync.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Top horizontal speed while walking, in units/s.
    pub max_walk_speed: f32,
    /// Horizontal smoothing rate toward the target speed on the ground, per second.
    pub ground_acceleration: f32,
    /// Smoothing rate toward zero on the ground with no input, per second.
    pub ground_deceleration: f32,
    /// Smoothing rate toward the target speed in the air, per second.
    pub air_acceleration: f32,
    /// Smoothing rate toward zero in the air with no input, per second.
    pub air_deceleration: f32,
    /// Top horizontal speed while the run button is held, in units/s.
    pub max_run_speed: f32,
    /// Ground probe sweep distance below the feet, in units.
    pub ground_detection_ray_length: f32,
    /// Head probe sweep distance above the body, in units.
    pub head_detection_ray_length: f32,
    /// Head probe width as a fraction of the feet width.
    pub head_width: f32,
    /// Peak height of a held jump, in units.
    pub jump_height: f32,
    /// Multiplier on `jump_height` making up for the discrete integration.
    pub jump_height_compensation_factor: f32,
    /// Seconds from take-off to the apex of a held jump.
    pub time_till_jump_apex: f32,
    /// Gravity multiplier after a jump cut and while falling off a ledge.
    pub gravity_on_release_multiplier: f32,
    /// Terminal fall speed, in units/s.
    pub max_fall_speed: f32,
    /// Jumps available per airtime, the ground jump included.
    pub number_of_jumps_allowed: u32,
    /// Seconds a jump cut takes to ease upward velocity to zero.
    pub time_for_upwards_cancel: f32,
    /// Fraction of the ascent velocity range past which the apex hang starts.
    pub apex_threshold: f32,
    /// Seconds the apex hang holds vertical velocity at zero.
    pub apex_hang_time: f32,
    /// Seconds a jump press stays buffered.
    pub jump_buffer_time: f32,
    /// Seconds after leaving a ledge during which a ground jump is still allowed.
    pub jump_coyote_time: f32,
    /// Vertical velocity held while standing on the ground, in units/s.
    pub resting_gravity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_walk_speed: 12.5,
            ground_acceleration: 5.0,
            ground_deceleration: 20.0,
            air_acceleration: 5.0,
            air_deceleration: 5.0,
            max_run_speed: 20.0,
            ground_detection_ray_length: 0.02,
            head_detection_ray_length: 0.02,
            head_width: 0.75,
            jump_height: 6.5,
            jump_height_compensation_factor: 1.054,
            time_till_jump_apex: 0.35,
            gravity_on_release_multiplier: 2.0,
            max_fall_speed: 26.0,
            number_of_jumps_allowed: 2,
            time_for_upwards_cancel: 0.027,
            apex_threshold: 0.97,
            apex_hang_time: 0.075,
            jump_buffer_time: 0.125,
            jump_coyote_time: 0.1,
            resting_gravity: WORLD_GRAVITY,
        }
    }
}

impl MovementConfig {
    /// Acceleration and deceleration for the horizontal filter, picked by ground contact.
    pub fn horizontal_rates(&self, grounded: bool) -> (f32, f32) {
        if grounded {
            (self.ground_acceleration, self.ground_deceleration)
        } else {
            (self.air_acceleration, self.air_deceleration)
        }
    }

    /// Top horizontal speed for the current run state.
    pub fn max_speed(&self, running: bool) -> f32 {
        if running {
            self.max_run_speed
        } else {
            self.max_walk_speed
        }
    }
}

/// Reasons a config cannot produce usable jump constants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveTimeToApex(f32),
    NonPositiveJumpHeight(f32),
    NonFiniteConstants { gravity: f32, initial_jump_velocity: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveTimeToApex(t) => {
                write!(f, "time_till_jump_apex must be positive, got {}", t)
            }
            ConfigError::NonPositiveJumpHeight(h) => {
                write!(f, "adjusted jump height must be positive, got {}", h)
            }
            ConfigError::NonFiniteConstants {
                gravity,
                initial_jump_velocity,
            } => write!(
                f,
                "derived jump constants are not finite (gravity={}, initial_jump_velocity={})",
                gravity, initial_jump_velocity
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Constants derived from jump height and time to apex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpConstants {
    pub adjusted_jump_height: f32,
    /// Always negative.
    pub gravity: f32,
    /// Always positive.
    pub initial_jump_velocity: f32,
}

impl JumpConstants {
    pub fn from_config(config: &MovementConfig) -> Result<Self, ConfigError> {
        let time_to_apex = config.time_till_jump_apex;
        if !time_to_apex.is_finite() || time_to_apex <= 0.0 {
            return Err(ConfigError::NonPositiveTimeToApex(time_to_apex));
        }

        let adjusted = config.jump_height * config.jump_height_compensation_factor;
        if !adjusted.is_finite() || adjusted <= 0.0 {
            return Err(ConfigError::NonPositiveJumpHeight(adjusted));
        }

        let constants = derive(adjusted, time_to_apex);
        if !constants.gravity.is_finite()
            || !constants.initial_jump_velocity.is_finite()
            || constants.gravity >= 0.0
            || constants.initial_jump_velocity <= 0.0
        {
            return Err(ConfigError::NonFiniteConstants {
                gravity: constants.gravity,
                initial_jump_velocity: constants.initial_jump_velocity,
            });
        }

        Ok(constants)
    }

    /// Constants of the stock tuning, used when a config is unusable.
    pub fn fallback() -> Self {
        let defaults = MovementConfig::default();
        derive(
            defaults.jump_height * defaults.jump_height_compensation_factor,
            defaults.time_till_jump_apex,
        )
    }
}

fn derive(adjusted_jump_height: f32, time_to_apex: f32) -> JumpConstants {
    let gravity = -(2.0 * adjusted_jump_height) / time_to_apex.powi(2);
    JumpConstants {
        adjusted_jump_height,
        gravity,
        initial_jump_velocity: gravity.abs() * time_to_apex,
    }
}

/// A character's tuning together with its precomputed jump constants.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementProfile {
    config: MovementConfig,
    constants: JumpConstants,
}

impl Default for MovementProfile {
    fn default() -> Self {
        Self::new(MovementConfig::default())
    }
}

impl MovementProfile {
    /// Builds a profile, falling back to the stock jump constants if the
    /// config cannot produce valid ones.
    pub fn new(config: MovementConfig) -> Self {
        let constants = resolve_constants(&config);
        Self { config, constants }
    }

    pub fn try_new(config: MovementConfig) -> Result<Self, ConfigError> {
        let constants = JumpConstants::from_config(&config)?;
        Ok(Self { config, constants })
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn constants(&self) -> &JumpConstants {
        &self.constants
    }

    pub fn gravity(&self) -> f32 {
        self.constants.gravity
    }

    pub fn initial_jump_velocity(&self) -> f32 {
        self.constants.initial_jump_velocity
    }

    /// Mutates the config in place and recomputes the derived constants.
    pub fn edit(&mut self, edit: impl FnOnce(&mut MovementConfig)) {
        edit(&mut self.config);
        self.constants = resolve_constants(&self.config);
    }

    pub fn replace(&mut self, config: MovementConfig) {
        self.edit(|current| *current = config);
    }
}

fn resolve_constants(config: &MovementConfig) -> JumpConstants {
    match JumpConstants::from_config(config) {
        Ok(constants) => constants,
        Err(e) => {
            warn!("Invalid movement config ({}), using default jump constants", e);
            JumpConstants::fallback()
        }
    }
}
