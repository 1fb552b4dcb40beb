//! Advisory range checks for movement tuning.
//!
//! The ranges match the authoring sliders. Nothing here rejects a config; the
//! simulation tolerates out-of-range values and these only produce warnings.

use crate::locomotion::MovementConfig;

/// A tuning value outside its advised range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub field: &'static str,
    pub value: f32,
    pub expected: String,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "field '{}' = {} is outside the advised range {}",
            self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a field against an inclusive range
macro_rules! check_range {
    ($warnings:expr, $config:expr, $field:ident, $min:expr, $max:expr) => {
        let value = $config.$field as f32;
        if !($min..=$max).contains(&value) {
            $warnings.push(ValidationWarning {
                field: stringify!($field),
                value,
                expected: format!("{}..={}", $min, $max),
            });
        }
    };
}

/// Helper macro for checking a field is strictly positive
macro_rules! check_positive {
    ($warnings:expr, $config:expr, $field:ident) => {
        let value = $config.$field as f32;
        if !(value > 0.0 && value.is_finite()) {
            $warnings.push(ValidationWarning {
                field: stringify!($field),
                value,
                expected: "> 0".to_string(),
            });
        }
    };
}

/// Check every tuning value. Returns an empty list if all are in range.
pub fn validate_movement_config(config: &MovementConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Walk / run
    check_range!(warnings, config, max_walk_speed, 1.0, 100.0);
    check_range!(warnings, config, ground_acceleration, 0.25, 50.0);
    check_range!(warnings, config, ground_deceleration, 0.25, 50.0);
    check_range!(warnings, config, air_acceleration, 0.25, 50.0);
    check_range!(warnings, config, air_deceleration, 0.25, 50.0);
    check_range!(warnings, config, max_run_speed, 1.0, 100.0);

    // Probes
    check_positive!(warnings, config, ground_detection_ray_length);
    check_positive!(warnings, config, head_detection_ray_length);
    check_range!(warnings, config, head_width, 0.0, 1.0);

    // Jump
    check_positive!(warnings, config, jump_height);
    check_range!(warnings, config, jump_height_compensation_factor, 1.0, 1.1);
    check_positive!(warnings, config, time_till_jump_apex);
    check_range!(warnings, config, gravity_on_release_multiplier, 0.01, 5.0);
    check_positive!(warnings, config, max_fall_speed);
    check_range!(warnings, config, number_of_jumps_allowed, 1.0, 5.0);
    check_range!(warnings, config, time_for_upwards_cancel, 0.02, 0.3);
    check_range!(warnings, config, apex_threshold, 0.5, 1.0);
    check_range!(warnings, config, apex_hang_time, 0.01, 1.0);
    check_range!(warnings, config, jump_buffer_time, 0.0, 1.0);
    check_range!(warnings, config, jump_coyote_time, 0.0, 1.0);

    warnings
}
