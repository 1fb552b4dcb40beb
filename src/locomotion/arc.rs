//! Locomotion domain: predicted path of a full-height jump.

use bevy::prelude::*;

use crate::locomotion::MovementProfile;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSettings {
    /// Samples per ascent-plus-descent of a jump without hang.
    pub resolution: u32,
    /// Total number of samples produced.
    pub steps: u32,
    pub draw_right: bool,
}

impl Default for ArcSettings {
    fn default() -> Self {
        Self {
            resolution: 20,
            steps: 90,
            draw_right: true,
        }
    }
}

/// Samples the arc of a held jump starting at `start` with constant
/// horizontal speed: ascent to the apex, a flat hang, then descent.
pub fn predict_jump_arc(
    profile: &MovementProfile,
    start: Vec2,
    horizontal_speed: f32,
    settings: ArcSettings,
) -> Vec<Vec2> {
    let config = profile.config();
    let gravity = profile.gravity();
    let time_to_apex = config.time_till_jump_apex.max(0.0);
    let hang_time = config.apex_hang_time.max(0.0);
    let speed = if settings.draw_right {
        horizontal_speed
    } else {
        -horizontal_speed
    };
    let launch = Vec2::new(speed, profile.initial_jump_velocity());
    let time_step = 2.0 * time_to_apex / settings.resolution.max(1) as f32;

    let ballistic = |t: f32| launch * t + 0.5 * Vec2::new(0.0, gravity) * t * t;
    let apex = ballistic(time_to_apex);

    (0..settings.steps)
        .map(|i| {
            let t = i as f32 * time_step;
            let displacement = if t < time_to_apex {
                ballistic(t)
            } else if t < time_to_apex + hang_time {
                apex + Vec2::new(speed * (t - time_to_apex), 0.0)
            } else {
                let descend = t - time_to_apex - hang_time;
                apex + Vec2::new(speed * (hang_time + descend), 0.5 * gravity * descend * descend)
            };
            start + displacement
        })
        .collect()
}
