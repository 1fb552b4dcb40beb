//! Debug domain: toggles for locomotion visualization.

use bevy::prelude::*;

use crate::locomotion::ArcSettings;

/// Resource tracking which locomotion debug views are on
#[derive(Resource, Debug)]
pub struct LocomotionDebug {
    pub show_ground_box: bool,
    pub show_head_box: bool,
    pub show_walk_arc: bool,
    pub show_run_arc: bool,
    /// Cut the predicted arcs at the first ground hit
    pub stop_on_collision: bool,
    pub draw_right: bool,
    pub arc_resolution: u32,
    pub visualization_steps: u32,
    /// Whether to show the state overlay (phase, velocity, timers)
    pub show_info: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl Default for LocomotionDebug {
    fn default() -> Self {
        Self {
            show_ground_box: false,
            show_head_box: false,
            show_walk_arc: false,
            show_run_arc: false,
            stop_on_collision: true,
            draw_right: true,
            arc_resolution: 20,
            visualization_steps: 90,
            show_info: false,
            status_message: None,
        }
    }
}

impl LocomotionDebug {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    pub fn arc_settings(&self) -> ArcSettings {
        ArcSettings {
            resolution: self.arc_resolution,
            steps: self.visualization_steps,
            draw_right: self.draw_right,
        }
    }

    pub fn any_arc(&self) -> bool {
        self.show_walk_arc || self.show_run_arc
    }
}
