//! Locomotion domain: collision probe geometry and the host body capability.

use bevy::prelude::*;

use crate::locomotion::{CollisionResult, MovementConfig};

/// Axis-aligned bounds of the colliders the probes are cast from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyBounds {
    pub feet: Rect,
    pub body: Rect,
}

impl BodyBounds {
    /// Bounds for a character whose feet and body share one box.
    pub fn from_box(center: Vec2, half_extents: Vec2) -> Self {
        let rect = Rect::from_center_half_size(center, half_extents);
        Self {
            feet: rect,
            body: rect,
        }
    }

    /// Box cast down from the bottom of the feet.
    pub fn ground_probe(&self, config: &MovementConfig) -> ProbeBox {
        let length = config.ground_detection_ray_length;
        ProbeBox {
            origin: Vec2::new(self.feet.center().x, self.feet.min.y),
            size: Vec2::new(self.feet.width(), length),
            direction: Dir2::NEG_Y,
            distance: length,
        }
    }

    /// Box cast up from the top of the body, narrowed by `head_width`.
    pub fn head_probe(&self, config: &MovementConfig) -> ProbeBox {
        let length = config.head_detection_ray_length;
        ProbeBox {
            origin: Vec2::new(self.feet.center().x, self.body.max.y),
            size: Vec2::new(self.feet.width() * config.head_width, length),
            direction: Dir2::Y,
            distance: length,
        }
    }
}

/// A box swept along `direction` for `distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeBox {
    pub origin: Vec2,
    pub size: Vec2,
    pub direction: Dir2,
    pub distance: f32,
}

impl ProbeBox {
    /// Region the sweep covers, for drawing.
    pub fn swept_rect(&self) -> Rect {
        let end = self.origin + *self.direction * self.distance;
        Rect::from_center_size(self.origin, self.size).union(Rect::from_center_size(end, self.size))
    }
}

/// What the simulation needs from the host physics engine.
pub trait CharacterBody {
    /// `None` when the query could not be made this tick.
    fn probe_ground(&mut self, config: &MovementConfig) -> Option<bool>;

    /// `None` when the query could not be made this tick.
    fn probe_head(&mut self, config: &MovementConfig) -> Option<bool>;

    fn set_velocity(&mut self, velocity: Vec2);
}

/// Runs both probes; a missing answer counts as no contact.
pub fn probe_collisions(body: &mut impl CharacterBody, config: &MovementConfig) -> CollisionResult {
    let ground = body.probe_ground(config);
    let head = body.probe_head(config);
    CollisionResult::from_probes(ground, head)
}
