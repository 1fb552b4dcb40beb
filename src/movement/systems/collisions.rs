//! Movement domain: avian2d box-cast probes behind the locomotion body capability.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{BodyBounds, CharacterBody, MovementConfig, ProbeBox};
use crate::movement::GameLayer;

/// A character rigid body seen through avian's spatial queries.
pub(crate) struct AvianBody<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    entity: Entity,
    bounds: Option<BodyBounds>,
    velocity: &'a mut LinearVelocity,
}

impl<'a, 'w, 's> AvianBody<'a, 'w, 's> {
    pub(crate) fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        entity: Entity,
        bounds: Option<BodyBounds>,
        velocity: &'a mut LinearVelocity,
    ) -> Self {
        Self {
            spatial_query,
            entity,
            bounds,
            velocity,
        }
    }

    fn cast(&self, probe: &ProbeBox) -> bool {
        // Filter to only hit Ground layer entities, never the character itself
        let filter = SpatialQueryFilter::from_mask(GameLayer::Ground)
            .with_excluded_entities([self.entity]);
        let shape = Collider::rectangle(probe.size.x, probe.size.y);

        self.spatial_query
            .cast_shape(
                &shape,
                probe.origin,
                0.0,
                probe.direction,
                &ShapeCastConfig::from_max_distance(probe.distance),
                &filter,
            )
            .is_some()
    }
}

impl CharacterBody for AvianBody<'_, '_, '_> {
    fn probe_ground(&mut self, config: &MovementConfig) -> Option<bool> {
        let probe = self.bounds?.ground_probe(config);
        Some(self.cast(&probe))
    }

    fn probe_head(&mut self, config: &MovementConfig) -> Option<bool> {
        let probe = self.bounds?.head_probe(config);
        Some(self.cast(&probe))
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }
}

/// Probe bounds from a box collider. Other shapes have no defined feet.
pub(crate) fn body_bounds(transform: &Transform, collider: &Collider) -> Option<BodyBounds> {
    let cuboid = collider.shape_scaled().as_cuboid()?;
    let half_extents = Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y);
    Some(BodyBounds::from_box(
        transform.translation.truncate(),
        half_extents,
    ))
}
