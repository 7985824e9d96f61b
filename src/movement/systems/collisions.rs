//! Movement domain: contact detection against the avian2d world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::probe::{BoxCast, CollisionProbe, ProbeSettings, probe_contacts};
use crate::movement::{ContactReport, GameLayer, Player};

/// Fallback half extents when the collider is not a box.
const DEFAULT_HALF_EXTENTS: Vec2 = Vec2::new(0.5, 1.0);

/// [`CollisionProbe`] backed by avian2d spatial queries, ignoring the probing body.
pub struct SpatialProbe<'a, 'w, 's> {
    query: &'a SpatialQuery<'w, 's>,
    exclude: Entity,
}

impl<'a, 'w, 's> SpatialProbe<'a, 'w, 's> {
    pub fn new(query: &'a SpatialQuery<'w, 's>, exclude: Entity) -> Self {
        Self { query, exclude }
    }

    fn filter(&self, mask: LayerMask) -> SpatialQueryFilter {
        SpatialQueryFilter::from_mask(mask).with_excluded_entities([self.exclude])
    }
}

impl CollisionProbe for SpatialProbe<'_, '_, '_> {
    fn touching_any(&self, origin: Vec2, half_extents: Vec2, mask: LayerMask) -> bool {
        let shape = Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0);
        !self
            .query
            .shape_intersections(&shape, origin, 0.0, &self.filter(mask))
            .is_empty()
    }

    fn cast_box(&self, cast: &BoxCast) -> Option<f32> {
        let shape = Collider::rectangle(cast.half_extents.x * 2.0, cast.half_extents.y * 2.0);
        self.query
            .cast_shape(
                &shape,
                cast.origin,
                0.0,
                cast.direction,
                &ShapeCastConfig::from_max_distance(cast.max_distance),
                &self.filter(cast.mask),
            )
            .map(|hit| hit.distance)
    }
}

pub(crate) fn detect_contacts(
    spatial_query: SpatialQuery,
    settings: Res<ProbeSettings>,
    mut query: Query<(Entity, &Transform, &Collider, &mut ContactReport), With<Player>>,
) {
    let mask = GameLayer::solid_mask();

    for (entity, transform, collider, mut report) in &mut query {
        let half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => DEFAULT_HALF_EXTENTS,
        };

        let probe = SpatialProbe::new(&spatial_query, entity);
        let contacts = probe_contacts(
            &probe,
            transform.translation.truncate(),
            half_extents,
            mask,
            &settings,
        );

        if contacts.wall != report.wall {
            debug!("Wall contact changed: {:?} -> {:?}", report.wall, contacts.wall);
        }
        report.set_if_neq(contacts);
    }
}
