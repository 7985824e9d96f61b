//! Movement domain: ground and wall contact probing.
//!
//! The probe is queried once per tick and its [`ContactReport`] is reused by
//! every downstream rule so a tick never sees two different contact states.

use avian2d::prelude::LayerMask;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{ContactReport, WallContact};

/// A thin box swept along a direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCast {
    pub origin: Vec2,
    pub half_extents: Vec2,
    pub direction: Dir2,
    pub max_distance: f32,
    pub mask: LayerMask,
}

/// Read-only collision queries against the physics world.
pub trait CollisionProbe {
    /// Whether a box at `origin` overlaps anything in `mask`.
    fn touching_any(&self, origin: Vec2, half_extents: Vec2, mask: LayerMask) -> bool;

    /// Distance to the nearest obstruction along the cast, if any.
    fn cast_box(&self, cast: &BoxCast) -> Option<f32>;
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// How far a hit may stray from the collider edge and still count as contact.
    pub tolerance: f32,
    /// Cast boxes span this fraction of the collider so floors don't read as walls.
    pub inset: f32,
    /// Size of the cast box along the cast direction.
    pub thickness: f32,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            tolerance: 0.05,
            inset: 0.9,
            thickness: 0.01,
        }
    }
}

/// Determine ground and wall contact for a box collider.
///
/// When both walls are touched the left one wins and the right side is never cast.
pub fn probe_contacts<P: CollisionProbe + ?Sized>(
    probe: &P,
    origin: Vec2,
    half_extents: Vec2,
    mask: LayerMask,
    settings: &ProbeSettings,
) -> ContactReport {
    let contact_extents = half_extents + Vec2::splat(settings.tolerance);
    if !probe.touching_any(origin, contact_extents, mask) {
        return ContactReport::default();
    }

    let half_thickness = settings.thickness * 0.5;
    let edge_hit = |direction: Dir2, box_half: Vec2, edge: f32| {
        let cast = BoxCast {
            origin,
            half_extents: box_half,
            direction,
            max_distance: edge + settings.tolerance,
            mask,
        };
        probe
            .cast_box(&cast)
            .is_some_and(|distance| (distance - edge).abs() <= settings.tolerance)
    };

    let ground_box = Vec2::new(half_extents.x * settings.inset, half_thickness);
    let on_ground = edge_hit(Dir2::NEG_Y, ground_box, half_extents.y);

    let wall_box = Vec2::new(half_thickness, half_extents.y * settings.inset);
    let wall = if edge_hit(Dir2::NEG_X, wall_box, half_extents.x) {
        WallContact::Left
    } else if edge_hit(Dir2::X, wall_box, half_extents.x) {
        WallContact::Right
    } else {
        WallContact::None
    };

    ContactReport {
        touching_any: true,
        on_ground,
        wall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct ScriptedProbe {
        touching: bool,
        down: Option<f32>,
        left: Option<f32>,
        right: Option<f32>,
        casts: RefCell<Vec<Dir2>>,
    }

    impl CollisionProbe for ScriptedProbe {
        fn touching_any(&self, _origin: Vec2, _half_extents: Vec2, _mask: LayerMask) -> bool {
            self.touching
        }

        fn cast_box(&self, cast: &BoxCast) -> Option<f32> {
            self.casts.borrow_mut().push(cast.direction);
            let hit = if cast.direction == Dir2::NEG_Y {
                self.down
            } else if cast.direction == Dir2::NEG_X {
                self.left
            } else {
                self.right
            };
            hit.filter(|d| *d <= cast.max_distance)
        }
    }

    const HALF: Vec2 = Vec2::new(0.5, 1.0);

    fn probe(p: &ScriptedProbe) -> ContactReport {
        probe_contacts(p, Vec2::ZERO, HALF, LayerMask::ALL, &ProbeSettings::default())
    }

    #[test]
    fn test_no_contact_short_circuits() {
        let p = ScriptedProbe {
            touching: false,
            down: Some(1.0),
            ..default()
        };
        assert_eq!(probe(&p), ContactReport::default());
        assert!(p.casts.borrow().is_empty());
    }

    #[test]
    fn test_ground_within_tolerance() {
        let p = ScriptedProbe {
            touching: true,
            down: Some(1.03),
            ..default()
        };
        let report = probe(&p);
        assert!(report.on_ground);
        assert_eq!(report.wall, WallContact::None);
    }

    #[test]
    fn test_hit_short_of_edge_is_not_ground() {
        // Something overlapping the collider, not under its feet
        let p = ScriptedProbe {
            touching: true,
            down: Some(0.4),
            ..default()
        };
        assert!(!probe(&p).on_ground);
    }

    #[test]
    fn test_right_wall() {
        let p = ScriptedProbe {
            touching: true,
            right: Some(0.5),
            ..default()
        };
        assert_eq!(probe(&p).wall, WallContact::Right);
    }

    #[test]
    fn test_left_wall_wins_tie() {
        let p = ScriptedProbe {
            touching: true,
            left: Some(0.5),
            right: Some(0.5),
            ..default()
        };
        assert_eq!(probe(&p).wall, WallContact::Left);
        assert!(!p.casts.borrow().contains(&Dir2::X));
    }

    #[test]
    fn test_cast_extents_are_inset() {
        struct Capture(RefCell<Vec<BoxCast>>);
        impl CollisionProbe for Capture {
            fn touching_any(&self, _: Vec2, _: Vec2, _: LayerMask) -> bool {
                true
            }
            fn cast_box(&self, cast: &BoxCast) -> Option<f32> {
                self.0.borrow_mut().push(*cast);
                None
            }
        }

        let capture = Capture(RefCell::new(Vec::new()));
        probe_contacts(
            &capture,
            Vec2::ZERO,
            HALF,
            LayerMask::ALL,
            &ProbeSettings::default(),
        );
        let casts = capture.0.borrow();
        assert_eq!(casts.len(), 3);

        let ground = casts[0];
        assert!((ground.half_extents.x - 0.45).abs() < 1e-6);
        assert!((ground.max_distance - 1.05).abs() < 1e-6);

        let left = casts[1];
        assert!((left.half_extents.y - 0.9).abs() < 1e-6);
        assert!((left.max_distance - 0.55).abs() < 1e-6);
    }
}
