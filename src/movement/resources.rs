//! Movement domain: tuning constants and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Fixed tuning constants of the motor.
///
/// These values come from hand-tuning rather than any physical model and are
/// kept configurable instead of being re-derived.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotorConstants {
    /// Multiplier applied to `gravity * dt` while in freefall.
    pub gravity_scale: f32,
    /// Inertia shorter than this snaps to zero.
    pub inertia_snap: f32,
    /// Drag coefficient while grounded (scaled by natural drag).
    pub ground_drag: f32,
    /// Drag coefficient while airborne (scaled by natural drag).
    pub air_drag: f32,
    /// Seconds wall contact stays suppressed after a wall kick.
    pub wall_jump_grace: f32,
}

impl Default for MotorConstants {
    fn default() -> Self {
        Self {
            gravity_scale: 10.0,
            inertia_snap: 0.1,
            ground_drag: 10.0,
            air_drag: 2.0,
            wall_jump_grace: 0.1,
        }
    }
}

/// Resolved directional intent plus the jump edge for the local player.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementInput {
    /// Each component is -1, 0 or 1.
    pub axis: Vec2,
    /// True only on the tick the jump control went from released to pressed.
    pub jump_requested: bool,
}

impl MovementInput {
    pub fn new(x: f32, y: f32, jump_requested: bool) -> Self {
        Self {
            axis: Vec2::new(x, y),
            jump_requested,
        }
    }

    pub fn idle() -> Self {
        Self::default()
    }

    /// Holding the up direction sustains an ascent.
    pub fn holds_up(&self) -> bool {
        self.axis.y > 0.0
    }
}
