//! Movement domain: a deterministic per-tick motor for a 2D platformer body.
//!
//! Each fixed tick the probe reads world contact once, the state machine
//! applies its transition rules, and the integrator emits the velocity that
//! avian2d integrates.

pub mod attributes;
pub mod bootstrap;
mod components;
pub mod dev;
pub mod input;
pub mod integrator;
pub mod probe;
mod resources;
pub mod state_machine;
mod systems;

pub use attributes::{AttributeSet, AttributeValues, MovementAttributes};
pub use components::{
    ContactReport, GameLayer, Ground, MotionRegime, MovementState, Player, Wall, WallContact,
};
pub use integrator::{VelocitySink, step, update};
pub use probe::{CollisionProbe, ProbeSettings};
pub use resources::{MotorConstants, MovementInput};
pub use state_machine::{JumpKind, TickOutput};
pub use systems::SpatialProbe;

use bevy::prelude::*;

use crate::movement::systems::{apply_motor, detect_contacts, read_input};

/// System sets for the fixed-tick motor.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MotorSet {
    Probe,
    Integrate,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotorConstants>()
            .init_resource::<ProbeSettings>()
            .init_resource::<MovementInput>()
            .configure_sets(FixedUpdate, (MotorSet::Probe, MotorSet::Integrate).chain())
            .add_systems(Update, read_input)
            .add_systems(FixedUpdate, detect_contacts.in_set(MotorSet::Probe))
            .add_systems(FixedUpdate, apply_motor.in_set(MotorSet::Integrate));

        #[cfg(feature = "dev-tools")]
        app.init_resource::<crate::trace::MotorTrace>();
    }
}
