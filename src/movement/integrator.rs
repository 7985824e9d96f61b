//! Movement domain: drag decay, velocity assembly and the per-tick entry point.

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;

use crate::movement::state_machine::{TickOutput, advance};
use crate::movement::{
    ContactReport, MotorConstants, MovementAttributes, MovementInput, MovementState,
};

/// Destination for the velocity computed each tick.
pub trait VelocitySink {
    fn write_velocity(&mut self, velocity: Vec2);
}

impl VelocitySink for LinearVelocity {
    fn write_velocity(&mut self, velocity: Vec2) {
        self.0 = velocity;
    }
}

impl VelocitySink for Vec<Vec2> {
    fn write_velocity(&mut self, velocity: Vec2) {
        self.push(velocity);
    }
}

/// Drag coefficient for the current contact state, before natural drag scaling.
pub fn drag_coefficient(on_ground: bool, constants: &MotorConstants) -> f32 {
    if on_ground {
        constants.ground_drag
    } else {
        constants.air_drag
    }
}

/// Decay horizontal inertia and snap tiny inertia to zero.
///
/// The decay factor is kept within `[0, 1]` so inertia never grows, whatever
/// the configured drag.
pub fn apply_drag(
    state: &mut MovementState,
    natural_drag: f32,
    dt: f32,
    constants: &MotorConstants,
) {
    let drag = drag_coefficient(state.on_ground, constants) * natural_drag;
    let decay = (1.0 - drag * dt.max(0.0)).clamp(0.0, 1.0);
    state.inertia.x *= decay;

    if state.inertia.length() < constants.inertia_snap {
        state.inertia = Vec2::ZERO;
    }
}

/// Sum inertia and the input-driven component, clamping the horizontal part.
///
/// Input alone never exceeds `speed`; a kick impulse may, for as long as its
/// inertia lasts.
pub fn assemble_velocity(state: &MovementState, attributed: Vec2, speed: f32) -> Vec2 {
    let mut velocity = state.inertia + attributed;
    let max_horizontal = speed.max(state.inertia.x.abs());
    velocity.x = velocity.x.clamp(-max_horizontal, max_horizontal);
    velocity
}

/// Run one full tick in place and return the velocity for the body.
pub fn step(
    state: &mut MovementState,
    attrs: &MovementAttributes,
    contacts: &ContactReport,
    input: &MovementInput,
    dt: f32,
    constants: &MotorConstants,
) -> Vec2 {
    let TickOutput { attributed, .. } = advance(state, attrs, contacts, input, dt, constants);
    apply_drag(state, attrs.natural_drag, dt, constants);
    assemble_velocity(state, attributed, attrs.speed)
}

/// Pure form of [`step`]: takes the previous state and returns the next one
/// alongside the velocity.
pub fn update(
    state: MovementState,
    attrs: &MovementAttributes,
    contacts: &ContactReport,
    input: &MovementInput,
    dt: f32,
    constants: &MotorConstants,
) -> (MovementState, Vec2) {
    let mut next = state;
    let velocity = step(&mut next, attrs, contacts, input, dt, constants);
    (next, velocity)
}

/// Run a tick and hand the result to `sink`.
pub fn drive<S: VelocitySink + ?Sized>(
    sink: &mut S,
    state: &mut MovementState,
    attrs: &MovementAttributes,
    contacts: &ContactReport,
    input: &MovementInput,
    dt: f32,
    constants: &MotorConstants,
) -> Vec2 {
    let velocity = step(state, attrs, contacts, input, dt, constants);
    sink.write_velocity(velocity);
    velocity
}
