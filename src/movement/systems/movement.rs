//! Movement domain: fixed-tick motor driving the player's rigid body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::integrator::drive;
use crate::movement::{
    AttributeSet, ContactReport, MotorConstants, MovementInput, MovementState, Player,
};

pub(crate) fn apply_motor(
    time: Res<Time>,
    constants: Res<MotorConstants>,
    mut input: ResMut<MovementInput>,
    #[cfg(feature = "dev-tools")] mut trace: Option<ResMut<crate::trace::MotorTrace>>,
    mut query: Query<
        (
            &AttributeSet,
            &ContactReport,
            &mut MovementState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let tick_input = *input;
    // The jump edge belongs to exactly one fixed tick
    input.jump_requested = false;

    for (attributes, contacts, mut state, mut velocity) in &mut query {
        #[cfg(feature = "dev-tools")]
        let before = state.clone();

        #[cfg_attr(not(feature = "dev-tools"), allow(unused_variables))]
        let output = drive(
            &mut *velocity,
            &mut *state,
            &attributes.resolve(),
            contacts,
            &tick_input,
            dt,
            &constants,
        );

        #[cfg(feature = "dev-tools")]
        if let Some(trace) = trace.as_mut() {
            trace.record(&before, contacts, &tick_input, dt, output);
        }
    }
}
