//! Movement domain: per-tick transition rules for grounded, climbing,
//! freefall and wall-jump-grace motion.

use bevy::prelude::*;

use crate::movement::{
    ContactReport, MotionRegime, MotorConstants, MovementAttributes, MovementInput,
    MovementState, WallContact,
};

/// Which jump, if any, was granted this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpKind {
    #[default]
    None,
    Ground,
    Coyote,
    Air,
    WallKick,
}

/// Result of the transition rules for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutput {
    /// Input-driven velocity for this tick, on top of carried inertia.
    pub attributed: Vec2,
    pub jump: JumpKind,
}

/// Apply the transition rules for one tick, mutating `state` in place.
///
/// Drag and the final velocity are left to the integrator. A tick that grants
/// a jump only arms the ascent window; the sustained ascent starts next tick.
pub fn advance(
    state: &mut MovementState,
    attrs: &MovementAttributes,
    contacts: &ContactReport,
    input: &MovementInput,
    dt: f32,
    constants: &MotorConstants,
) -> TickOutput {
    let dt = dt.max(0.0);
    let was_on_ground = state.on_ground;
    state.on_ground = contacts.on_ground;

    let wall = resolve_wall_gap(state, contacts.wall, input, dt);
    state.touched_walls = wall;

    let x = input.axis.x;
    let wants_jump = input.jump_requested && input.holds_up();
    let mut out = TickOutput::default();

    if state.on_ground {
        state.coyote_timer = attrs.coyote_time;
        state.remaining_jumps = attrs.air_jump_charges();
        state.inertia.y = 0.0;
        state.regime = MotionRegime::Grounded;

        if !was_on_ground {
            debug!(
                "Landed: remaining_jumps={}, coyote_timer={}",
                state.remaining_jumps, state.coyote_timer
            );
        }

        if !wall.blocks(x) {
            out.attributed.x = x * attrs.speed;
        }

        if wants_jump {
            begin_jump(state, attrs);
            out.jump = JumpKind::Ground;
        }
    } else {
        state.regime = MotionRegime::Freefall;

        if wall.blocks(x) {
            if !state.is_jumping() {
                if wants_jump {
                    wall_kick(state, attrs, x, constants);
                    out.jump = JumpKind::WallKick;
                } else {
                    state.inertia.y = attrs.climbing_fall_speed;
                    state.regime = MotionRegime::Climbing;
                }
            }
        } else {
            out.attributed.x = x * attrs.speed;
            if !state.is_jumping() {
                state.inertia.y += attrs.gravity * dt * constants.gravity_scale;
            }
        }

        state.coyote_timer = (state.coyote_timer - dt).max(0.0);
        if wants_jump && !state.need_wall_gap {
            if state.coyote_timer > 0.0 {
                begin_jump(state, attrs);
                out.jump = JumpKind::Coyote;
                debug!("Coyote jump granted");
            } else if state.remaining_jumps > 0 {
                state.remaining_jumps -= 1;
                begin_jump(state, attrs);
                out.jump = JumpKind::Air;
                debug!("Air jump: remaining_jumps now {}", state.remaining_jumps);
            }
        }

        if state.need_wall_gap {
            state.regime = MotionRegime::WallJumpGrace;
        }
    }

    if out.jump == JumpKind::None {
        out.attributed.y = sustain_ascent(state, attrs, input, dt);
    }

    out
}

/// Returns the wall contact the rest of the tick should see.
///
/// While the post-kick gap is open the kicked wall is hidden; otherwise
/// horizontal inertia is dropped against a wall or without horizontal input.
fn resolve_wall_gap(
    state: &mut MovementState,
    touched: WallContact,
    input: &MovementInput,
    dt: f32,
) -> WallContact {
    if state.need_wall_gap {
        state.wall_jump_grace_timer = (state.wall_jump_grace_timer - dt).max(0.0);
        if touched != WallContact::None && state.wall_jump_grace_timer > 0.0 {
            return WallContact::None;
        }
        state.need_wall_gap = false;
        state.wall_jump_grace_timer = 0.0;
        debug!("Wall gap closed: touched={:?}", touched);
    } else if touched != WallContact::None || input.axis.x == 0.0 {
        state.inertia.x = 0.0;
    }
    touched
}

fn begin_jump(state: &mut MovementState, attrs: &MovementAttributes) {
    state.remaining_jump_time = attrs.max_jump_time.max(0.0);
    state.coyote_timer = 0.0;
    state.inertia.y = 0.0;
}

fn wall_kick(state: &mut MovementState, attrs: &MovementAttributes, x: f32, constants: &MotorConstants) {
    begin_jump(state, attrs);
    state.inertia.x = -x * attrs.climb_jump_out;
    state.wall_jump_grace_timer = constants.wall_jump_grace;
    state.need_wall_gap = true;
    debug!("Wall kick: inertia.x={}", state.inertia.x);
}

/// Variable jump height: holding up keeps the ascent going until the window
/// runs out. Releasing ends it for good.
fn sustain_ascent(
    state: &mut MovementState,
    attrs: &MovementAttributes,
    input: &MovementInput,
    dt: f32,
) -> f32 {
    if state.is_jumping() && input.holds_up() {
        state.remaining_jump_time = (state.remaining_jump_time - dt).max(0.0);
        attrs.jump_strength
    } else {
        state.remaining_jump_time = 0.0;
        0.0
    }
}
