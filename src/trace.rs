//! Dev tools: per-tick motor trace for debugging and deterministic replay.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::movement::{
    ContactReport, MotionRegime, MotorConstants, MovementAttributes, MovementInput,
    MovementState, WallContact, update,
};

/// Serializable copy of [`MovementState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub inertia: [f32; 2],
    pub remaining_jumps: u32,
    pub remaining_jump_time: f32,
    pub coyote_timer: f32,
    pub wall_jump_grace_timer: f32,
    pub need_wall_gap: bool,
    pub on_ground: bool,
    pub touched_walls: i8,
    pub regime: String,
}

impl From<&MovementState> for StateSnapshot {
    fn from(state: &MovementState) -> Self {
        Self {
            inertia: state.inertia.to_array(),
            remaining_jumps: state.remaining_jumps,
            remaining_jump_time: state.remaining_jump_time,
            coyote_timer: state.coyote_timer,
            wall_jump_grace_timer: state.wall_jump_grace_timer,
            need_wall_gap: state.need_wall_gap,
            on_ground: state.on_ground,
            touched_walls: state.touched_walls.sign() as i8,
            regime: format!("{:?}", state.regime),
        }
    }
}

impl StateSnapshot {
    pub fn to_state(&self) -> MovementState {
        MovementState {
            inertia: Vec2::from_array(self.inertia),
            remaining_jumps: self.remaining_jumps,
            remaining_jump_time: self.remaining_jump_time,
            coyote_timer: self.coyote_timer,
            wall_jump_grace_timer: self.wall_jump_grace_timer,
            need_wall_gap: self.need_wall_gap,
            on_ground: self.on_ground,
            touched_walls: wall_from_sign(self.touched_walls),
            regime: match self.regime.as_str() {
                "Grounded" => MotionRegime::Grounded,
                "Climbing" => MotionRegime::Climbing,
                "WallJumpGrace" => MotionRegime::WallJumpGrace,
                _ => MotionRegime::Freefall,
            },
        }
    }
}

fn wall_from_sign(sign: i8) -> WallContact {
    match sign {
        -1 => WallContact::Left,
        1 => WallContact::Right,
        _ => WallContact::None,
    }
}

/// Inputs and outcome of one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    pub dt: f32,
    pub axis: [f32; 2],
    pub jump_requested: bool,
    pub touching_any: bool,
    pub on_ground: bool,
    pub wall: i8,
    /// State before the tick ran.
    pub state: StateSnapshot,
    pub velocity: [f32; 2],
}

impl TickRecord {
    pub fn input(&self) -> MovementInput {
        MovementInput {
            axis: Vec2::from_array(self.axis),
            jump_requested: self.jump_requested,
        }
    }

    pub fn contacts(&self) -> ContactReport {
        ContactReport {
            touching_any: self.touching_any,
            on_ground: self.on_ground,
            wall: wall_from_sign(self.wall),
        }
    }
}

/// Bounded ring of recent tick records.
#[derive(Resource, Debug, Clone)]
pub struct MotorTrace {
    pub enabled: bool,
    pub capacity: usize,
    next_tick: u64,
    records: VecDeque<TickRecord>,
}

impl Default for MotorTrace {
    fn default() -> Self {
        Self::with_capacity(600)
    }
}

impl MotorTrace {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            enabled: true,
            capacity,
            next_tick: 0,
            records: VecDeque::new(),
        }
    }

    pub fn record(
        &mut self,
        before: &MovementState,
        contacts: &ContactReport,
        input: &MovementInput,
        dt: f32,
        velocity: Vec2,
    ) {
        if !self.enabled || self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(TickRecord {
            tick: self.next_tick,
            dt,
            axis: input.axis.to_array(),
            jump_requested: input.jump_requested,
            touching_any: contacts.touching_any,
            on_ground: contacts.on_ground,
            wall: contacts.wall.sign() as i8,
            state: before.into(),
            velocity: velocity.to_array(),
        });
        self.next_tick += 1;
    }

    pub fn records(&self) -> impl Iterator<Item = &TickRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// One JSON object per line, oldest first.
    pub fn to_json_lines(&self) -> Result<String, serde_json::Error> {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }

    pub fn from_json_lines(text: &str) -> Result<Vec<TickRecord>, serde_json::Error> {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str::<TickRecord>)
            .collect()
    }
}

/// Re-run recorded ticks from the first record's state and return the
/// velocities produced. Identical inputs must yield identical velocities.
pub fn replay(
    records: &[TickRecord],
    attrs: &MovementAttributes,
    constants: &MotorConstants,
) -> Vec<Vec2> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let mut state = first.state.to_state();
    records
        .iter()
        .map(|record| {
            let (next, velocity) = update(
                std::mem::take(&mut state),
                attrs,
                &record.contacts(),
                &record.input(),
                record.dt,
                constants,
            );
            state = next;
            velocity
        })
        .collect()
}
