//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

impl GameLayer {
    /// Layers the contact probe treats as solid.
    pub fn solid_mask() -> LayerMask {
        [GameLayer::Ground, GameLayer::Wall].into()
    }
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

impl WallContact {
    /// -1 for a left wall, 1 for a right wall, 0 otherwise.
    pub fn sign(self) -> f32 {
        match self {
            WallContact::None => 0.0,
            WallContact::Left => -1.0,
            WallContact::Right => 1.0,
        }
    }

    /// True when horizontal input `x` pushes into this wall.
    pub fn blocks(self, x: f32) -> bool {
        self.sign() * x == 1.0
    }
}

/// Contact results for the current tick. Recomputed every tick, never carried.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactReport {
    pub touching_any: bool,
    pub on_ground: bool,
    pub wall: WallContact,
}

impl ContactReport {
    pub fn airborne() -> Self {
        Self::default()
    }

    pub fn grounded() -> Self {
        Self {
            touching_any: true,
            on_ground: true,
            wall: WallContact::None,
        }
    }

    pub fn against_wall(wall: WallContact) -> Self {
        Self {
            touching_any: wall != WallContact::None,
            on_ground: false,
            wall,
        }
    }
}

/// Motion regime the character was in for the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionRegime {
    Grounded,
    Climbing,
    #[default]
    Freefall,
    WallJumpGrace,
}

/// Per-character temporal movement state, owned exclusively by its character.
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub struct MovementState {
    /// Velocity carried across ticks (jump arcs, wall kicks), decayed by drag.
    pub inertia: Vec2,
    pub remaining_jumps: u32,
    /// Time left in the active ascent window; 0 means no active jump.
    pub remaining_jump_time: f32,
    pub coyote_timer: f32,
    pub wall_jump_grace_timer: f32,
    pub need_wall_gap: bool,
    pub on_ground: bool,
    pub touched_walls: WallContact,
    pub regime: MotionRegime,
}

impl MovementState {
    pub fn is_jumping(&self) -> bool {
        self.remaining_jump_time > 0.0
    }
}
