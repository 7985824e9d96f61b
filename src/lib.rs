//! Deterministic per-tick movement motor for a 2D platformer character.
//!
//! The [`movement`] domain holds the motor itself (attribute resolution,
//! contact probing, the transition rules and velocity integration) plus the
//! Bevy/avian2d systems that drive it at the fixed physics rate. [`content`]
//! loads movement tuning from RON files.

pub mod content;
pub mod movement;
#[cfg(feature = "dev-tools")]
pub mod trace;

pub use content::ContentPlugin;
pub use movement::MovementPlugin;
