//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub use collisions::SpatialProbe;
pub(crate) use collisions::detect_contacts;
pub(crate) use input::read_input;
pub(crate) use movement::apply_motor;
