//! Serializable movement profile read from `movement.ron`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{AttributeValues, MotorConstants, ProbeSettings};

pub const PROFILE_SCHEMA_VERSION: u32 = 1;

/// Everything needed to tune a character's movement from data.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementProfile {
    pub schema_version: u32,
    /// Base layer of the player's attribute set.
    pub attributes: AttributeValues,
    pub constants: MotorConstants,
    pub probe: ProbeSettings,
}

impl Default for MovementProfile {
    fn default() -> Self {
        Self {
            schema_version: PROFILE_SCHEMA_VERSION,
            attributes: AttributeValues::base_defaults(),
            constants: MotorConstants::default(),
            probe: ProbeSettings::default(),
        }
    }
}
