//! Content domain: data-driven movement tuning loaded at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{MovementProfile, PROFILE_SCHEMA_VERSION};
pub use loader::{ContentLoadError, load_movement_profile, parse_movement_profile};
pub use validation::{ValidationError, validate_profile};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::movement::{MotorConstants, ProbeSettings};

/// Directory holding the RON content files.
#[derive(Resource, Debug, Clone)]
pub struct ContentPath(pub PathBuf);

impl Default for ContentPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data"))
    }
}

/// Systems that must finish before anything reads the loaded profile.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentLoaded;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPath>()
            .add_systems(Startup, load_movement_content.in_set(ContentLoaded));
    }
}

fn load_movement_content(mut commands: Commands, path: Res<ContentPath>) {
    let profile = match load_movement_profile(&path.0) {
        Ok(profile) => {
            info!("Loaded movement profile from {}", path.0.display());
            profile
        }
        Err(e) => {
            error!("{}", e);
            warn!("Falling back to default movement profile");
            MovementProfile::default()
        }
    };

    for problem in validate_profile(&profile) {
        warn!("Movement profile: {}", problem);
    }

    apply_profile(&mut commands, profile);
}

/// Install the profile's tuning as the active motor resources.
pub fn apply_profile(commands: &mut Commands, profile: MovementProfile) {
    commands.insert_resource::<MotorConstants>(profile.constants);
    commands.insert_resource::<ProbeSettings>(profile.probe);
    commands.insert_resource(profile);
}
