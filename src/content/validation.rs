//! Sanity checks for loaded movement profiles.
//!
//! Problems are reported, never fatal: the motor treats odd values as reduced
//! or zero effect rather than failing a tick.

use super::data::{MovementProfile, PROFILE_SCHEMA_VERSION};

/// A validation problem with the offending field and value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' = {} {}", self.field, self.value, self.reason)
    }
}

/// Helper macro for range checks on a profile field
macro_rules! check {
    ($errors:expr, $field:expr, $value:expr, $ok:expr, $reason:expr) => {
        let value = $value as f32;
        if !$ok(value) {
            $errors.push(ValidationError {
                field: $field,
                value,
                reason: $reason,
            });
        }
    };
}

/// Validate a movement profile.
/// Returns a list of validation errors, empty if the profile is sane.
pub fn validate_profile(profile: &MovementProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let non_negative = |v: f32| v >= 0.0;
    let positive = |v: f32| v > 0.0;

    check!(
        errors,
        "schema_version",
        profile.schema_version,
        |v: f32| v == PROFILE_SCHEMA_VERSION as f32,
        "is not a supported schema version"
    );

    let attrs = &profile.attributes;
    check!(errors, "attributes.speed", attrs.speed, non_negative, "must not be negative");
    check!(
        errors,
        "attributes.extra_jump_count",
        attrs.extra_jump_count,
        non_negative,
        "must not be negative"
    );
    check!(
        errors,
        "attributes.max_jump_time",
        attrs.max_jump_time,
        non_negative,
        "must not be negative"
    );
    check!(
        errors,
        "attributes.coyote_time",
        attrs.coyote_time,
        non_negative,
        "must not be negative"
    );
    check!(
        errors,
        "attributes.natural_drag",
        attrs.natural_drag,
        positive,
        "must be positive or horizontal inertia never decays"
    );

    let constants = &profile.constants;
    check!(
        errors,
        "constants.gravity_scale",
        constants.gravity_scale,
        non_negative,
        "must not be negative"
    );
    check!(
        errors,
        "constants.inertia_snap",
        constants.inertia_snap,
        non_negative,
        "must not be negative"
    );
    check!(
        errors,
        "constants.wall_jump_grace",
        constants.wall_jump_grace,
        non_negative,
        "must not be negative"
    );

    let probe = &profile.probe;
    check!(errors, "probe.tolerance", probe.tolerance, positive, "must be positive");
    check!(
        errors,
        "probe.inset",
        probe.inset,
        |v: f32| v > 0.0 && v <= 1.0,
        "must be within (0, 1]"
    );

    errors
}
