//! Content domain: tests for movement profile parsing and validation.

use super::{MovementProfile, PROFILE_SCHEMA_VERSION, parse_movement_profile, validate_profile};

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_full_profile() {
    let ron = r#"
        (
            schema_version: 1,
            attributes: (
                speed: 8.0,
                jump_strength: 12.0,
                extra_jump_count: 2,
                can_climb: true,
                gravity: -20.0,
                climbing_fall_speed: -2.0,
                climb_jump_out: 14.0,
                max_jump_time: 0.3,
                natural_drag: 1.0,
                coyote_time: 0.1,
            ),
            constants: (
                gravity_scale: 10.0,
                inertia_snap: 0.1,
                ground_drag: 10.0,
                air_drag: 2.0,
                wall_jump_grace: 0.1,
            ),
            probe: (tolerance: 0.05, inset: 0.9, thickness: 0.01),
        )
    "#;

    let profile = parse_movement_profile(ron, "inline").expect("profile should parse");
    assert_eq!(profile.schema_version, PROFILE_SCHEMA_VERSION);
    assert_eq!(profile.attributes.extra_jump_count, 2);
    assert!(profile.attributes.can_climb);
    assert_eq!(profile.attributes.gravity, -20.0);
    assert_eq!(profile.constants.air_drag, 2.0);
    assert!(validate_profile(&profile).is_empty());
}

#[test]
fn test_omitted_attributes_are_zero_effect() {
    let ron = "(schema_version: 1, attributes: (speed: 6.0, natural_drag: 1.0))";
    let profile = parse_movement_profile(ron, "inline").expect("profile should parse");

    assert_eq!(profile.attributes.speed, 6.0);
    assert_eq!(profile.attributes.jump_strength, 0.0);
    assert_eq!(profile.attributes.extra_jump_count, 0);
    assert!(!profile.attributes.can_climb);
    // Sections left out entirely fall back to the tuned defaults
    assert_eq!(profile.constants.gravity_scale, 10.0);
    assert_eq!(profile.probe.tolerance, 0.05);
}

#[test]
fn test_parse_error_names_origin() {
    let err = parse_movement_profile("(schema_version: \"one\")", "movement.ron")
        .expect_err("string schema version should fail");
    assert_eq!(err.file, "movement.ron");
    assert!(err.to_string().starts_with("Failed to load movement.ron"));
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = super::load_movement_profile(std::path::Path::new("does/not/exist"))
        .expect_err("missing directory should fail");
    assert!(err.message.starts_with("IO error"));
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_profile_is_valid() {
    assert!(validate_profile(&MovementProfile::default()).is_empty());
}

#[test]
fn test_validation_flags_bad_values() {
    let mut profile = MovementProfile::default();
    profile.attributes.natural_drag = 0.0;
    profile.attributes.max_jump_time = -0.1;
    profile.probe.inset = 1.5;

    let errors = validate_profile(&profile);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(errors.len(), 3);
    assert!(fields.contains(&"attributes.natural_drag"));
    assert!(fields.contains(&"attributes.max_jump_time"));
    assert!(fields.contains(&"probe.inset"));
}

#[test]
fn test_validation_flags_schema_mismatch() {
    let profile = MovementProfile {
        schema_version: 99,
        ..Default::default()
    };
    let errors = validate_profile(&profile);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "schema_version");
}
