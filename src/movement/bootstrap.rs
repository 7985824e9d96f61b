//! Movement domain: player bootstrap from the loaded movement profile.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::MovementProfile;
use crate::movement::{AttributeSet, ContactReport, GameLayer, MovementState, Player};

/// Collider size of the player body, in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 2.0);

/// Spawn the player with attributes from the loaded profile.
/// Runs after content loading; falls back to default attributes without a profile.
pub fn bootstrap_player(
    mut commands: Commands,
    profile: Option<Res<MovementProfile>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let attributes = match &profile {
        Some(profile) => AttributeSet::from_base(profile.attributes),
        None => {
            warn!("MovementProfile not available, using default player attributes");
            AttributeSet::default()
        }
    };

    let resolved = attributes.resolve();
    info!(
        "Spawning player: speed={}, jump_strength={}, extra_jumps={}, can_climb={}",
        resolved.speed, resolved.jump_strength, resolved.extra_jump_count, resolved.can_climb
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementState {
                remaining_jumps: resolved.air_jump_charges(),
                ..default()
            },
            ContactReport::default(),
            attributes,
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The motor owns gravity
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
