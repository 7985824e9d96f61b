//! Movement domain: sandbox camera and test room for trying out the motor.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

/// World units are metres; the camera maps one metre to this many pixels.
const PIXELS_PER_UNIT: f32 = 40.0;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_scale(Vec3::splat(1.0 / PIXELS_PER_UNIT)),
    ));
}

pub fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let mut block = |marker_is_ground: bool, color: Color, size: Vec2, at: Vec2| {
        let mut entity = commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(at.x, at.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));
        if marker_is_ground {
            entity.insert((Ground, ground_layers));
        } else {
            entity.insert((Wall, wall_layers));
        }
    };

    // Floor
    block(true, ground_color, Vec2::new(20.0, 1.0), Vec2::new(0.0, -5.0));
    // Side walls
    block(false, wall_color, Vec2::new(1.0, 12.0), Vec2::new(-10.5, 1.0));
    block(false, wall_color, Vec2::new(1.0, 12.0), Vec2::new(10.5, 1.0));
    // Platforms, stepping upwards
    block(true, platform_color, Vec2::new(4.0, 0.5), Vec2::new(-6.0, -1.5));
    block(true, platform_color, Vec2::new(4.0, 0.5), Vec2::new(6.0, 1.0));
    block(true, platform_color, Vec2::new(3.0, 0.5), Vec2::new(0.0, 3.5));
    // Pillar for wall kick practice
    block(false, wall_color, Vec2::new(0.75, 5.0), Vec2::new(-2.5, -2.0));
}
