//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;
use crate::movement::input::{DirectionKeys, KeyState, SocdResolver};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut socd: Local<SocdResolver>,
    mut input: ResMut<MovementInput>,
) {
    let key = |codes: [KeyCode; 2]| {
        KeyState::new(keyboard.any_pressed(codes), keyboard.any_just_pressed(codes))
    };

    let keys = DirectionKeys {
        up: key([KeyCode::KeyW, KeyCode::ArrowUp]),
        down: key([KeyCode::KeyS, KeyCode::ArrowDown]),
        left: key([KeyCode::KeyA, KeyCode::ArrowLeft]),
        right: key([KeyCode::KeyD, KeyCode::ArrowRight]),
    };

    let (x, y) = socd.resolve(&keys);
    input.axis = Vec2::new(x, y);
    // Latched until the next fixed tick consumes it
    input.jump_requested |= keys.up.just_pressed;
}
