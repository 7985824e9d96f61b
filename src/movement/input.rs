//! Movement domain: most-recently-pressed resolution of opposing directions.

/// Held/just-pressed state of the four directions for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionKeys {
    pub up: KeyState,
    pub down: KeyState,
    pub left: KeyState,
    pub right: KeyState,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    pub held: bool,
    pub just_pressed: bool,
}

impl KeyState {
    pub fn new(held: bool, just_pressed: bool) -> Self {
        Self { held, just_pressed }
    }
}

/// Resolves opposing directions by giving priority to the one pressed last.
///
/// Press order restarts once every direction is released.
#[derive(Debug, Clone, Default)]
pub struct SocdResolver {
    press_counter: u32,
    last_up: u32,
    last_down: u32,
    last_left: u32,
    last_right: u32,
}

impl SocdResolver {
    /// Returns `(x, y)` with each component in `{-1, 0, 1}`.
    pub fn resolve(&mut self, keys: &DirectionKeys) -> (f32, f32) {
        if !(keys.up.held || keys.down.held || keys.left.held || keys.right.held) {
            *self = Self::default();
        }

        stamp(keys.up.just_pressed, &mut self.last_up, &mut self.press_counter);
        stamp(keys.down.just_pressed, &mut self.last_down, &mut self.press_counter);
        stamp(keys.left.just_pressed, &mut self.last_left, &mut self.press_counter);
        stamp(keys.right.just_pressed, &mut self.last_right, &mut self.press_counter);

        let x = resolve_axis(
            keys.left.held,
            keys.right.held,
            self.last_left,
            self.last_right,
        );
        let y = resolve_axis(keys.down.held, keys.up.held, self.last_down, self.last_up);
        (x, y)
    }
}

fn stamp(pressed: bool, slot: &mut u32, counter: &mut u32) {
    if pressed {
        *counter += 1;
        *slot = *counter;
    }
}

fn resolve_axis(negative: bool, positive: bool, last_negative: u32, last_positive: u32) -> f32 {
    match (negative, positive) {
        (true, true) if last_negative > last_positive => -1.0,
        (true, true) => 1.0,
        (true, false) => -1.0,
        (false, true) => 1.0,
        (false, false) => 0.0,
    }
}
