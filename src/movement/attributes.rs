//! Movement domain: base/modifier attribute records and their resolution.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One layer of movement attributes. Used both as the base layer and as the
/// accumulated modifier layer of an [`AttributeSet`].
///
/// Every field defaults to zero so an entry omitted from a profile file has no
/// effect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AttributeValues {
    pub speed: f32,
    pub jump_strength: f32,
    pub extra_jump_count: i32,
    pub can_climb: bool,
    pub gravity: f32,
    pub climbing_fall_speed: f32,
    pub climb_jump_out: f32,
    pub max_jump_time: f32,
    pub natural_drag: f32,
    pub coyote_time: f32,
}

impl AttributeValues {
    /// Source defaults for a freshly spawned character.
    pub fn base_defaults() -> Self {
        Self {
            speed: 10.0,
            jump_strength: 10.0,
            extra_jump_count: 1,
            natural_drag: 1.0,
            ..default()
        }
    }
}

/// Effective movement parameters for a single tick.
///
/// Produced by [`AttributeSet::resolve`]; never stored between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementAttributes {
    pub speed: f32,
    pub jump_strength: f32,
    pub extra_jump_count: i32,
    pub can_climb: bool,
    pub gravity: f32,
    pub climbing_fall_speed: f32,
    pub climb_jump_out: f32,
    pub max_jump_time: f32,
    pub natural_drag: f32,
    pub coyote_time: f32,
}

impl MovementAttributes {
    /// Air-jump charges granted on landing. A negative summed count grants none.
    pub fn air_jump_charges(&self) -> u32 {
        self.extra_jump_count.max(0) as u32
    }
}

/// Base and modifier layers for a character's movement attributes.
///
/// Gameplay code only ever touches `base` or `modified`; the effective values
/// are recomputed by [`resolve`](Self::resolve) on every read so a buff or
/// debuff takes hold on the very next tick.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct AttributeSet {
    pub base: AttributeValues,
    pub modified: AttributeValues,
    /// Active modifiers granting climbing; `modified.can_climb` tracks `> 0`.
    climb_grants: u32,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::from_base(AttributeValues::base_defaults())
    }
}

impl AttributeSet {
    pub fn from_base(base: AttributeValues) -> Self {
        Self {
            base,
            modified: AttributeValues::default(),
            climb_grants: 0,
        }
    }

    /// Sum the two layers into the effective attributes.
    pub fn resolve(&self) -> MovementAttributes {
        let (b, m) = (&self.base, &self.modified);
        MovementAttributes {
            speed: b.speed + m.speed,
            jump_strength: b.jump_strength + m.jump_strength,
            extra_jump_count: b.extra_jump_count + m.extra_jump_count,
            // A modifier may grant climbing but never revoke a base grant
            can_climb: b.can_climb || m.can_climb,
            gravity: b.gravity + m.gravity,
            climbing_fall_speed: b.climbing_fall_speed + m.climbing_fall_speed,
            climb_jump_out: b.climb_jump_out + m.climb_jump_out,
            max_jump_time: b.max_jump_time + m.max_jump_time,
            natural_drag: b.natural_drag + m.natural_drag,
            coyote_time: b.coyote_time + m.coyote_time,
        }
    }

    /// Stack a modifier delta on top of the current modifiers.
    pub fn apply_modifier(&mut self, delta: &AttributeValues) {
        let m = &mut self.modified;
        m.speed += delta.speed;
        m.jump_strength += delta.jump_strength;
        m.extra_jump_count += delta.extra_jump_count;
        if delta.can_climb {
            self.climb_grants += 1;
            m.can_climb = true;
        }
        m.gravity += delta.gravity;
        m.climbing_fall_speed += delta.climbing_fall_speed;
        m.climb_jump_out += delta.climb_jump_out;
        m.max_jump_time += delta.max_jump_time;
        m.natural_drag += delta.natural_drag;
        m.coyote_time += delta.coyote_time;
    }

    /// Undo a delta previously passed to [`apply_modifier`](Self::apply_modifier).
    ///
    /// Climbing stays granted while any other applied modifier still grants it.
    pub fn remove_modifier(&mut self, delta: &AttributeValues) {
        let m = &mut self.modified;
        m.speed -= delta.speed;
        m.jump_strength -= delta.jump_strength;
        m.extra_jump_count -= delta.extra_jump_count;
        if delta.can_climb {
            self.climb_grants = self.climb_grants.saturating_sub(1);
            m.can_climb = self.climb_grants > 0;
        }
        m.gravity -= delta.gravity;
        m.climbing_fall_speed -= delta.climbing_fall_speed;
        m.climb_jump_out -= delta.climb_jump_out;
        m.max_jump_time -= delta.max_jump_time;
        m.natural_drag -= delta.natural_drag;
        m.coyote_time -= delta.coyote_time;
    }

    pub fn clear_modifiers(&mut self) {
        self.modified = AttributeValues::default();
        self.climb_grants = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_matches_source_defaults() {
        let attrs = AttributeSet::default().resolve();
        assert_eq!(attrs.speed, 10.0);
        assert_eq!(attrs.jump_strength, 10.0);
        assert_eq!(attrs.extra_jump_count, 1);
        assert_eq!(attrs.natural_drag, 1.0);
        assert_eq!(attrs.gravity, 0.0);
        assert!(!attrs.can_climb);
    }

    #[test]
    fn test_modifier_takes_effect_on_next_resolve() {
        let mut set = AttributeSet::default();
        let haste = AttributeValues {
            speed: 5.0,
            ..default()
        };

        set.apply_modifier(&haste);
        assert_eq!(set.resolve().speed, 15.0);

        set.remove_modifier(&haste);
        assert_eq!(set.resolve().speed, 10.0);
    }

    #[test]
    fn test_climb_grant_from_modifier() {
        let mut set = AttributeSet::default();
        let grant = AttributeValues {
            can_climb: true,
            ..default()
        };
        set.apply_modifier(&grant);
        assert!(set.resolve().can_climb);

        set.clear_modifiers();
        assert!(!set.resolve().can_climb);
    }

    #[test]
    fn test_climb_grant_survives_removal_of_another_grant() {
        let mut set = AttributeSet::default();
        let boots = AttributeValues {
            can_climb: true,
            ..default()
        };
        let gloves = AttributeValues {
            can_climb: true,
            speed: 1.0,
            ..default()
        };

        set.apply_modifier(&boots);
        set.apply_modifier(&gloves);
        set.remove_modifier(&boots);
        assert!(set.resolve().can_climb);

        set.remove_modifier(&gloves);
        assert!(!set.resolve().can_climb);
        assert_eq!(set.resolve().speed, 10.0);
    }

    #[test]
    fn test_negative_jump_count_grants_no_charges() {
        let mut set = AttributeSet::default();
        set.apply_modifier(&AttributeValues {
            extra_jump_count: -3,
            ..default()
        });
        let attrs = set.resolve();
        assert_eq!(attrs.extra_jump_count, -2);
        assert_eq!(attrs.air_jump_charges(), 0);
    }
}
