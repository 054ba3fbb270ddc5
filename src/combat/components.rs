//! Combat-related components.

use bevy::prelude::*;

/// Component for entities that can take damage.
///
/// Current health is clamped to `[0, maximum]` on every mutation, and a
/// dead entity stays dead: there is no revive operation, so healing a
/// corpse is a no-op.
#[derive(Component, Debug)]
pub struct Health {
    current: f32,
    maximum: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Subtract `amount` from current health, clamped at zero.
    ///
    /// Non-positive amounts are rejected - damage never heals. Returns the
    /// health actually lost.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        if amount <= 0.0 {
            return 0.0;
        }
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    /// Add `amount` to current health, clamped at maximum.
    ///
    /// Non-positive amounts are rejected, and a dead entity cannot be
    /// healed back to life. Returns the health actually restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        if amount <= 0.0 || self.is_dead() {
            return 0.0;
        }
        let actual = amount.min(self.maximum - self.current);
        self.current += actual;
        actual
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    pub fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    /// Current health as a fraction of maximum, in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.maximum > 0.0 {
            self.current / self.maximum
        } else {
            0.0
        }
    }
}

/// Damage-reduction fraction applied to all incoming damage.
///
/// A value of 0.3 means the entity takes 70% of base damage. Values
/// outside `[0, 1]` are clamped at the point of use.
#[derive(Component, Debug, Clone, Copy)]
pub struct Armor(pub f32);

impl Armor {
    /// Reduction fraction, clamped to `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.0.clamp(0.0, 1.0)
    }
}

/// Marker component for entities that have died (prevents multiple death events).
#[derive(Component)]
pub struct Dead;
