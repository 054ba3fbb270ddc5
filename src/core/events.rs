//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. For example, the enemy
//! AI systems send DamageEvents, and the damage system receives them to
//! apply the health change. This keeps systems independent and testable.

use bevy::prelude::*;

/// Sent when an entity takes damage.
///
/// The damage system listens for these events and applies the actual
/// health reduction, taking armor and boss phase scaling into account.
#[derive(Event)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Base damage amount before reductions
    pub amount: f32,
}

/// Sent when an entity dies (health reaches 0).
///
/// Systems can listen for this to remove the entity from the simulation
/// or, for the player, end the game.
#[derive(Event)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed them (if any)
    pub killed_by: Option<Entity>,
}
