//! Player-related components.
//!
//! The player is a facade from the AI core's point of view: it exposes a
//! health pool for enemies to damage and a world position for distance
//! checks, and nothing else.

use bevy::prelude::*;

use crate::combat::Health;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Default player health pool.
pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Spawn the player at a world position.
pub fn spawn_player(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Player,
            Health::new(PLAYER_MAX_HEALTH),
            Transform::from_translation(position),
        ))
        .id()
}
