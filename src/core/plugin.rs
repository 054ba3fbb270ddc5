//! Core plugin that sets up game states and global events.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (InGame, GameOver)
/// - Global events (DamageEvent, DeathEvent)
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>();
    }
}
