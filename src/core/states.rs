//! Game state definitions that control the overall flow of the simulation.
//!
//! States determine which systems run at any given time. Combat and AI
//! systems only run in the InGame state; GameOver freezes the arena.

use bevy::prelude::*;

/// Main game states - controls overall simulation flow.
///
/// The simulation starts directly in `InGame` and moves to `GameOver`
/// when the player dies. There is no revive path back to `InGame`.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Active gameplay - enemies think and fight every tick
    #[default]
    InGame,
    /// Player has died - the arena is frozen
    GameOver,
}
