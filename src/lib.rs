//! Gravemarch - the enemy AI and combat core of a small real-time
//! dungeon crawler.
//!
//! # Architecture
//!
//! The crate is organized into plugins, each handling one aspect of the
//! simulation:
//!
//! - **Core**: game states, global events, the shared cooldown primitive
//! - **Combat**: health, armor, damage resolution, death handling
//! - **Player**: the target facade enemies perceive and attack
//! - **Enemies**: behavior variants, the boss phase machine, data-driven
//!   definitions, spawning
//!
//! Rendering, physics, audio, and resource loading live outside this
//! crate; the simulation runs headless. One pass of the `Update`
//! schedule is one simulation tick, and all enemy decisions of a tick
//! complete before any damage is applied.

pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;

use bevy::prelude::*;

/// Main plugin that adds all sub-plugins.
pub struct GravemarchPlugin;

impl Plugin for GravemarchPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            // Combat systems
            .add_plugins(combat::CombatPlugin)
            // Enemy systems
            .add_plugins(enemies::EnemyPlugin);
    }
}
