//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::boss;
use super::data::{load_enemy_definitions, EnemyRegistry};
use crate::combat::CombatSet;

/// Enemy plugin - handles enemy definitions, AI, and death cleanup.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyRegistry>()
            // Boss events
            .add_event::<boss::PhaseChangeEvent>()
            .add_event::<boss::BossSpecialEvent>()
            // Definition overrides load once at startup
            .add_systems(Startup, load_enemy_definitions)
            // One AI pass per simulation tick, before damage resolution.
            // Phase transitions run first so this tick's behavior sees the
            // phase implied by current health.
            .add_systems(
                Update,
                (
                    ai::despawn_dead_enemies,
                    boss::boss_phase_transitions,
                    ai::ai_basic,
                    ai::ai_fast,
                    ai::ai_tank,
                    ai::ai_ranged,
                    boss::ai_boss,
                    boss::boss_special_timer,
                    boss::execute_boss_specials,
                )
                    .chain()
                    .in_set(CombatSet::Ai),
            );
    }
}
