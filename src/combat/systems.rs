//! Combat systems - damage application and death handling.

use bevy::prelude::*;

use super::components::*;
use crate::core::{DamageEvent, DeathEvent, GameState};
use crate::enemies::{Boss, Enemy};
use crate::player::Player;

/// System set ordering for one simulation tick.
///
/// All AI decisions for the tick complete before any health mutation is
/// applied, so every write to a shared Health goes through one system.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSet {
    /// Enemy decision-making and action emission
    Ai,
    /// Damage resolution and death detection
    Damage,
}

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        // System ordering
        .configure_sets(
            Update,
            (CombatSet::Ai, CombatSet::Damage)
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        // Damage systems
        .add_systems(
            Update,
            (apply_damage, check_deaths).chain().in_set(CombatSet::Damage),
        );
}

/// Apply queued damage to entities.
///
/// Incoming damage is transformed before it reaches Health: armor reduces
/// it by a flat fraction, and a boss scales it by its current phase
/// (resistant early, vulnerable late).
pub fn apply_damage(
    mut commands: Commands,
    mut damage_events: EventReader<DamageEvent>,
    mut health_query: Query<(&mut Health, Option<&Armor>, Option<&Boss>, Option<&Dead>)>,
    mut death_events: EventWriter<DeathEvent>,
) {
    // Track entities that died this frame to avoid duplicate death events
    let mut died_this_frame = std::collections::HashSet::new();

    for event in damage_events.read() {
        if died_this_frame.contains(&event.target) {
            continue;
        }

        // Negative or zero damage is invalid input, not a heal.
        if event.amount <= 0.0 {
            continue;
        }

        if let Ok((mut health, armor, boss, dead)) = health_query.get_mut(event.target) {
            // Skip if already dead (from previous frames)
            if dead.is_some() {
                continue;
            }

            let reduction = armor.map_or(0.0, Armor::fraction);
            let phase_scale = boss.map_or(1.0, |b| b.phase.damage_taken_multiplier());

            let final_damage = event.amount * (1.0 - reduction) * phase_scale;
            let lost = health.take_damage(final_damage);
            debug!(
                "{:?} took {:.1} damage ({:.1} base) from {:?}",
                event.target, lost, event.amount, event.source
            );

            if health.is_dead() {
                died_this_frame.insert(event.target);
                commands.entity(event.target).insert(Dead);
                death_events.send(DeathEvent {
                    entity: event.target,
                    killed_by: Some(event.source),
                });
            }
        }
    }
}

/// React to entity deaths.
///
/// A dead player ends the game; dead enemies are despawned by the enemy
/// module on the next tick.
pub fn check_deaths(
    mut death_events: EventReader<DeathEvent>,
    player_query: Query<Entity, With<Player>>,
    enemy_query: Query<Entity, With<Enemy>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in death_events.read() {
        if player_query.get(event.entity).is_ok() {
            info!("Player died! Transitioning to Game Over...");
            next_state.set(GameState::GameOver);
        } else if enemy_query.get(event.entity).is_ok() {
            info!("Enemy {:?} slain by {:?}", event.entity, event.killed_by);
        }
    }
}
