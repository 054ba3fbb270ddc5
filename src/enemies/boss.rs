//! Boss behavior - the phase state machine and special attacks.
//!
//! The boss runs the same engage-or-approach logic as other melee
//! enemies, but its effective reach scales with an escalating phase
//! machine, and an independent timer fires one of three special attacks
//! on a fixed cadence.

use bevy::prelude::*;
use rand::Rng;

use crate::combat::{Dead, Health};
use crate::core::DamageEvent;
use crate::player::Player;

use super::ai::{horizontal_direction, horizontal_distance, try_melee_attack};
use super::components::*;
use super::data::EnemyRegistry;
use super::spawning::spawn_enemy;

/// Health fraction at or below which the boss is forced into Final,
/// regardless of current phase or enrage threshold.
pub const FINAL_PHASE_THRESHOLD: f32 = 0.2;

/// Radius of the area special, as a multiple of attack range.
const AREA_ATTACK_RADIUS_FACTOR: f32 = 2.0;
/// Damage of the area special, as a multiple of attack damage.
const AREA_ATTACK_DAMAGE_FACTOR: f32 = 1.5;
/// Maximum distance covered by the charge special, in world units.
const CHARGE_DISTANCE: f32 = 6.0;
/// Standoff kept at the end of a charge so the boss never lands on top
/// of the player.
const CHARGE_STANDOFF: f32 = 1.0;
/// Minions created per summon.
const SUMMON_COUNT: usize = 3;

/// The three special attacks the boss can roll when its special timer
/// elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossSpecial {
    AreaAttack,
    SummonMinions,
    ChargeAttack,
}

impl BossSpecial {
    /// Pick one of the three specials uniformly at random.
    fn roll(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => BossSpecial::AreaAttack,
            1 => BossSpecial::SummonMinions,
            _ => BossSpecial::ChargeAttack,
        }
    }
}

/// Sent when a boss's phase changes.
#[derive(Event)]
pub struct PhaseChangeEvent {
    pub boss: Entity,
    pub from: BossPhase,
    pub to: BossPhase,
}

/// Sent when a boss's special timer elapses; the execution system reads
/// these and carries the chosen special out.
#[derive(Event)]
pub struct BossSpecialEvent {
    pub boss: Entity,
    pub special: BossSpecial,
}

/// Phase transition rule, evaluated against the current health fraction.
///
/// Dropping to the final threshold always forces Final; otherwise a
/// Normal boss at or below its enrage threshold becomes Enraged. The
/// result never moves backward.
pub fn phase_for(current: BossPhase, health_fraction: f32, enrage_threshold: f32) -> BossPhase {
    if health_fraction <= FINAL_PHASE_THRESHOLD {
        return BossPhase::Final;
    }
    if current == BossPhase::Normal && health_fraction <= enrage_threshold {
        return BossPhase::Enraged;
    }
    current
}

/// Advance boss phases from health, before any phase-dependent behavior
/// runs this tick.
pub fn boss_phase_transitions(
    mut query: Query<(Entity, &Health, &mut Boss), Without<Dead>>,
    mut phase_events: EventWriter<PhaseChangeEvent>,
) {
    for (entity, health, mut boss) in query.iter_mut() {
        let next = phase_for(boss.phase, health.fraction(), boss.enrage_threshold);
        if next != boss.phase {
            info!("Boss {:?} entering {:?} phase", entity, next);
            phase_events.send(PhaseChangeEvent {
                boss: entity,
                from: boss.phase,
                to: next,
            });
            boss.phase = next;
        }
    }
}

/// Boss engagement: attack at phase-scaled reach, otherwise close in.
pub fn ai_boss(
    time: Res<Time>,
    player_query: Query<(Entity, &Transform), (With<Player>, Without<Enemy>)>,
    mut boss_query: Query<
        (
            Entity,
            &mut Transform,
            &EnemyStats,
            &Boss,
            &mut AttackCooldown,
        ),
        (With<Enemy>, Without<Player>, Without<Dead>),
    >,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok((player_entity, player_transform)) = player_query.get_single() else {
        return;
    };
    let dt = time.delta_secs();

    for (entity, mut transform, stats, boss, mut attack) in boss_query.iter_mut() {
        let distance = horizontal_distance(transform.translation, player_transform.translation);
        let effective_range = stats.attack_range * boss.phase.attack_range_multiplier();

        if distance <= effective_range {
            try_melee_attack(
                &mut attack.0,
                dt,
                stats.attack_damage,
                entity,
                player_entity,
                &mut damage_events,
            );
        } else if distance <= stats.detection_range {
            let direction =
                horizontal_direction(transform.translation, player_transform.translation);
            transform.translation += direction * stats.move_speed * dt;
        }
    }
}

/// Advance the special-attack timer and roll a special when it elapses.
///
/// The timer runs regardless of phase or distance to the player.
pub fn boss_special_timer(
    time: Res<Time>,
    mut query: Query<(Entity, &mut Boss), Without<Dead>>,
    mut special_events: EventWriter<BossSpecialEvent>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::thread_rng();

    for (entity, mut boss) in query.iter_mut() {
        if boss.special.tick(dt) {
            let special = BossSpecial::roll(&mut rng);
            info!("Boss {:?} unleashes {:?}", entity, special);
            special_events.send(BossSpecialEvent {
                boss: entity,
                special,
            });
        }
    }
}

/// Carry out rolled boss specials.
pub fn execute_boss_specials(
    mut commands: Commands,
    mut special_events: EventReader<BossSpecialEvent>,
    registry: Res<EnemyRegistry>,
    mut boss_query: Query<
        (&mut Transform, &EnemyStats, &mut Boss),
        (With<Enemy>, Without<Player>),
    >,
    player_query: Query<(Entity, &Transform), (With<Player>, Without<Enemy>)>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    for event in special_events.read() {
        let Ok((mut boss_transform, stats, mut boss)) = boss_query.get_mut(event.boss) else {
            continue;
        };

        match event.special {
            BossSpecial::AreaAttack => {
                let Ok((player_entity, player_transform)) = player_query.get_single() else {
                    continue;
                };
                let distance = horizontal_distance(
                    boss_transform.translation,
                    player_transform.translation,
                );
                if distance <= stats.attack_range * AREA_ATTACK_RADIUS_FACTOR {
                    damage_events.send(DamageEvent {
                        target: player_entity,
                        source: event.boss,
                        amount: stats.attack_damage * AREA_ATTACK_DAMAGE_FACTOR,
                    });
                }
            }
            BossSpecial::SummonMinions => {
                // Minions enter the simulation through the regular spawn
                // path; the boss only records their ids.
                let offsets = [
                    Vec3::new(2.0, 0.0, 0.0),
                    Vec3::new(-2.0, 0.0, 0.0),
                    Vec3::new(0.0, 0.0, 2.0),
                ];
                for offset in offsets.into_iter().take(SUMMON_COUNT) {
                    let minion = spawn_enemy(
                        &mut commands,
                        &registry,
                        EnemyKind::Fast,
                        boss_transform.translation + offset,
                    );
                    boss.minions.push(minion);
                }
            }
            BossSpecial::ChargeAttack => {
                let Ok((player_entity, player_transform)) = player_query.get_single() else {
                    continue;
                };
                let distance = horizontal_distance(
                    boss_transform.translation,
                    player_transform.translation,
                );
                let direction = horizontal_direction(
                    boss_transform.translation,
                    player_transform.translation,
                );

                let lunge = (distance - CHARGE_STANDOFF).clamp(0.0, CHARGE_DISTANCE);
                boss_transform.translation += direction * lunge;

                if distance - lunge <= stats.attack_range {
                    damage_events.send(DamageEvent {
                        target: player_entity,
                        source: event.boss,
                        amount: stats.attack_damage,
                    });
                }
            }
        }
    }
}
