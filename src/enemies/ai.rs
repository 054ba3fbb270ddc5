//! Enemy AI behavior systems.
//!
//! One system per behavior variant, run in a chain once per simulation
//! tick. Each system reads the player's position, advances its own
//! cooldown accumulators, and emits DamageEvents for actions that
//! connect. A missing player means "no target" and every system returns
//! without effect.

use bevy::prelude::*;

use crate::combat::Dead;
use crate::core::{Cooldown, DamageEvent};
use crate::player::Player;

use super::components::*;

/// Closest a ranged enemy will willingly fight from.
pub const RANGED_MIN_RANGE: f32 = 3.0;
/// Preferred engagement band for ranged enemies, in world units.
pub const RANGED_BAND_NEAR: f32 = 5.0;
pub const RANGED_BAND_FAR: f32 = 8.0;

/// Fraction of jump_force used as the evasive dodge distance.
const DODGE_DISTANCE_FACTOR: f32 = 0.5;

/// Distance between two points in the ground plane.
///
/// Combat happens on the ground, so height differences are ignored for
/// every range check.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    Vec3::new(a.x - b.x, 0.0, a.z - b.z).length()
}

/// Unit vector from `from` toward `to` in the ground plane, or zero when
/// the points coincide.
pub(super) fn horizontal_direction(from: Vec3, to: Vec3) -> Vec3 {
    Vec3::new(to.x - from.x, 0.0, to.z - from.z).normalize_or_zero()
}

/// Tick the attack cooldown and deal melee damage when it elapses.
pub(super) fn try_melee_attack(
    cooldown: &mut Cooldown,
    dt: f32,
    damage: f32,
    attacker: Entity,
    target: Entity,
    damage_events: &mut EventWriter<DamageEvent>,
) {
    if cooldown.tick(dt) {
        debug!("{:?} strikes the player for {:.1}", attacker, damage);
        damage_events.send(DamageEvent {
            target,
            source: attacker,
            amount: damage,
        });
    }
}

/// Basic melee enemy: walk at the player and swing when close enough.
pub fn ai_basic(
    time: Res<Time>,
    player_query: Query<(Entity, &Transform), (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (Entity, &mut Transform, &EnemyStats, &EnemyKind, &mut AttackCooldown),
        (With<Enemy>, Without<Player>, Without<Dead>),
    >,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok((player_entity, player_transform)) = player_query.get_single() else {
        return;
    };
    let dt = time.delta_secs();

    for (entity, mut transform, stats, kind, mut attack) in enemy_query.iter_mut() {
        // Variants with their own state component have their own system
        if *kind != EnemyKind::Basic {
            continue;
        }

        let distance = horizontal_distance(transform.translation, player_transform.translation);

        if distance <= stats.attack_range {
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
        // Beyond detection range: idle.
    }
}

/// Fast skirmisher: circles while closing in, dodging sideways whenever
/// the jump cooldown allows, and attacks at close range.
pub fn ai_fast(
    time: Res<Time>,
    player_query: Query<(Entity, &Transform), (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            Entity,
            &mut Transform,
            &EnemyStats,
            &mut AttackCooldown,
            &mut FastState,
        ),
        (With<Enemy>, Without<Player>, Without<Dead>),
    >,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok((player_entity, player_transform)) = player_query.get_single() else {
        return;
    };
    let dt = time.delta_secs();

    for (entity, mut transform, stats, mut attack, mut state) in enemy_query.iter_mut() {
        let distance = horizontal_distance(transform.translation, player_transform.translation);

        if distance <= stats.attack_range {
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
            // Clockwise orbit around the player
            let strafe = Vec3::new(direction.z, 0.0, -direction.x);

            transform.translation +=
                (direction * stats.move_speed + strafe * state.strafe_speed) * dt;

            if state.jump.tick(dt) {
                debug!("{:?} performs an evasive jump", entity);
                transform.translation += strafe * state.jump_force * DODGE_DISTANCE_FACTOR;
            }
        }
    }
}

/// Tank: slow advance, regular attack up close, and a periodic area stomp
/// at mid range.
pub fn ai_tank(
    time: Res<Time>,
    player_query: Query<(Entity, &Transform), (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            Entity,
            &mut Transform,
            &EnemyStats,
            &mut AttackCooldown,
            &mut TankState,
        ),
        (With<Enemy>, Without<Player>, Without<Dead>),
    >,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok((player_entity, player_transform)) = player_query.get_single() else {
        return;
    };
    let dt = time.delta_secs();

    for (entity, mut transform, stats, mut attack, mut state) in enemy_query.iter_mut() {
        let distance = horizontal_distance(transform.translation, player_transform.translation);

        if distance <= stats.attack_range {
            try_melee_attack(
                &mut attack.0,
                dt,
                stats.attack_damage,
                entity,
                player_entity,
                &mut damage_events,
            );
            continue;
        }

        if distance <= state.stomp_range && state.stomp.tick(dt) {
            info!("{:?} stomps the ground", entity);
            damage_events.send(DamageEvent {
                target: player_entity,
                source: entity,
                amount: state.stomp_damage,
            });
        }

        if distance <= stats.detection_range {
            let direction =
                horizontal_direction(transform.translation, player_transform.translation);
            transform.translation += direction * stats.move_speed * dt;
        }
    }
}

/// Ranged enemy: a two-state fire/reload cycle, holding an engagement
/// band between minimum range and attack range.
pub fn ai_ranged(
    time: Res<Time>,
    player_query: Query<(Entity, &Transform), (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (Entity, &mut Transform, &EnemyStats, &mut RangedState),
        (With<Enemy>, Without<Player>, Without<Dead>),
    >,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok((player_entity, player_transform)) = player_query.get_single() else {
        return;
    };
    let dt = time.delta_secs();

    for (entity, mut transform, stats, mut state) in enemy_query.iter_mut() {
        let distance = horizontal_distance(transform.translation, player_transform.translation);

        if distance > stats.detection_range {
            continue;
        }

        let in_band = distance > RANGED_MIN_RANGE && distance <= stats.attack_range;

        if state.reloading {
            if state.reload.tick(dt) {
                debug!("{:?} finished reloading", entity);
                state.reloading = false;
                // The next shot waits a full firing interval.
                state.fire.reset();
            }
        } else if in_band && state.fire.tick(dt) {
            // Accuracy gates hit probability, not dispersion.
            if rand::random::<f32>() < state.accuracy {
                debug!("{:?} hits the player for {:.1}", entity, stats.attack_damage);
                damage_events.send(DamageEvent {
                    target: player_entity,
                    source: entity,
                    amount: stats.attack_damage,
                });
            } else {
                debug!("{:?} fires and misses", entity);
            }
            state.reloading = true;
            state.reload.reset();
        }

        // Hold the optimal engagement band: back off when crowded, close
        // in when the player drifts out of reach.
        if distance < RANGED_BAND_NEAR {
            let away = -horizontal_direction(transform.translation, player_transform.translation);
            transform.translation += away * stats.move_speed * dt;
        } else if distance > RANGED_BAND_FAR {
            let direction =
                horizontal_direction(transform.translation, player_transform.translation);
            transform.translation += direction * stats.move_speed * dt;
        }
    }
}

/// Remove dead enemies from the simulation.
pub fn despawn_dead_enemies(
    mut commands: Commands,
    query: Query<Entity, (With<Enemy>, With<Dead>)>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
