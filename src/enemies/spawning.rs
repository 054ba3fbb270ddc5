//! Enemy spawning.
//!
//! Everything that enters the simulation goes through `spawn_enemy` - the
//! demo arena, tests, and the boss's minion summon all use the same path,
//! so spawned enemies always carry the full component set for their kind.

use bevy::prelude::*;

use crate::combat::{Armor, Health};
use crate::core::Cooldown;

use super::components::*;
use super::data::EnemyRegistry;

/// Spawn an enemy of the given kind at a world position.
///
/// Stats come from the registry (data files or built-in defaults); the
/// kind decides which variant state components are attached.
pub fn spawn_enemy(
    commands: &mut Commands,
    registry: &EnemyRegistry,
    kind: EnemyKind,
    position: Vec3,
) -> Entity {
    let definition = registry.get(kind);
    let stats = definition.to_stats();

    let mut entity = commands.spawn((
        Enemy,
        kind,
        Health::new(definition.max_health),
        AttackCooldown(Cooldown::from_rate(stats.attack_rate)),
        Transform::from_translation(position),
        stats.clone(),
    ));

    match kind {
        EnemyKind::Basic => {}
        EnemyKind::Fast => {
            let config = definition.fast.clone().unwrap_or_default();
            entity.insert(FastState {
                strafe_speed: config.strafe_speed,
                jump_force: config.jump_force,
                jump: Cooldown::from_period(config.jump_cooldown),
            });
        }
        EnemyKind::Tank => {
            let config = definition.tank.clone().unwrap_or_default();
            entity.insert((
                Armor(config.armor),
                TankState {
                    stomp_damage: config.stomp_damage,
                    stomp_range: config.stomp_range,
                    stomp: Cooldown::from_period(config.stomp_cooldown),
                },
            ));
        }
        EnemyKind::Ranged => {
            let config = definition.ranged.clone().unwrap_or_default();
            // Primed so the first shot fires on the first tick in band.
            let mut fire = Cooldown::from_rate(stats.attack_rate);
            fire.prime();
            entity.insert(RangedState {
                projectile_speed: config.projectile_speed,
                accuracy: config.accuracy.clamp(0.0, 1.0),
                fire,
                reload: Cooldown::from_period(config.reload_time),
                reloading: false,
            });
        }
        EnemyKind::Boss => {
            let config = definition.boss.clone().unwrap_or_default();
            entity.insert(Boss {
                phase: BossPhase::Normal,
                enrage_threshold: config.enrage_threshold,
                special: Cooldown::from_period(config.special_attack_cooldown),
                minions: Vec::new(),
            });
        }
    }

    let id = entity.id();
    info!("Spawned {} ({:?}) at {:?}", definition.name, id, position);
    id
}
