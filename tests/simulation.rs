//! Headless simulation tests.
//!
//! Each test builds a minimal app, pins the clock to a fixed tick length
//! with `TimeUpdateStrategy::ManualDuration`, and drives the schedule by
//! hand so every timing assertion is deterministic.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use gravemarch::combat::{Armor, Health};
use gravemarch::core::{Cooldown, DamageEvent, GameState};
use gravemarch::enemies::{
    AttackCooldown, Boss, BossPhase, BossSpecial, BossSpecialEvent, Enemy, EnemyKind, EnemyStats,
    FastState, RangedState, TankState,
};
use gravemarch::player::Player;
use gravemarch::GravemarchPlugin;

/// Build a headless app ticking at a fixed `dt` seconds per update.
fn app_with_tick(dt: f32) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.add_plugins(GravemarchPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        dt as f64,
    )));
    // The first update initializes the clock with a zero delta; every
    // update after this advances by exactly `dt`.
    app.update();
    app
}

fn spawn_test_player(app: &mut App, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            Health::new(100.0),
            Transform::from_translation(position),
        ))
        .id()
}

fn player_health(app: &App, player: Entity) -> f32 {
    app.world().get::<Health>(player).unwrap().current()
}

fn basic_stats(attack_rate: f32) -> EnemyStats {
    EnemyStats {
        move_speed: 0.0,
        attack_damage: 10.0,
        attack_range: 2.0,
        attack_rate,
        detection_range: 10.0,
    }
}

fn spawn_test_boss(app: &mut App, position: Vec3, max_health: f32) -> Entity {
    app.world_mut()
        .spawn((
            Enemy,
            EnemyKind::Boss,
            EnemyStats {
                move_speed: 0.0,
                attack_damage: 25.0,
                attack_range: 3.0,
                attack_rate: 0.8,
                detection_range: 25.0,
            },
            AttackCooldown(Cooldown::from_rate(0.8)),
            Health::new(max_health),
            Transform::from_translation(position),
            Boss {
                phase: BossPhase::Normal,
                enrage_threshold: 0.5,
                special: Cooldown::from_period(10.0),
                minions: Vec::new(),
            },
        ))
        .id()
}

#[test]
fn basic_attack_fires_exactly_twice_in_one_second() {
    let mut app = app_with_tick(0.1);
    let player = spawn_test_player(&mut app, Vec3::ZERO);

    // Rate 2.0 -> one swing every 0.5s. Ten 0.1s ticks hold exactly two
    // swings, at t=0.5 and t=1.0.
    app.world_mut().spawn((
        Enemy,
        EnemyKind::Basic,
        basic_stats(2.0),
        AttackCooldown(Cooldown::from_rate(2.0)),
        Health::new(50.0),
        Transform::from_xyz(1.0, 0.0, 0.0),
    ));

    for _ in 0..4 {
        app.update();
    }
    assert_eq!(player_health(&app, player), 100.0);

    app.update(); // t = 0.5, first swing
    assert_eq!(player_health(&app, player), 90.0);

    for _ in 0..4 {
        app.update();
    }
    assert_eq!(player_health(&app, player), 90.0);

    app.update(); // t = 1.0, second swing
    assert_eq!(player_health(&app, player), 80.0);
}

#[test]
fn zero_attack_rate_means_never_attacking() {
    let mut app = app_with_tick(0.1);
    let player = spawn_test_player(&mut app, Vec3::ZERO);

    app.world_mut().spawn((
        Enemy,
        EnemyKind::Basic,
        basic_stats(0.0),
        AttackCooldown(Cooldown::from_rate(0.0)),
        Health::new(50.0),
        Transform::from_xyz(1.0, 0.0, 0.0),
    ));

    for _ in 0..50 {
        app.update();
    }
    assert_eq!(player_health(&app, player), 100.0);
}

#[test]
fn ranged_fires_first_tick_then_reloads_for_one_second() {
    let mut app = app_with_tick(0.1);
    let player = spawn_test_player(&mut app, Vec3::ZERO);

    let mut fire = Cooldown::from_rate(1.0);
    fire.prime();
    let archer = app
        .world_mut()
        .spawn((
            Enemy,
            EnemyKind::Ranged,
            EnemyStats {
                move_speed: 0.0,
                attack_damage: 12.0,
                attack_range: 10.0,
                attack_rate: 1.0,
                detection_range: 20.0,
            },
            RangedState {
                projectile_speed: 15.0,
                accuracy: 1.0,
                fire,
                reload: Cooldown::from_period(1.0),
                reloading: false,
            },
            Health::new(40.0),
            Transform::from_xyz(5.0, 0.0, 0.0),
        ))
        .id();

    // First tick in band: the primed shot fires and the cycle flips to
    // Reloading.
    app.update();
    assert_eq!(player_health(&app, player), 88.0);
    assert!(app.world().get::<RangedState>(archer).unwrap().reloading);

    // 0.9s into the reload: still reloading, no second shot.
    for _ in 0..9 {
        app.update();
    }
    assert_eq!(player_health(&app, player), 88.0);
    assert!(app.world().get::<RangedState>(archer).unwrap().reloading);

    // Reload completes at exactly 1.0s.
    app.update();
    assert!(!app.world().get::<RangedState>(archer).unwrap().reloading);

    // Ready again, but the next shot waits a full firing interval.
    app.update();
    assert_eq!(player_health(&app, player), 88.0);
}

#[test]
fn tank_armor_reduces_incoming_damage() {
    let mut app = app_with_tick(0.1);

    let tank = app
        .world_mut()
        .spawn((
            Enemy,
            EnemyKind::Tank,
            Health::new(150.0),
            Armor(0.3),
            Transform::from_xyz(50.0, 0.0, 0.0),
        ))
        .id();

    app.world_mut().send_event(DamageEvent {
        target: tank,
        source: Entity::PLACEHOLDER,
        amount: 10.0,
    });
    app.update();
    assert_eq!(app.world().get::<Health>(tank).unwrap().current(), 143.0);

    // Negative damage is invalid input and must never heal.
    app.world_mut().send_event(DamageEvent {
        target: tank,
        source: Entity::PLACEHOLDER,
        amount: -50.0,
    });
    app.update();
    assert_eq!(app.world().get::<Health>(tank).unwrap().current(), 143.0);
}

#[test]
fn tank_stomps_on_a_six_second_cadence() {
    let mut app = app_with_tick(1.0);
    let player = spawn_test_player(&mut app, Vec3::new(4.0, 0.0, 0.0));

    // Player sits inside stomp range but outside melee range.
    app.world_mut().spawn((
        Enemy,
        EnemyKind::Tank,
        EnemyStats {
            move_speed: 0.0,
            attack_damage: 20.0,
            attack_range: 2.5,
            attack_rate: 0.5,
            detection_range: 10.0,
        },
        AttackCooldown(Cooldown::from_rate(0.5)),
        TankState {
            stomp_damage: 15.0,
            stomp_range: 5.0,
            stomp: Cooldown::from_period(6.0),
        },
        Armor(0.3),
        Health::new(150.0),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(player_health(&app, player), 100.0);

    app.update(); // t = 6.0, stomp lands
    assert_eq!(player_health(&app, player), 85.0);

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(player_health(&app, player), 85.0);

    app.update(); // t = 12.0, second stomp
    assert_eq!(player_health(&app, player), 70.0);
}

#[test]
fn boss_damage_scales_with_phase() {
    let mut app = app_with_tick(0.1);
    let boss = spawn_test_boss(&mut app, Vec3::new(50.0, 0.0, 0.0), 500.0);

    // Normal phase resists: 10 base -> 8 taken.
    app.world_mut().send_event(DamageEvent {
        target: boss,
        source: Entity::PLACEHOLDER,
        amount: 10.0,
    });
    app.update();
    assert_eq!(app.world().get::<Health>(boss).unwrap().current(), 492.0);

    // Enraged is vulnerable: 10 -> 12.
    app.world_mut().get_mut::<Boss>(boss).unwrap().phase = BossPhase::Enraged;
    app.world_mut().send_event(DamageEvent {
        target: boss,
        source: Entity::PLACEHOLDER,
        amount: 10.0,
    });
    app.update();
    assert_eq!(app.world().get::<Health>(boss).unwrap().current(), 480.0);

    // Final is the most vulnerable: 10 -> 15.
    app.world_mut().get_mut::<Boss>(boss).unwrap().phase = BossPhase::Final;
    app.world_mut().send_event(DamageEvent {
        target: boss,
        source: Entity::PLACEHOLDER,
        amount: 10.0,
    });
    app.update();
    assert_eq!(app.world().get::<Health>(boss).unwrap().current(), 465.0);
}

#[test]
fn boss_phases_advance_with_health_and_never_revert() {
    let mut app = app_with_tick(0.1);
    let boss = spawn_test_boss(&mut app, Vec3::new(50.0, 0.0, 0.0), 500.0);

    let phase = |app: &App| app.world().get::<Boss>(boss).unwrap().phase;
    assert_eq!(phase(&app), BossPhase::Normal);

    // 350 base at 0.8 resistance = 280 taken -> 220/500 = 0.44, under the
    // 0.5 enrage threshold.
    app.world_mut().send_event(DamageEvent {
        target: boss,
        source: Entity::PLACEHOLDER,
        amount: 350.0,
    });
    app.update(); // damage lands
    app.update(); // phase machine sees the new fraction
    assert_eq!(phase(&app), BossPhase::Enraged);

    // 100 base at 1.2 vulnerability = 120 taken -> 100/500 = 0.2, the
    // forced-final line.
    app.world_mut().send_event(DamageEvent {
        target: boss,
        source: Entity::PLACEHOLDER,
        amount: 100.0,
    });
    app.update();
    app.update();
    assert_eq!(phase(&app), BossPhase::Final);

    // Healing back up does not reverse the phase.
    app.world_mut()
        .get_mut::<Health>(boss)
        .unwrap()
        .heal(300.0);
    app.update();
    assert_eq!(phase(&app), BossPhase::Final);
}

/// Captured boss specials, recorded by an observer system added per test.
#[derive(Resource, Default)]
struct SpecialLog(Vec<BossSpecial>);

fn record_specials(mut log: ResMut<SpecialLog>, mut events: EventReader<BossSpecialEvent>) {
    for event in events.read() {
        log.0.push(event.special);
    }
}

#[test]
fn boss_special_timer_triggers_once_per_cooldown() {
    let mut app = app_with_tick(1.0);
    app.init_resource::<SpecialLog>();
    app.add_systems(Update, record_specials);

    let boss = spawn_test_boss(&mut app, Vec3::new(50.0, 0.0, 0.0), 500.0);

    let specials = |app: &App| app.world().resource::<SpecialLog>().0.len();

    for _ in 0..9 {
        app.update();
    }
    assert_eq!(specials(&app), 0);

    app.update(); // t = 10.0, special rolls
    // Accumulator resets immediately on trigger.
    assert_eq!(
        app.world().get::<Boss>(boss).unwrap().special.elapsed(),
        0.0
    );

    app.update(); // observer has certainly seen the event by now
    assert_eq!(specials(&app), 1);

    for _ in 0..8 {
        app.update();
    }
    assert_eq!(specials(&app), 1);

    app.update(); // t = 20.0, second special
    app.update();
    assert_eq!(specials(&app), 2);
}

#[test]
fn summoned_minions_enter_the_simulation() {
    let mut app = app_with_tick(0.1);
    let boss = spawn_test_boss(&mut app, Vec3::new(20.0, 0.0, 0.0), 500.0);

    app.world_mut().send_event(BossSpecialEvent {
        boss,
        special: BossSpecial::SummonMinions,
    });
    app.update();

    // Three fast enemies exist and the boss recorded their ids.
    let minions = app.world().get::<Boss>(boss).unwrap().minions.clone();
    assert_eq!(minions.len(), 3);
    for minion in &minions {
        assert!(app.world().get::<FastState>(*minion).is_some());
        assert!(app.world().get::<Health>(*minion).is_some());
    }

    let mut fast_query = app.world_mut().query::<&FastState>();
    assert_eq!(fast_query.iter(app.world()).count(), 3);
}

#[test]
fn dead_enemies_are_removed_from_the_arena() {
    let mut app = app_with_tick(0.1);

    let enemy = app
        .world_mut()
        .spawn((
            Enemy,
            EnemyKind::Basic,
            basic_stats(1.0),
            AttackCooldown(Cooldown::from_rate(1.0)),
            Health::new(50.0),
            Transform::from_xyz(30.0, 0.0, 0.0),
        ))
        .id();

    app.world_mut().send_event(DamageEvent {
        target: enemy,
        source: Entity::PLACEHOLDER,
        amount: 60.0,
    });
    app.update(); // dies this tick
    app.update(); // cleanup removes the corpse
    assert!(app.world().get::<Health>(enemy).is_none());
}

#[test]
fn player_death_ends_the_game() {
    let mut app = app_with_tick(0.1);
    let player = spawn_test_player(&mut app, Vec3::ZERO);

    app.world_mut().spawn((
        Enemy,
        EnemyKind::Basic,
        EnemyStats {
            move_speed: 0.0,
            attack_damage: 1000.0,
            attack_range: 2.0,
            attack_rate: 10.0,
            detection_range: 10.0,
        },
        AttackCooldown(Cooldown::from_rate(10.0)),
        Health::new(50.0),
        Transform::from_xyz(1.0, 0.0, 0.0),
    ));

    app.update(); // the overkill swing lands
    assert_eq!(player_health(&app, player), 0.0);

    app.update(); // state transition applies
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::GameOver
    );
}

#[test]
fn missing_player_means_no_action() {
    let mut app = app_with_tick(0.1);

    let enemy = app
        .world_mut()
        .spawn((
            Enemy,
            EnemyKind::Basic,
            EnemyStats {
                move_speed: 3.0,
                attack_damage: 10.0,
                attack_range: 2.0,
                attack_rate: 1.0,
                detection_range: 10.0,
            },
            AttackCooldown(Cooldown::from_rate(1.0)),
            Health::new(50.0),
            Transform::from_xyz(1.0, 0.0, 0.0),
        ))
        .id();

    for _ in 0..10 {
        app.update();
    }

    // No target: no movement, no health changes, no crash.
    let transform = app.world().get::<Transform>(enemy).unwrap();
    assert_eq!(transform.translation, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(app.world().get::<Health>(enemy).unwrap().current(), 50.0);
}

#[test]
fn fast_enemy_circles_without_reaching_melee() {
    let mut app = app_with_tick(0.1);
    let player = spawn_test_player(&mut app, Vec3::ZERO);

    let skirmisher = app
        .world_mut()
        .spawn((
            Enemy,
            EnemyKind::Fast,
            EnemyStats {
                move_speed: 0.0,
                attack_damage: 8.0,
                attack_range: 2.0,
                attack_rate: 2.0,
                detection_range: 12.0,
            },
            AttackCooldown(Cooldown::from_rate(2.0)),
            FastState {
                strafe_speed: 4.0,
                jump_force: 5.0,
                jump: Cooldown::from_period(3.0),
            },
            Health::new(30.0),
            Transform::from_xyz(6.0, 0.0, 0.0),
        ))
        .id();

    let start = app
        .world()
        .get::<Transform>(skirmisher)
        .unwrap()
        .translation;

    for _ in 0..10 {
        app.update();
    }

    // Strafing moved it, but orbiting never closes to melee range, so the
    // player is untouched.
    let end = app
        .world()
        .get::<Transform>(skirmisher)
        .unwrap()
        .translation;
    assert_ne!(start, end);
    assert_eq!(player_health(&app, player), 100.0);
}
