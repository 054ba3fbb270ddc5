//! Gravemarch - headless demo arena.
//!
//! Runs the AI core without a renderer: one player surrounded by one
//! enemy of each kind, simulated at 60 ticks per second until the player
//! falls. Watch the log to follow the fight.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use gravemarch::core::GameState;
use gravemarch::enemies::{spawn_enemy, Enemy, EnemyKind, EnemyRegistry};
use gravemarch::player::spawn_player;

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(StatesPlugin)
        .add_plugins(LogPlugin::default())
        .add_plugins(gravemarch::GravemarchPlugin)
        .add_systems(PostStartup, spawn_arena)
        .add_systems(Update, exit_when_finished)
        .run();
}

/// Spawn the player and one enemy of each kind around them.
fn spawn_arena(mut commands: Commands, registry: Res<EnemyRegistry>) {
    spawn_player(&mut commands, Vec3::ZERO);

    spawn_enemy(&mut commands, &registry, EnemyKind::Basic, Vec3::new(8.0, 0.0, 0.0));
    spawn_enemy(&mut commands, &registry, EnemyKind::Fast, Vec3::new(-9.0, 0.0, 3.0));
    spawn_enemy(&mut commands, &registry, EnemyKind::Tank, Vec3::new(0.0, 0.0, 9.0));
    spawn_enemy(&mut commands, &registry, EnemyKind::Ranged, Vec3::new(6.0, 0.0, -6.0));
    spawn_enemy(&mut commands, &registry, EnemyKind::Boss, Vec3::new(-14.0, 0.0, -14.0));
}

/// End the demo once the fight is decided.
fn exit_when_finished(
    state: Res<State<GameState>>,
    enemies: Query<(), With<Enemy>>,
    mut exit: EventWriter<AppExit>,
) {
    if *state.get() == GameState::GameOver {
        info!("The player has fallen. Demo over.");
        exit.send(AppExit::Success);
    } else if enemies.is_empty() {
        info!("Arena cleared! Demo over.");
        exit.send(AppExit::Success);
    }
}
