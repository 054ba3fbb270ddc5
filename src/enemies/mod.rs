//! Enemies module - enemy components, per-variant AI, and spawning.

mod ai;
mod boss;
mod components;
pub mod data;
mod error;
mod plugin;
mod spawning;

pub use ai::{RANGED_BAND_FAR, RANGED_BAND_NEAR, RANGED_MIN_RANGE};
pub use boss::{
    phase_for, BossSpecial, BossSpecialEvent, PhaseChangeEvent, FINAL_PHASE_THRESHOLD,
};
pub use components::*;
pub use data::{EnemyDefinition, EnemyRegistry};
pub use error::DataLoadError;
pub use plugin::EnemyPlugin;
pub use spawning::spawn_enemy;
