//! Combat module - health, armor, and damage resolution.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
pub use systems::CombatSet;
