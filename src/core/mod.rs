//! Core game module - states, events, and shared timing primitives.
//!
//! This module provides the foundation that all other game systems build upon.

mod cooldown;
mod events;
mod plugin;
mod states;

pub use cooldown::Cooldown;
pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
