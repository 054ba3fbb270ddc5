//! Player module - the target facade the enemy AI perceives and attacks.

mod components;

pub use components::*;
