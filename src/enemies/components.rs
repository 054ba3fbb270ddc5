//! Enemy-related components.

use bevy::prelude::*;

use crate::core::Cooldown;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Closed set of enemy behavior variants.
///
/// Also serves as the key for data-driven enemy definitions (matches the
/// RON file name under `assets/data/enemies/`).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Basic,
    Fast,
    Tank,
    Ranged,
    Boss,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Basic,
        EnemyKind::Fast,
        EnemyKind::Tank,
        EnemyKind::Ranged,
        EnemyKind::Boss,
    ];

    /// Definition file stem for this kind.
    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::Basic => "basic",
            EnemyKind::Fast => "fast",
            EnemyKind::Tank => "tank",
            EnemyKind::Ranged => "ranged",
            EnemyKind::Boss => "boss",
        }
    }

    /// Parse a definition file stem back into a kind.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Common combat attributes shared by every enemy variant.
#[derive(Component, Clone, Debug)]
pub struct EnemyStats {
    pub move_speed: f32,
    pub attack_damage: f32,
    pub attack_range: f32,
    /// Attacks per second. Zero or negative disables the basic attack.
    pub attack_rate: f32,
    pub detection_range: f32,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            attack_damage: 10.0,
            attack_range: 2.0,
            attack_rate: 1.0,
            detection_range: 10.0,
        }
    }
}

/// Cooldown gating the basic melee attack, built from `attack_rate`.
#[derive(Component, Debug)]
pub struct AttackCooldown(pub Cooldown);

/// Per-tick state for the fast skirmisher variant.
#[derive(Component, Debug)]
pub struct FastState {
    /// Sideways movement speed while circling the player
    pub strafe_speed: f32,
    /// Size of the evasive dodge, in world units
    pub jump_force: f32,
    /// Gates the evasive jump
    pub jump: Cooldown,
}

/// Per-tick state for the tank variant.
#[derive(Component, Debug)]
pub struct TankState {
    pub stomp_damage: f32,
    pub stomp_range: f32,
    /// Gates the area stomp
    pub stomp: Cooldown,
}

/// Per-tick state for the ranged variant.
///
/// The variant cycles between two states: Ready (fire cooldown gates the
/// next shot) and Reloading (reload cooldown counts down to Ready).
#[derive(Component, Debug)]
pub struct RangedState {
    pub projectile_speed: f32,
    /// Hit probability per shot, in `[0, 1]`
    pub accuracy: f32,
    /// Gates shots while Ready; primed at spawn so the first shot is immediate
    pub fire: Cooldown,
    /// Counts down the reload after each shot
    pub reload: Cooldown,
    pub reloading: bool,
}

/// Escalating difficulty stages of the boss fight.
///
/// Transitions are driven by health fraction and are strictly one-way:
/// Normal -> Enraged -> Final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossPhase {
    Normal,
    Enraged,
    Final,
}

impl BossPhase {
    /// Multiplier on attack range for engagement checks.
    pub fn attack_range_multiplier(self) -> f32 {
        match self {
            BossPhase::Normal => 1.0,
            BossPhase::Enraged => 1.5,
            BossPhase::Final => 2.0,
        }
    }

    /// Multiplier on incoming damage. The boss starts resistant and grows
    /// vulnerable as the fight progresses.
    pub fn damage_taken_multiplier(self) -> f32 {
        match self {
            BossPhase::Normal => 0.8,
            BossPhase::Enraged => 1.2,
            BossPhase::Final => 1.5,
        }
    }
}

/// Boss fight state: the phase machine, the special-attack timer, and the
/// minions this boss has summoned.
///
/// Minions are plain entity ids - the ECS owns the entities and simulates
/// them as independent enemies, the boss only keeps the list.
#[derive(Component, Debug)]
pub struct Boss {
    pub phase: BossPhase,
    /// Health fraction at which Normal gives way to Enraged
    pub enrage_threshold: f32,
    /// Independent timer selecting a special attack when it elapses
    pub special: Cooldown,
    pub minions: Vec<Entity>,
}
