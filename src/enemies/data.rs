//! Enemy definition loading from RON files.
//!
//! Every enemy kind has a built-in default definition, so the simulation
//! works with no asset files present. RON files under
//! `assets/data/enemies/` override the defaults per kind.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::components::{EnemyKind, EnemyStats};
use super::error::DataLoadError;

/// Extra configuration for the fast skirmisher variant.
#[derive(Deserialize, Clone, Debug)]
pub struct FastConfig {
    pub strafe_speed: f32,
    pub jump_force: f32,
    pub jump_cooldown: f32,
}

impl Default for FastConfig {
    fn default() -> Self {
        Self {
            strafe_speed: 4.0,
            jump_force: 5.0,
            jump_cooldown: 3.0,
        }
    }
}

/// Extra configuration for the tank variant.
#[derive(Deserialize, Clone, Debug)]
pub struct TankConfig {
    /// Damage-reduction fraction in `[0, 1]`
    pub armor: f32,
    pub stomp_damage: f32,
    pub stomp_range: f32,
    pub stomp_cooldown: f32,
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            armor: 0.3,
            stomp_damage: 15.0,
            stomp_range: 5.0,
            stomp_cooldown: 6.0,
        }
    }
}

/// Extra configuration for the ranged variant.
#[derive(Deserialize, Clone, Debug)]
pub struct RangedConfig {
    pub projectile_speed: f32,
    /// Hit probability per shot, in `[0, 1]`
    pub accuracy: f32,
    pub reload_time: f32,
}

impl Default for RangedConfig {
    fn default() -> Self {
        Self {
            projectile_speed: 15.0,
            accuracy: 0.8,
            reload_time: 1.5,
        }
    }
}

/// Extra configuration for the boss variant.
#[derive(Deserialize, Clone, Debug)]
pub struct BossConfig {
    /// Health fraction at which the boss enrages
    pub enrage_threshold: f32,
    pub special_attack_cooldown: f32,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            enrage_threshold: 0.5,
            special_attack_cooldown: 10.0,
        }
    }
}

/// Enemy definition loaded from a RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct EnemyDefinition {
    pub name: String,
    pub max_health: f32,
    pub attack_damage: f32,
    pub move_speed: f32,
    pub detection_range: f32,
    pub attack_range: f32,
    /// Attacks per second
    pub attack_rate: f32,
    #[serde(default)]
    pub fast: Option<FastConfig>,
    #[serde(default)]
    pub tank: Option<TankConfig>,
    #[serde(default)]
    pub ranged: Option<RangedConfig>,
    #[serde(default)]
    pub boss: Option<BossConfig>,
}

impl EnemyDefinition {
    /// Built-in definition for a kind, used when no data file overrides it.
    pub fn default_for(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Basic => Self {
                name: "Grave Thrall".to_string(),
                max_health: 50.0,
                attack_damage: 10.0,
                move_speed: 3.0,
                detection_range: 10.0,
                attack_range: 2.0,
                attack_rate: 1.0,
                fast: None,
                tank: None,
                ranged: None,
                boss: None,
            },
            EnemyKind::Fast => Self {
                name: "Crypt Wretch".to_string(),
                max_health: 30.0,
                attack_damage: 8.0,
                move_speed: 6.0,
                detection_range: 12.0,
                attack_range: 2.0,
                attack_rate: 2.0,
                fast: Some(FastConfig::default()),
                tank: None,
                ranged: None,
                boss: None,
            },
            EnemyKind::Tank => Self {
                name: "Barrow Juggernaut".to_string(),
                max_health: 150.0,
                attack_damage: 20.0,
                move_speed: 1.5,
                detection_range: 10.0,
                attack_range: 2.5,
                attack_rate: 0.5,
                fast: None,
                tank: Some(TankConfig::default()),
                ranged: None,
                boss: None,
            },
            EnemyKind::Ranged => Self {
                name: "Bone Archer".to_string(),
                max_health: 40.0,
                attack_damage: 12.0,
                move_speed: 2.5,
                detection_range: 20.0,
                attack_range: 10.0,
                attack_rate: 1.0,
                fast: None,
                tank: None,
                ranged: Some(RangedConfig::default()),
                boss: None,
            },
            EnemyKind::Boss => Self {
                name: "Warden of the Deep".to_string(),
                max_health: 500.0,
                attack_damage: 25.0,
                move_speed: 2.0,
                detection_range: 25.0,
                attack_range: 3.0,
                attack_rate: 0.8,
                fast: None,
                tank: None,
                ranged: None,
                boss: Some(BossConfig::default()),
            },
        }
    }

    /// Convert to the EnemyStats component.
    pub fn to_stats(&self) -> EnemyStats {
        EnemyStats {
            move_speed: self.move_speed,
            attack_damage: self.attack_damage,
            attack_range: self.attack_range,
            attack_rate: self.attack_rate,
            detection_range: self.detection_range,
        }
    }
}

/// Resource holding the definition for every enemy kind.
#[derive(Resource)]
pub struct EnemyRegistry {
    definitions: HashMap<EnemyKind, EnemyDefinition>,
}

impl Default for EnemyRegistry {
    fn default() -> Self {
        let definitions = EnemyKind::ALL
            .into_iter()
            .map(|kind| (kind, EnemyDefinition::default_for(kind)))
            .collect();
        Self { definitions }
    }
}

impl EnemyRegistry {
    /// Get the definition for an enemy kind.
    pub fn get(&self, kind: EnemyKind) -> &EnemyDefinition {
        // Default prepopulates every kind, so the lookup cannot miss.
        &self.definitions[&kind]
    }

    pub fn insert(&mut self, kind: EnemyKind, definition: EnemyDefinition) {
        self.definitions.insert(kind, definition);
    }
}

/// Parse one definition file, keyed by its file stem.
fn load_definition_file(path: &Path) -> Result<(EnemyKind, EnemyDefinition), DataLoadError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");

    let kind = EnemyKind::from_name(stem)
        .ok_or_else(|| DataLoadError::UnknownKind(stem.to_string()))?;

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    let definition =
        ron::from_str::<EnemyDefinition>(&contents).map_err(|e| DataLoadError::ParseError {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;

    Ok((kind, definition))
}

/// Load enemy definition overrides from the assets/data/enemies/ directory.
pub fn load_enemy_definitions(mut registry: ResMut<EnemyRegistry>) {
    let enemies_dir = Path::new("assets/data/enemies");

    if !enemies_dir.exists() {
        warn!(
            "Enemy definitions directory not found: {:?}, using built-in defaults",
            enemies_dir
        );
        return;
    }

    let Ok(entries) = fs::read_dir(enemies_dir) else {
        warn!("Failed to read enemy definitions directory");
        return;
    };

    let mut loaded = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "ron") {
            continue;
        }

        match load_definition_file(&path) {
            Ok((kind, definition)) => {
                info!("Loaded enemy definition: {} ({})", definition.name, kind.name());
                registry.insert(kind, definition);
                loaded += 1;
            }
            Err(e) => {
                error!("{e}");
            }
        }
    }

    info!("Loaded {loaded} enemy definitions");
}
