//! Level catalogue: the built-in levels and loading a catalogue from JSON.

use std::path::Path;

use tank_core::config::{validate_catalogue, BossConfig, LevelConfig, SpawnPacing};
use tank_core::constants::BOSS_DEFAULT_HEALTH;
use tank_core::enums::{BossKind, EnemyKind, MapKind};
use tank_core::error::ConfigError;

/// Easy, Medium and Hard: one enemy kind each, boss after 10 / 15 / 20 spawns.
pub fn builtin_levels() -> Vec<LevelConfig> {
    [
        ("Easy", EnemyKind::Grunt, MapKind::Forest, BossKind::Warden, 10),
        ("Medium", EnemyKind::Soldier, MapKind::Desert, BossKind::Juggernaut, 15),
        ("Hard", EnemyKind::Elite, MapKind::City, BossKind::Overlord, 20),
    ]
    .into_iter()
    .map(|(name, enemy_kind, map, boss_kind, spawn_after)| LevelConfig {
        name: name.to_string(),
        enemy_kind,
        map,
        boss: Some(BossConfig {
            kind: boss_kind,
            spawn_after,
            health: BOSS_DEFAULT_HEALTH,
        }),
        enemy_quota: None,
        initial_enemies: 0,
        max_active: None,
        pacing: SpawnPacing::default(),
    })
    .collect()
}

/// Parse and validate a catalogue from a JSON array of levels.
pub fn parse_levels(json: &str) -> Result<Vec<LevelConfig>, ConfigError> {
    let levels: Vec<LevelConfig> = serde_json::from_str(json)?;
    validate_catalogue(&levels)?;
    Ok(levels)
}

/// Read, parse and validate a catalogue file.
pub fn load_levels(path: impl AsRef<Path>) -> Result<Vec<LevelConfig>, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let levels = parse_levels(&json)?;
    log::info!("loaded {} level(s) from {}", levels.len(), path.display());
    Ok(levels)
}
