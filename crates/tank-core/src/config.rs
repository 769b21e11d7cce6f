//! Level configuration: what spawns, how fast, and how a level is won.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{BossKind, EnemyKind, MapKind};
use crate::error::ConfigError;

/// One entry of the level catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub name: String,
    pub enemy_kind: EnemyKind,
    #[serde(default)]
    pub map: MapKind,
    /// Boss to spawn once enough enemies have appeared. Defeating it wins the level.
    #[serde(default)]
    pub boss: Option<BossConfig>,
    /// Total enemies the spawner will ever emit. `None` = unlimited.
    /// Without a boss, the level is won once the quota is spawned and cleared.
    #[serde(default)]
    pub enemy_quota: Option<u32>,
    /// Enemies spawned at once when play begins.
    #[serde(default)]
    pub initial_enemies: u32,
    /// Cap on simultaneously active enemies. `None` = uncapped.
    #[serde(default)]
    pub max_active: Option<u32>,
    #[serde(default)]
    pub pacing: SpawnPacing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BossConfig {
    pub kind: BossKind,
    /// Cumulative enemy spawns after which the boss appears.
    pub spawn_after: u32,
    #[serde(default = "default_boss_health")]
    pub health: i32,
}

/// Parameters of the spawn-interval curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnPacing {
    pub min_interval_secs: f64,
    pub max_interval_secs: f64,
    /// Seconds of play after which the interval is pinned at the minimum.
    pub ramp_secs: f64,
    /// Active-enemy count at which the interval reaches its minimum.
    pub crowd_limit: u32,
}

impl Default for SpawnPacing {
    fn default() -> Self {
        Self {
            min_interval_secs: SPAWN_MIN_INTERVAL_SECS,
            max_interval_secs: SPAWN_MAX_INTERVAL_SECS,
            ramp_secs: SPAWN_RAMP_SECS,
            crowd_limit: SPAWN_CROWD_LIMIT,
        }
    }
}

fn default_boss_health() -> i32 {
    BOSS_DEFAULT_HEALTH
}

impl LevelConfig {
    /// Reject configurations the simulation cannot run or cannot finish.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::Invalid {
            level: self.name.clone(),
            reason: reason.to_string(),
        };

        let p = &self.pacing;
        if p.min_interval_secs <= 0.0 {
            return Err(invalid("min_interval_secs must be positive"));
        }
        if p.max_interval_secs < p.min_interval_secs {
            return Err(invalid("max_interval_secs must not be below min_interval_secs"));
        }
        if p.ramp_secs <= 0.0 {
            return Err(invalid("ramp_secs must be positive"));
        }
        if p.crowd_limit == 0 {
            return Err(invalid("crowd_limit must be positive"));
        }
        if self.max_active == Some(0) {
            return Err(invalid("max_active must be positive when set"));
        }

        match (&self.boss, self.enemy_quota) {
            (None, None) => Err(invalid("a level needs a boss or an enemy quota to be winnable")),
            (None, Some(0)) => Err(invalid("enemy_quota must be positive for a level without a boss")),
            (Some(boss), quota) => {
                if boss.health <= 0 {
                    return Err(invalid("boss health must be positive"));
                }
                if quota.is_some_and(|q| q < boss.spawn_after) {
                    return Err(invalid("enemy_quota is below the boss spawn threshold"));
                }
                Ok(())
            }
            (None, Some(_)) => Ok(()),
        }
    }
}

/// Validate a whole catalogue.
pub fn validate_catalogue(levels: &[LevelConfig]) -> Result<(), ConfigError> {
    if levels.is_empty() {
        return Err(ConfigError::Empty);
    }
    levels.iter().try_for_each(LevelConfig::validate)
}
