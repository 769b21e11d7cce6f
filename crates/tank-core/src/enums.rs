//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state). Gates which update routines run each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    LevelSelect,
    /// Short pre-level countdown; the world is not simulated yet.
    Countdown,
    Playing,
    Paused,
    GameOver,
    LevelWon,
}

impl GamePhase {
    /// Whether a level world exists in this phase.
    pub fn has_level_world(self) -> bool {
        matches!(
            self,
            GamePhase::Playing | GamePhase::Paused | GamePhase::GameOver | GamePhase::LevelWon
        )
    }
}

/// Enemy archetype. Drives speed and health.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// Slow, fragile.
    #[default]
    Grunt,
    Soldier,
    /// Fast, takes three hits.
    Elite,
}

/// Boss label carried into events and snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BossKind {
    #[default]
    Warden,
    Juggernaut,
    Overlord,
}

/// Arena theme. Presentation only; the simulation treats all maps alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapKind {
    #[default]
    Forest,
    Desert,
    City,
}

/// What a bullet struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    Enemy,
    Boss,
}

/// How a level ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelOutcome {
    /// The boss was defeated.
    BossDefeated,
    /// No boss configured; every enemy in the quota was defeated.
    ArenaCleared,
}
