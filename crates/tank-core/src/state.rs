//! Game state snapshot: the complete visible state handed to presentation
//! layers after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub level: Option<LevelView>,
    /// Whole seconds left on the pre-level countdown (Countdown phase only).
    pub countdown: Option<u32>,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub boss: Option<BossView>,
    pub bullets: Vec<BulletView>,
    pub hud: HudView,
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

/// The level being played (or about to be).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelView {
    pub index: usize,
    pub name: String,
    pub enemy_kind: EnemyKind,
    pub map: MapKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    /// Whether a shot would be accepted right now.
    pub can_shoot: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub kind: EnemyKind,
    pub position: Position,
    pub health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub kind: BossKind,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Position,
}

/// Values shown on the heads-up display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub player_health: i32,
    pub enemy_count: u32,
    /// Present only while a boss is alive.
    pub boss_health: Option<i32>,
}

/// Running score for the current level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_defeated: u32,
    pub enemies_spawned: u32,
    pub bullets_fired: u32,
    pub bullets_hit: u32,
    pub damage_taken: u32,
    pub level_time_secs: f64,
}

impl ScoreView {
    /// Fraction of fired bullets that struck something.
    pub fn accuracy(&self) -> f64 {
        if self.bullets_fired == 0 {
            0.0
        } else {
            self.bullets_hit as f64 / self.bullets_fired as f64
        }
    }
}
