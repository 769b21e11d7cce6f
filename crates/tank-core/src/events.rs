//! Events emitted by the simulation for HUD, audio and menu feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Countdown display changed (whole seconds remaining).
    Countdown { remaining_secs: u32 },
    /// The level world was built and play began.
    LevelStarted { index: usize, name: String },
    EnemySpawned {
        id: u64,
        kind: EnemyKind,
        position: Position,
    },
    BossSpawned { kind: BossKind, health: i32 },
    /// A bullet left the barrel.
    BulletFired { position: Position },
    /// A bullet struck a target that survived or was defeated by the hit.
    TargetHit {
        target: HitTarget,
        damage: i32,
        remaining_health: i32,
    },
    EnemyDefeated { id: u64, kind: EnemyKind },
    BossDefeated { kind: BossKind },
    PlayerDamaged { damage: i32, remaining_health: i32 },
    PlayerDefeated,
    LevelWon { index: usize, outcome: LevelOutcome },
    /// The last level of the catalogue was won.
    GameComplete,
}
