//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems and in
//! the pure decision functions of `tank-ai`, not in components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::timer::Cooldown;
use crate::types::{Position, Velocity};

/// Hit points. An entity at or below zero is defeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Collision volume centred on the entity's `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    /// Axis-aligned bounding box.
    Box { half_extents: [f64; 3] },
    /// Distance threshold.
    Sphere { radius: f64 },
}

/// Monotonic spawn sequence number. Iteration "in spawn order" sorts by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// Held movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Marks the player's tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Player-driven state: input, knockback and the shooting gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerControl {
    pub input: MoveInput,
    /// Residual push from enemy strikes, decays every tick.
    pub knockback: Velocity,
    pub shoot_cooldown: Cooldown,
    /// Aim point of a shot requested since the last tick.
    pub pending_shot: Option<Position>,
}

/// A chasing enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Ground speed (units/s).
    pub speed: f64,
    pub attack_range: f64,
    pub contact_damage: i32,
}

/// Melee gate of an enemy: engage delay before the first strike, then a
/// fixed cooldown between strikes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackState {
    pub timer: Cooldown,
    /// Whether the first strike has landed.
    pub has_struck: bool,
}

/// The level boss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Boss {
    pub kind: BossKind,
}

/// A player projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub damage_vs_enemy: i32,
    pub damage_vs_boss: i32,
}

/// Time-to-live of a transient entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifespan {
    pub timer: Cooldown,
}
