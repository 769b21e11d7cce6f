//! Archetype-specific enemy profiles.
//!
//! Consolidates per-kind parameters used when spawning and driving enemies.

use tank_core::enums::EnemyKind;

/// Behavioral profile for an enemy kind.
pub struct EnemyProfile {
    /// Ground speed (units/s).
    pub speed: f64,
    pub max_health: i32,
    /// Ground distance within which the enemy can strike.
    pub attack_range: f64,
    /// Seconds before the first strike.
    pub engage_delay_secs: f64,
    /// Seconds between subsequent strikes.
    pub attack_cooldown_secs: f64,
    pub contact_damage: i32,
}

/// Get the profile for a given enemy kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    use tank_core::constants::*;

    let (speed, max_health) = match kind {
        EnemyKind::Grunt => (GRUNT_SPEED, GRUNT_HEALTH),
        EnemyKind::Soldier => (SOLDIER_SPEED, SOLDIER_HEALTH),
        EnemyKind::Elite => (ELITE_SPEED, ELITE_HEALTH),
    };

    EnemyProfile {
        speed,
        max_health,
        attack_range: ENEMY_ATTACK_RANGE,
        engage_delay_secs: ENEMY_ENGAGE_DELAY_SECS,
        attack_cooldown_secs: ENEMY_ATTACK_COOLDOWN_SECS,
        contact_damage: ENEMY_CONTACT_DAMAGE,
    }
}
