//! Chase-and-strike behaviour for a single enemy.
//!
//! Pure function that moves an enemy toward the player on the ground plane
//! and decides whether it strikes this tick. No ECS dependency; operates on
//! plain data.

use glam::DVec2;

use tank_core::components::AttackState;
use tank_core::types::Position;

/// Input to the chase evaluation for a single enemy.
pub struct ChaseContext {
    pub position: Position,
    pub player_position: Position,
    /// Ground speed (units/s).
    pub speed: f64,
    pub attack_range: f64,
    /// Ground distance the enemy keeps from the player.
    pub standoff: f64,
    /// Interval between strikes once the first one has landed.
    pub attack_cooldown_secs: f64,
    pub attack: AttackState,
    pub dt: f64,
}

/// Output of the chase evaluation.
pub struct ChaseUpdate {
    pub new_position: Position,
    pub new_attack: AttackState,
    /// Ground distance to the player after moving.
    pub distance_to_player: f64,
    /// The enemy strikes the player this tick.
    pub strike: bool,
}

/// Evaluate one enemy for one tick.
///
/// The enemy walks straight at the player until it is `standoff` away, then checks
/// its attack gate: the first strike waits for the engage delay, later ones
/// for the attack cooldown. The gate accumulates time whether or not the
/// player is in range.
pub fn evaluate(ctx: &ChaseContext) -> ChaseUpdate {
    let new_position = step_toward(
        &ctx.position,
        &ctx.player_position,
        ctx.speed * ctx.dt,
        ctx.standoff,
    );
    let distance_to_player = new_position.ground_distance_to(&ctx.player_position);

    let mut attack = ctx.attack;
    let mut strike = false;
    if distance_to_player <= ctx.attack_range && attack.timer.try_fire() {
        strike = true;
        if !attack.has_struck {
            attack.has_struck = true;
            attack.timer.interval_secs = ctx.attack_cooldown_secs;
        }
    }
    attack.timer.tick(ctx.dt);

    ChaseUpdate {
        new_position,
        new_attack: attack,
        distance_to_player,
        strike,
    }
}

/// Move `from` toward `to` on the ground plane by at most `max_step`,
/// stopping `standoff` short of it and keeping its height.
fn step_toward(from: &Position, to: &Position, max_step: f64, standoff: f64) -> Position {
    let offset = DVec2::new(to.x - from.x, to.z - from.z);
    let distance = offset.length();
    let travel = (distance - standoff).min(max_step);
    if travel <= 0.0 {
        return *from;
    }
    let step = offset / distance * travel;
    Position::new(from.x + step.x, from.y, from.z + step.y)
}
