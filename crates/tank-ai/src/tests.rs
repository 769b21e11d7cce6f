use tank_core::components::AttackState;
use tank_core::config::SpawnPacing;
use tank_core::constants::*;
use tank_core::enums::EnemyKind;
use tank_core::timer::Cooldown;
use tank_core::types::Position;

use crate::chase::{evaluate, ChaseContext};
use crate::pacing::spawn_interval;
use crate::profiles::get_profile;

fn fresh_attack() -> AttackState {
    AttackState {
        timer: Cooldown::new(ENEMY_ENGAGE_DELAY_SECS),
        has_struck: false,
    }
}

/// Enemy at ground distance `distance` due east of a player at the origin.
fn make_context(distance: f64, attack: AttackState) -> ChaseContext {
    let profile = get_profile(EnemyKind::Grunt);
    ChaseContext {
        position: Position::new(distance, GROUND_HEIGHT, 0.0),
        player_position: Position::new(0.0, GROUND_HEIGHT, 0.0),
        speed: profile.speed,
        attack_range: profile.attack_range,
        standoff: ENEMY_STANDOFF_DISTANCE,
        attack_cooldown_secs: profile.attack_cooldown_secs,
        attack,
        dt: DT,
    }
}

// ---- Profiles ----

#[test]
fn test_profiles_scale_with_kind() {
    let grunt = get_profile(EnemyKind::Grunt);
    let soldier = get_profile(EnemyKind::Soldier);
    let elite = get_profile(EnemyKind::Elite);
    assert!(grunt.speed < soldier.speed && soldier.speed < elite.speed);
    assert!(grunt.max_health < soldier.max_health && soldier.max_health < elite.max_health);
    assert_eq!(grunt.max_health, 50);
    assert_eq!(elite.speed, 4.0);
}

// ---- Chase ----

#[test]
fn test_chase_moves_toward_player() {
    let ctx = make_context(20.0, fresh_attack());
    let update = evaluate(&ctx);
    let expected = 20.0 - GRUNT_SPEED * DT;
    assert!((update.new_position.x - expected).abs() < 1e-9);
    assert_eq!(update.new_position.z, 0.0);
    assert_eq!(update.new_position.y, GROUND_HEIGHT);
    assert!(!update.strike, "Out of range, no strike");
}

#[test]
fn test_chase_stops_at_standoff() {
    let mut ctx = make_context(ENEMY_STANDOFF_DISTANCE + 0.01, fresh_attack());
    ctx.speed = 100.0;
    let update = evaluate(&ctx);
    assert!((update.distance_to_player - ENEMY_STANDOFF_DISTANCE).abs() < 1e-9);
    assert!(update.new_position.x > 0.0, "Stays on its own side of the player");
}

#[test]
fn test_chase_holds_inside_standoff() {
    for distance in [0.0, 1.0] {
        let ctx = make_context(distance, fresh_attack());
        let update = evaluate(&ctx);
        assert_eq!(update.new_position, ctx.position);
    }
}

#[test]
fn test_chase_keeps_height() {
    let mut ctx = make_context(10.0, fresh_attack());
    ctx.player_position.y = 7.0;
    let update = evaluate(&ctx);
    assert_eq!(update.new_position.y, GROUND_HEIGHT);
}

#[test]
fn test_first_strike_waits_for_engage_delay() {
    let mut attack = fresh_attack();
    let mut strikes = 0;
    let mut first_strike_tick = None;

    // In range the whole time.
    for tick in 0..120 {
        let update = evaluate(&make_context(1.0, attack));
        attack = update.new_attack;
        if update.strike {
            strikes += 1;
            first_strike_tick.get_or_insert(tick);
        }
    }

    let first = first_strike_tick.expect("Enemy should strike within two seconds");
    let first_secs = first as f64 * DT;
    assert!(
        (first_secs - ENEMY_ENGAGE_DELAY_SECS).abs() <= 2.0 * DT,
        "First strike at {first_secs}s, expected ~{ENEMY_ENGAGE_DELAY_SECS}s"
    );
    assert_eq!(strikes, 1, "Cooldown of 1.5s allows only one strike in 2s");
    assert!(attack.has_struck);
    assert_eq!(attack.timer.interval_secs, ENEMY_ATTACK_COOLDOWN_SECS);
}

#[test]
fn test_strikes_repeat_at_cooldown() {
    let mut attack = fresh_attack();
    let mut strike_ticks = Vec::new();
    // 1.0s engage + 1.5s + 1.5s = 4.0s -> three strikes within 4.2s.
    for tick in 0..252 {
        let update = evaluate(&make_context(1.0, attack));
        attack = update.new_attack;
        if update.strike {
            strike_ticks.push(tick);
        }
    }
    assert_eq!(strike_ticks.len(), 3, "strikes at {strike_ticks:?}");
    let gap = (strike_ticks[2] - strike_ticks[1]) as f64 * DT;
    assert!((gap - ENEMY_ATTACK_COOLDOWN_SECS).abs() <= 2.0 * DT);
}

#[test]
fn test_timer_accumulates_out_of_range() {
    let mut attack = fresh_attack();
    // Far away for more than the engage delay.
    for _ in 0..90 {
        attack = evaluate(&make_context(25.0, attack)).new_attack;
    }
    assert!(attack.timer.is_ready());

    // Reaching the player now strikes immediately.
    let update = evaluate(&make_context(2.0, attack));
    assert!(update.strike);
}

// ---- Pacing ----

#[test]
fn test_pacing_empty_arena_at_start_is_slowest() {
    let pacing = SpawnPacing::default();
    let interval = spawn_interval(0.0, 0, &pacing);
    assert!((interval - SPAWN_MAX_INTERVAL_SECS).abs() < 1e-12);
}

#[test]
fn test_pacing_tightens_with_crowd() {
    let pacing = SpawnPacing::default();
    let sparse = spawn_interval(10.0, 2, &pacing);
    let crowded = spawn_interval(10.0, 15, &pacing);
    assert!(crowded < sparse);
    // At or beyond the crowd limit the minimum applies.
    let full = spawn_interval(10.0, 25, &pacing);
    assert!((full - SPAWN_MIN_INTERVAL_SECS).abs() < 1e-12);
}

#[test]
fn test_pacing_tightens_with_time() {
    let pacing = SpawnPacing::default();
    let early = spawn_interval(5.0, 0, &pacing);
    let halfway = spawn_interval(90.0, 0, &pacing);
    assert!(halfway < early);
    let expected_halfway = SPAWN_MIN_INTERVAL_SECS
        + (SPAWN_MAX_INTERVAL_SECS - SPAWN_MIN_INTERVAL_SECS) * 0.5;
    assert!((halfway - expected_halfway).abs() < 1e-9);
}

#[test]
fn test_pacing_pinned_after_ramp() {
    let pacing = SpawnPacing::default();
    for active in [0, 5, 40] {
        let interval = spawn_interval(SPAWN_RAMP_SECS + 1.0, active, &pacing);
        assert_eq!(interval, SPAWN_MIN_INTERVAL_SECS);
    }
}
