//! Enemy spawner: paces enemy arrivals and brings in the boss.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use tank_core::components::{Enemy, Player};
use tank_core::config::LevelConfig;
use tank_core::events::GameEvent;

use tank_ai::pacing::spawn_interval;

use crate::score::ScoreState;
use crate::world_setup;

/// Spawner bookkeeping for the level in progress.
#[derive(Debug, Clone, Default)]
pub struct SpawnerState {
    /// Seconds accumulated toward the next spawn.
    pub elapsed_secs: f64,
    /// Seconds of play since the level started.
    pub total_secs: f64,
    /// Enemies emitted so far (initial burst included).
    pub spawned: u32,
    pub boss_spawned: bool,
}

impl SpawnerState {
    /// Whether the level's enemy quota has been emitted.
    pub fn quota_reached(&self, level: &LevelConfig) -> bool {
        level.enemy_quota.is_some_and(|quota| self.spawned >= quota)
    }
}

/// Shared borrows the spawner needs from the engine.
pub struct SpawnContext<'a> {
    pub rng: &'a mut ChaCha8Rng,
    pub next_spawn_order: &'a mut u64,
    pub events: &'a mut Vec<GameEvent>,
    pub score: &'a mut ScoreState,
}

/// Spawn the level's opening burst, respecting quota and active cap.
pub fn spawn_initial(
    world: &mut World,
    state: &mut SpawnerState,
    level: &LevelConfig,
    ctx: &mut SpawnContext,
) {
    for _ in 0..level.initial_enemies {
        if state.quota_reached(level) || at_capacity(world, level) {
            break;
        }
        spawn_one(world, state, level, ctx);
    }
}

/// Advance the spawn timers by `dt` and emit whatever is due.
pub fn run(
    world: &mut World,
    state: &mut SpawnerState,
    level: &LevelConfig,
    ctx: &mut SpawnContext,
    dt: f64,
) {
    if world.query::<&Player>().iter().next().is_none() {
        log::warn!("spawner: no player in the world; skipping update");
        return;
    }

    state.elapsed_secs += dt;
    state.total_secs += dt;

    let active = count_enemies(world);
    let interval = spawn_interval(state.total_secs, active, &level.pacing);
    if interval <= 0.0 {
        log::warn!("spawner: non-positive spawn interval {interval}; skipping spawns");
        return;
    }

    while state.elapsed_secs >= interval && !state.quota_reached(level) {
        if at_capacity(world, level) {
            // Hold the timer so a spawn follows as soon as room frees up.
            state.elapsed_secs = interval;
            break;
        }
        spawn_one(world, state, level, ctx);
        state.elapsed_secs -= interval;
    }

    if let Some(boss) = &level.boss {
        if !state.boss_spawned && state.spawned >= boss.spawn_after {
            let order = world_setup::next_order(ctx.next_spawn_order);
            world_setup::spawn_boss(world, boss, order);
            state.boss_spawned = true;
            log::info!("boss {:?} spawned after {} enemies", boss.kind, state.spawned);
            ctx.events.push(GameEvent::BossSpawned {
                kind: boss.kind,
                health: boss.health,
            });
        }
    }
}

/// Number of live enemies.
pub fn count_enemies(world: &World) -> u32 {
    let mut query = world.query::<&Enemy>();
    query.iter().count() as u32
}

fn at_capacity(world: &World, level: &LevelConfig) -> bool {
    level
        .max_active
        .is_some_and(|cap| count_enemies(world) >= cap)
}

fn spawn_one(world: &mut World, state: &mut SpawnerState, level: &LevelConfig, ctx: &mut SpawnContext) {
    let order = world_setup::next_order(ctx.next_spawn_order);
    let (_entity, position) = world_setup::spawn_enemy(world, ctx.rng, level.enemy_kind, order);
    state.spawned += 1;
    ctx.score.enemies_spawned += 1;
    ctx.events.push(GameEvent::EnemySpawned {
        id: order.0,
        kind: level.enemy_kind,
        position,
    });
}
