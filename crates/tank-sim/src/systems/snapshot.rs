//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use tank_core::components::*;
use tank_core::enums::GamePhase;
use tank_core::events::GameEvent;
use tank_core::state::*;
use tank_core::types::{Position, SimTime};

use crate::score::ScoreState;

/// Engine-side state the snapshot needs besides the world.
pub struct SnapshotInputs<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub level: Option<LevelView>,
    pub countdown: Option<u32>,
    pub events: Vec<GameEvent>,
    pub score: &'a ScoreState,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(world: &World, inputs: SnapshotInputs) -> GameStateSnapshot {
    let player = build_player(world);
    let enemies = build_enemies(world);
    let boss = build_boss(world);

    let hud = HudView {
        player_health: player.as_ref().map_or(0, |p| p.health.max(0)),
        enemy_count: enemies.len() as u32,
        boss_health: boss.as_ref().map(|b| b.health),
    };

    GameStateSnapshot {
        time: *inputs.time,
        phase: inputs.phase,
        level: inputs.level,
        countdown: inputs.countdown,
        player,
        enemies,
        boss,
        bullets: build_bullets(world),
        hud,
        events: inputs.events,
        score: inputs.score.view(inputs.time.elapsed_secs),
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&Player, &Position, &Health, &PlayerControl)>()
        .iter()
        .next()
        .map(|(_, (_, pos, health, control))| PlayerView {
            position: *pos,
            health: health.current,
            max_health: health.max,
            can_shoot: control.shoot_cooldown.is_ready(),
        })
}

/// Enemy views in spawn order; the id is the spawn sequence number.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Health, &SpawnOrder)>()
        .iter()
        .map(|(_, (enemy, pos, health, order))| EnemyView {
            id: order.0,
            kind: enemy.kind,
            position: *pos,
            health: health.current,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_boss(world: &World) -> Option<BossView> {
    world
        .query::<(&Boss, &Position, &Health)>()
        .iter()
        .next()
        .map(|(_, (boss, pos, health))| BossView {
            kind: boss.kind,
            position: *pos,
            health: health.current,
            max_health: health.max,
        })
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<(SpawnOrder, BulletView)> = world
        .query::<(&Bullet, &Position, &SpawnOrder)>()
        .iter()
        .map(|(_, (_, pos, order))| (*order, BulletView { position: *pos }))
        .collect();

    bullets.sort_by_key(|b| b.0);
    bullets.into_iter().map(|(_, view)| view).collect()
}
