//! Combat resolution: bullets against enemies and the boss.
//!
//! Bullets are resolved in spawn order. Each bullet tests every live enemy
//! in spawn order and credits the first one it overlaps; failing that it
//! tests the boss; failing that it ages and expires. A target whose health
//! drops to zero or below is despawned at the end of the pass and is
//! invisible to every later bullet in the same tick.

use hecs::{Entity, World};

use tank_core::components::*;
use tank_core::enums::HitTarget;
use tank_core::events::GameEvent;
use tank_core::types::Position;

use crate::geometry::overlaps;
use crate::score::ScoreState;

/// A combatant as seen by the resolver.
struct Target {
    entity: Entity,
    position: Position,
    collider: Collider,
    alive: bool,
}

/// Run the resolver for one tick.
pub fn run(
    world: &mut World,
    dt: f64,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut bullets: Vec<(SpawnOrder, Entity, Position, Collider, Bullet)> = world
        .query::<(&Bullet, &Position, &Collider, &SpawnOrder)>()
        .iter()
        .map(|(entity, (bullet, pos, collider, order))| (*order, entity, *pos, *collider, *bullet))
        .collect();
    bullets.sort_by_key(|b| b.0);

    let mut enemies: Vec<(SpawnOrder, Target)> = world
        .query::<(&Enemy, &Position, &Collider, &Health, &SpawnOrder)>()
        .iter()
        .map(|(entity, (_enemy, pos, collider, health, order))| {
            (
                *order,
                Target {
                    entity,
                    position: *pos,
                    collider: *collider,
                    alive: health.current > 0,
                },
            )
        })
        .collect();
    enemies.sort_by_key(|e| e.0);

    let mut boss: Option<Target> = world
        .query::<(&Boss, &Position, &Collider, &Health)>()
        .iter()
        .next()
        .map(|(entity, (_boss, pos, collider, health))| Target {
            entity,
            position: *pos,
            collider: *collider,
            alive: health.current > 0,
        });

    for (_order, bullet_entity, bullet_pos, bullet_collider, bullet) in bullets {
        let enemy_hit = enemies
            .iter_mut()
            .map(|(_, target)| target)
            .find(|t| t.alive && overlaps(&bullet_pos, &bullet_collider, &t.position, &t.collider));

        if let Some(target) = enemy_hit {
            hit(world, target, HitTarget::Enemy, bullet.damage_vs_enemy, events, despawn_buffer);
            score.bullets_hit += 1;
            if !target.alive {
                score.enemies_defeated += 1;
            }
            despawn_buffer.push(bullet_entity);
            continue;
        }

        if let Some(target) = boss.as_mut().filter(|t| {
            t.alive && overlaps(&bullet_pos, &bullet_collider, &t.position, &t.collider)
        }) {
            hit(world, target, HitTarget::Boss, bullet.damage_vs_boss, events, despawn_buffer);
            score.bullets_hit += 1;
            despawn_buffer.push(bullet_entity);
            continue;
        }

        let expired = match world.get::<&mut Lifespan>(bullet_entity) {
            Ok(mut lifespan) => {
                lifespan.timer.tick(dt);
                lifespan.timer.is_ready()
            }
            Err(_) => false,
        };
        if expired {
            despawn_buffer.push(bullet_entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Apply one bullet's damage to a live target and queue its removal if defeated.
fn hit(
    world: &mut World,
    target: &mut Target,
    kind: HitTarget,
    damage: i32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let remaining = match world.get::<&mut Health>(target.entity) {
        Ok(mut health) => {
            health.current -= damage;
            health.current
        }
        Err(_) => {
            log::warn!("combat: target {:?} has no health; skipping", target.entity);
            return;
        }
    };
    events.push(GameEvent::TargetHit {
        target: kind,
        damage,
        remaining_health: remaining,
    });
    if remaining > 0 {
        return;
    }

    target.alive = false;
    despawn_buffer.push(target.entity);
    match kind {
        HitTarget::Enemy => {
            let defeated = world
                .get::<&Enemy>(target.entity)
                .ok()
                .map(|enemy| enemy.kind)
                .zip(world.get::<&SpawnOrder>(target.entity).ok().map(|o| o.0));
            if let Some((enemy_kind, id)) = defeated {
                events.push(GameEvent::EnemyDefeated { id, kind: enemy_kind });
            }
        }
        HitTarget::Boss => {
            if let Ok(boss) = world.get::<&Boss>(target.entity) {
                log::info!("boss {:?} defeated", boss.kind);
                events.push(GameEvent::BossDefeated { kind: boss.kind });
            }
        }
    }
}
