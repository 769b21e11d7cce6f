//! Entity spawn factories for setting up the level world.
//!
//! Creates the player, enemies, the boss and bullets with their component
//! bundles. Every spawned combatant and bullet carries a `SpawnOrder`.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tank_core::components::*;
use tank_core::config::BossConfig;
use tank_core::constants::*;
use tank_core::enums::EnemyKind;
use tank_core::timer::Cooldown;
use tank_core::types::{Position, Velocity};

use tank_ai::profiles::get_profile;

/// Hand out the next spawn sequence number.
pub fn next_order(counter: &mut u64) -> SpawnOrder {
    let order = SpawnOrder(*counter);
    *counter += 1;
    order
}

/// Spawn the player's tank at the arena centre with full health.
pub fn spawn_player(world: &mut World, input: MoveInput) -> Entity {
    world.spawn((
        Player,
        Position::new(0.0, GROUND_HEIGHT, 0.0),
        Health {
            current: PLAYER_MAX_HEALTH,
            max: PLAYER_MAX_HEALTH,
        },
        PlayerControl {
            input,
            knockback: Velocity::default(),
            shoot_cooldown: Cooldown::ready(SHOOT_COOLDOWN_SECS),
            pending_shot: None,
        },
    ))
}

/// Spawn an enemy on the spawn ring at a random bearing.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    order: SpawnOrder,
) -> (Entity, Position) {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let position = Position::new(
        ENEMY_SPAWN_DISTANCE * angle.cos(),
        GROUND_HEIGHT,
        ENEMY_SPAWN_DISTANCE * angle.sin(),
    );
    (spawn_enemy_at(world, kind, position, order), position)
}

/// Spawn an enemy at an exact position.
pub fn spawn_enemy_at(
    world: &mut World,
    kind: EnemyKind,
    position: Position,
    order: SpawnOrder,
) -> Entity {
    let profile = get_profile(kind);
    world.spawn((
        Enemy {
            kind,
            speed: profile.speed,
            attack_range: profile.attack_range,
            contact_damage: profile.contact_damage,
        },
        AttackState {
            timer: Cooldown::new(profile.engage_delay_secs),
            has_struck: false,
        },
        position,
        Health {
            current: profile.max_health,
            max: profile.max_health,
        },
        Collider::Box {
            half_extents: ENEMY_HALF_EXTENTS,
        },
        order,
    ))
}

/// Spawn the boss hovering over the arena centre.
pub fn spawn_boss(world: &mut World, config: &BossConfig, order: SpawnOrder) -> Entity {
    world.spawn((
        Boss { kind: config.kind },
        Position::new(0.0, BOSS_HOVER_HEIGHT, 0.0),
        Health {
            current: config.health,
            max: config.health,
        },
        Collider::Box {
            half_extents: BOSS_HALF_EXTENTS,
        },
        order,
    ))
}

/// Spawn a bullet at `origin` travelling along `direction` (normalized).
pub fn spawn_bullet(
    world: &mut World,
    origin: Position,
    direction: glam::DVec3,
    order: SpawnOrder,
) -> Entity {
    world.spawn((
        Bullet {
            damage_vs_enemy: BULLET_DAMAGE_ENEMY,
            damage_vs_boss: BULLET_DAMAGE_BOSS,
        },
        origin,
        Velocity::along(direction, BULLET_SPEED),
        Collider::Sphere {
            radius: BULLET_RADIUS,
        },
        Lifespan {
            timer: Cooldown::new(BULLET_LIFESPAN_SECS),
        },
        order,
    ))
}
