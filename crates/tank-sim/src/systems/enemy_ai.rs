//! Enemy AI system: chases the player and applies contact damage.
//!
//! Calls the chase evaluation from tank-ai for every enemy, then applies
//! the resulting positions, attack timers and strikes to the world.

use glam::DVec3;
use hecs::{Entity, World};

use tank_core::components::{
    AttackState, Enemy, Health, MoveInput, Player, PlayerControl, SpawnOrder,
};
use tank_core::constants::{ENEMY_STANDOFF_DISTANCE, KNOCKBACK_IMPULSE};
use tank_core::events::GameEvent;
use tank_core::types::{Position, Velocity};

use tank_ai::chase::{evaluate, ChaseContext};
use tank_ai::profiles::get_profile;

use crate::score::ScoreState;
use crate::systems::player::input_direction;

/// Run the enemy AI: move every enemy, then resolve strikes in spawn order.
pub fn run(
    world: &mut World,
    dt: f64,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
    despawn_buffer: &mut Vec<Entity>,
) {
    let player = {
        let mut query = world.query::<(&Player, &Position, &Health)>();
        query
            .iter()
            .find(|(_, (_, _, health))| health.current > 0)
            .map(|(entity, (_, pos, _))| (entity, *pos))
    };
    let Some((player_entity, player_pos)) = player else {
        log::warn!("enemy AI: no live player in the world; skipping update");
        return;
    };

    // Collect updates in a buffer to avoid borrow issues with hecs
    let mut updates: Vec<(SpawnOrder, Entity, Position, AttackState, bool, i32)> = Vec::new();
    {
        let mut query = world.query::<(&Enemy, &Position, &AttackState, &SpawnOrder)>();
        for (entity, (enemy, pos, attack, order)) in query.iter() {
            let ctx = ChaseContext {
                position: *pos,
                player_position: player_pos,
                speed: enemy.speed,
                attack_range: enemy.attack_range,
                standoff: ENEMY_STANDOFF_DISTANCE,
                attack_cooldown_secs: get_profile(enemy.kind).attack_cooldown_secs,
                attack: *attack,
                dt,
            };
            let update = evaluate(&ctx);
            updates.push((
                *order,
                entity,
                update.new_position,
                update.new_attack,
                update.strike,
                enemy.contact_damage,
            ));
        }
    }
    updates.sort_by_key(|u| u.0);

    let mut player_down = false;
    for (_order, entity, new_position, new_attack, strike, damage) in updates {
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            *pos = new_position;
        }
        if let Ok(mut attack) = world.get::<&mut AttackState>(entity) {
            *attack = new_attack;
        }

        if strike && !player_down {
            player_down = strike_player(world, player_entity, &new_position, damage, events, score);
            if player_down {
                despawn_buffer.push(player_entity);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Apply one strike to the player. Returns whether the player was defeated.
fn strike_player(
    world: &mut World,
    player: Entity,
    striker: &Position,
    damage: i32,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) -> bool {
    let remaining = match world.get::<&mut Health>(player) {
        Ok(mut health) => {
            health.current -= damage;
            health.current
        }
        Err(_) => return false,
    };
    score.damage_taken += damage.max(0) as u32;
    events.push(GameEvent::PlayerDamaged {
        damage,
        remaining_health: remaining,
    });

    let player_pos = world.get::<&Position>(player).ok().map(|pos| *pos);
    if let (Some(player_pos), Ok(mut control)) =
        (player_pos, world.get::<&mut PlayerControl>(player))
    {
        let direction = knockback_direction(striker, &player_pos, &control.input);
        let impulse = Velocity::along(direction, KNOCKBACK_IMPULSE);
        control.knockback = Velocity::new(
            control.knockback.x + impulse.x,
            control.knockback.y + impulse.y,
            control.knockback.z + impulse.z,
        );
    }

    if remaining <= 0 {
        log::info!("player defeated");
        events.push(GameEvent::PlayerDefeated);
        return true;
    }
    false
}

/// Ground-plane push for a strike: away from the striker. A striker on the
/// player's spot pushes against the held keys, or toward +Z when idle.
fn knockback_direction(striker: &Position, player: &Position, input: &MoveInput) -> DVec3 {
    let away = DVec3::new(player.x - striker.x, 0.0, player.z - striker.z);
    if let Some(direction) = away.try_normalize() {
        return direction;
    }
    let reverse = -input_direction(input);
    if reverse == DVec3::ZERO {
        DVec3::Z
    } else {
        reverse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knockback_points_away_on_the_ground() {
        let striker = Position::new(3.0, 1.0, 0.0);
        let player = Position::new(0.0, 4.0, 0.0);
        let direction = knockback_direction(&striker, &player, &MoveInput::default());
        assert!((direction - DVec3::NEG_X).length() < 1e-12);
    }

    #[test]
    fn knockback_on_the_same_spot_is_still_defined() {
        let spot = Position::new(2.0, 1.0, 2.0);
        let idle = knockback_direction(&spot, &spot, &MoveInput::default());
        assert_eq!(idle, DVec3::Z);

        let right = MoveInput {
            right: true,
            ..Default::default()
        };
        assert_eq!(knockback_direction(&spot, &spot, &right), DVec3::NEG_X);
    }
}
