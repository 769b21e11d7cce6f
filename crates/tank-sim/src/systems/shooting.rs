//! Shooting system: turns a requested shot into a bullet when the shoot
//! cooldown allows it.

use hecs::World;

use tank_core::components::{Player, PlayerControl};
use tank_core::events::GameEvent;
use tank_core::types::Position;

use crate::score::ScoreState;
use crate::world_setup;

/// Fire the player's pending shot, if any.
///
/// A shot requested while the cooldown is closed is dropped, not queued.
pub fn run(
    world: &mut World,
    next_spawn_order: &mut u64,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    let mut fired: Option<(Position, glam::DVec3)> = None;

    for (_entity, (_player, pos, control)) in
        world.query_mut::<(&Player, &Position, &mut PlayerControl)>()
    {
        let Some(target) = control.pending_shot.take() else {
            continue;
        };
        let Some(direction) = pos.direction_to(&target) else {
            log::warn!("shot target {target:?} coincides with the player; ignoring");
            continue;
        };
        if control.shoot_cooldown.try_fire() {
            fired = Some((*pos, direction));
        }
    }

    if let Some((origin, direction)) = fired {
        let order = world_setup::next_order(next_spawn_order);
        world_setup::spawn_bullet(world, origin, direction, order);
        score.bullets_fired += 1;
        events.push(GameEvent::BulletFired { position: origin });
    }
}
