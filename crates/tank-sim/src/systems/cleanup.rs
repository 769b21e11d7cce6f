//! Cleanup system: removes bullets that left the arena and clears the
//! field when a level is won.

use hecs::{Entity, World};

use tank_core::components::{Boss, Bullet, Enemy};
use tank_core::constants::ARENA_HALF_EXTENT;
use tank_core::types::Position;

/// Remove bullets beyond the arena boundary.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, _bullet)) in world.query_mut::<(&Position, &Bullet)>() {
        if pos.x.abs() > ARENA_HALF_EXTENT || pos.z.abs() > ARENA_HALF_EXTENT {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Remove every enemy, boss and bullet, leaving the player in place.
pub fn clear_hostiles(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    despawn_buffer.extend(world.query_mut::<&Enemy>().into_iter().map(|(e, _)| e));
    despawn_buffer.extend(world.query_mut::<&Boss>().into_iter().map(|(e, _)| e));
    despawn_buffer.extend(world.query_mut::<&Bullet>().into_iter().map(|(e, _)| e));

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
