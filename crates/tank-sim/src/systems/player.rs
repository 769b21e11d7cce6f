//! Player movement: held keys, knockback and the arena boundary.
//!
//! Forward is -Z. Diagonal input is normalized so the tank never moves
//! faster than `PLAYER_SPEED` under its own power.

use glam::DVec3;
use hecs::World;

use tank_core::components::{MoveInput, Player, PlayerControl};
use tank_core::constants::*;
use tank_core::types::{Position, Velocity};

/// Move the player, decay its knockback and advance its shoot cooldown.
pub fn run(world: &mut World, dt: f64) {
    let max_x = ARENA_HALF_EXTENT - PLAYER_HALF_EXTENTS[0];
    let max_z = ARENA_HALF_EXTENT - PLAYER_HALF_EXTENTS[2];

    for (_entity, (_player, pos, control)) in
        world.query_mut::<(&Player, &mut Position, &mut PlayerControl)>()
    {
        let drive = Velocity::along(input_direction(&control.input), PLAYER_SPEED);
        let velocity: Velocity = (DVec3::from(drive) + DVec3::from(control.knockback)).into();

        let mut next = pos.advanced(&velocity, dt);
        next.x = next.x.clamp(-max_x, max_x);
        next.z = next.z.clamp(-max_z, max_z);
        next.y = GROUND_HEIGHT;
        *pos = next;

        control.knockback = control.knockback.scaled(KNOCKBACK_DECAY);
        if control.knockback.speed() < KNOCKBACK_EPSILON {
            control.knockback = Velocity::default();
        }

        control.shoot_cooldown.tick(dt);
    }
}

/// Unit direction for the held keys, or zero when idle or cancelled out.
pub fn input_direction(input: &MoveInput) -> DVec3 {
    let mut dir = DVec3::ZERO;
    if input.forward {
        dir.z -= 1.0;
    }
    if input.backward {
        dir.z += 1.0;
    }
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }
    dir.normalize_or_zero()
}
