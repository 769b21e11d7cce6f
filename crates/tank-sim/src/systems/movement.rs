//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Only free-flying entities (bullets) carry a `Velocity`; the player and
//! enemies are moved by their own systems.

use hecs::World;

use tank_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        *pos = pos.advanced(vel, dt);
    }
}
