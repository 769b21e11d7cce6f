//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or is passed in
//! by the engine.

pub mod cleanup;
pub mod combat;
pub mod enemy_ai;
pub mod movement;
pub mod player;
pub mod shooting;
pub mod snapshot;
pub mod spawner;
