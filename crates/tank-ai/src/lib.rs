//! Enemy decision logic for the tank arena.
//!
//! Implements the chase-and-strike state machine, archetype-driven
//! enemy profiles, and the spawn pacing curve. Everything here is a pure
//! function over plain data; the simulation crate applies the results.

pub mod chase;
pub mod pacing;
pub mod profiles;

pub use tank_core as core;

#[cfg(test)]
mod tests;
