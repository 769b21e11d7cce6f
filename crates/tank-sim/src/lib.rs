//! Simulation engine for the tank arena.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the front end.

pub mod engine;
pub mod geometry;
pub mod levels;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use tank_core as core;
