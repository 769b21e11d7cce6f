//! Headless front end for the tank arena.
//!
//! Runs the simulation engine either as fast as possible or on a real-time
//! game-loop thread, driven by a scripted autopilot in place of a human.

pub mod autopilot;
pub mod game_loop;
pub mod logging;
pub mod runner;
pub mod state;

pub use tank_core as core;
