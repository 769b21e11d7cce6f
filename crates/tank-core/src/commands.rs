//! Player commands sent from the front end to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. A command
//! that makes no sense in the current phase is ignored.

use serde::{Deserialize, Serialize};

use crate::components::MoveInput;
use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Menus ---
    /// Main menu -> level select.
    OpenLevelSelect,
    /// Pick a level from the catalogue and start its countdown.
    SelectLevel { index: usize },
    /// Abandon the current level (or level select) and go back to the main menu.
    ReturnToMenu,
    /// After a defeat: replay the same level.
    RestartLevel,
    /// After a win: continue with the next level in the catalogue.
    NextLevel,

    // --- Pause ---
    Pause,
    Resume,
    /// Escape-key behaviour: pause when playing, resume when paused.
    TogglePause,

    // --- In-level ---
    /// Replace the set of held movement keys.
    SetMovement { input: MoveInput },
    /// Fire toward a point on the ground (subject to the shoot cooldown).
    Shoot { target: Position },

    // --- Simulation control ---
    /// Set time scale for real-time runners (1.0 = normal).
    SetTimeScale { scale: f64 },
}
