//! Session drivers: run the engine under the autopilot, either headless as
//! fast as possible or against the real-time game loop thread.

use std::time::{Duration, Instant};

use serde::Serialize;

use tank_core::enums::{GamePhase, LevelOutcome};
use tank_core::events::GameEvent;
use tank_core::state::{GameStateSnapshot, ScoreView};
use tank_sim::engine::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::game_loop::TICK_DURATION;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelStatus {
    InProgress,
    Won,
    Lost,
}

/// One attempt at a level.
#[derive(Debug, Clone, Serialize)]
pub struct LevelResult {
    pub index: usize,
    pub name: String,
    pub status: LevelStatus,
    /// Set when the win was observed as an event.
    pub outcome: Option<LevelOutcome>,
    pub score: ScoreView,
}

/// What happened over a whole session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    /// Snapshots observed (every engine tick when headless).
    pub snapshots: u64,
    /// Simulated seconds of play.
    pub sim_secs: f64,
    pub final_phase: GamePhase,
    pub levels: Vec<LevelResult>,
    pub game_complete: bool,
}

impl SessionSummary {
    pub fn levels_won(&self) -> usize {
        self.levels
            .iter()
            .filter(|l| l.status == LevelStatus::Won)
            .count()
    }
}

/// Folds snapshots into a [`SessionSummary`]. Level attempts are detected
/// from phase transitions so skipped snapshots only lose events.
#[derive(Debug)]
struct SessionTracker {
    seed: u64,
    /// Size of the level catalogue being played.
    level_count: usize,
    snapshots: u64,
    sim_secs: f64,
    last_phase: GamePhase,
    levels: Vec<LevelResult>,
    game_complete: bool,
}

impl SessionTracker {
    fn new(seed: u64, level_count: usize) -> Self {
        Self {
            seed,
            level_count,
            snapshots: 0,
            sim_secs: 0.0,
            last_phase: GamePhase::MainMenu,
            levels: Vec::new(),
            game_complete: false,
        }
    }

    fn observe(&mut self, snap: &GameStateSnapshot) {
        self.snapshots += 1;
        self.sim_secs = snap.time.elapsed_secs;

        if snap.phase.has_level_world() {
            if self.starts_attempt(snap.phase) {
                if let Some(level) = &snap.level {
                    log::info!("level {} ({}) started", level.index, level.name);
                    self.levels.push(LevelResult {
                        index: level.index,
                        name: level.name.clone(),
                        status: LevelStatus::InProgress,
                        outcome: None,
                        score: ScoreView::default(),
                    });
                }
            }
            if let Some(current) = self.levels.last_mut() {
                current.score = snap.score.clone();
                current.status = match snap.phase {
                    GamePhase::LevelWon => LevelStatus::Won,
                    GamePhase::GameOver => LevelStatus::Lost,
                    _ => LevelStatus::InProgress,
                };
            }
        }

        for event in &snap.events {
            match event {
                GameEvent::LevelWon { index, outcome } => {
                    log::info!("level {index} won: {outcome:?}");
                    if let Some(current) = self.levels.last_mut() {
                        current.outcome = Some(*outcome);
                    }
                }
                GameEvent::PlayerDefeated => log::info!("player defeated"),
                GameEvent::GameComplete => self.game_complete = true,
                _ => {}
            }
        }

        // Covers a GameComplete event on a snapshot the real-time runner skipped.
        if self.last_phase == GamePhase::LevelWon
            && snap.phase == GamePhase::MainMenu
            && self.won_final_level()
        {
            self.game_complete = true;
        }
        self.last_phase = snap.phase;
    }

    fn won_final_level(&self) -> bool {
        self.levels.last().is_some_and(|l| {
            l.status == LevelStatus::Won && l.index + 1 == self.level_count
        })
    }

    /// Whether moving from the last phase to `phase` means a fresh level world.
    fn starts_attempt(&self, phase: GamePhase) -> bool {
        let was_over = matches!(self.last_phase, GamePhase::LevelWon | GamePhase::GameOver);
        let now_live = matches!(phase, GamePhase::Playing | GamePhase::Paused);
        !self.last_phase.has_level_world() || (was_over && now_live)
    }

    fn finish(self) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            snapshots: self.snapshots,
            sim_secs: self.sim_secs,
            final_phase: self.last_phase,
            levels: self.levels,
            game_complete: self.game_complete,
        }
    }
}

/// Run a session to completion on the calling thread, without sleeping.
///
/// Stops when the autopilot is done or after `max_ticks` engine ticks.
pub fn run_headless(config: SimConfig, mut autopilot: Autopilot, max_ticks: u64) -> SessionSummary {
    let mut tracker = SessionTracker::new(config.seed, config.levels.len());
    let mut engine = SimulationEngine::new(config);
    let mut finished = false;

    for _ in 0..max_ticks {
        let snap = engine.tick();
        tracker.observe(&snap);
        if autopilot.is_finished(&snap) {
            finished = true;
            break;
        }
        engine.queue_commands(autopilot.decide(&snap));
    }

    if !finished {
        log::warn!("session stopped after {max_ticks} ticks");
    }
    tracker.finish()
}

/// Run a session on the real-time game loop thread, polling its snapshots.
///
/// Stops when the autopilot is done or `timeout` of wall time has passed.
pub fn run_realtime(
    config: SimConfig,
    mut autopilot: Autopilot,
    timeout: Duration,
) -> anyhow::Result<SessionSummary> {
    let mut tracker = SessionTracker::new(config.seed, config.levels.len());
    let state = AppState::new();
    state.start_simulation(config)?;

    let deadline = Instant::now() + timeout;
    let poll = TICK_DURATION / 2;
    let mut finished = false;

    while Instant::now() < deadline {
        if let Some(snap) = state.take_snapshot() {
            tracker.observe(&snap);
            // A missed GameComplete event would otherwise restart the campaign.
            let back_at_menu = snap.phase == GamePhase::MainMenu && !tracker.levels.is_empty();
            if autopilot.is_finished(&snap) || back_at_menu {
                finished = true;
                break;
            }
            for command in autopilot.decide(&snap) {
                state.send_command(command)?;
            }
        }
        std::thread::sleep(poll);
    }

    state.shutdown();
    if !finished {
        log::warn!("session timed out after {timeout:?}");
    }
    Ok(tracker.finish())
}
