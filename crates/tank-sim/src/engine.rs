//! Simulation engine: owns the world and advances it one tick at a time.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! drives the game-phase machine, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tank_core::commands::PlayerCommand;
use tank_core::components::{Enemy, MoveInput, Player, PlayerControl};
use tank_core::config::{validate_catalogue, LevelConfig};
use tank_core::constants::{COUNTDOWN_SECS, DT};
use tank_core::enums::{GamePhase, LevelOutcome};
use tank_core::error::ConfigError;
use tank_core::events::GameEvent;
use tank_core::state::{GameStateSnapshot, LevelView};
use tank_core::timer::Cooldown;
use tank_core::types::SimTime;

use crate::levels::builtin_levels;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::snapshot::SnapshotInputs;
use crate::systems::spawner::{SpawnContext, SpawnerState};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Level catalogue, played in order.
    pub levels: Vec<LevelConfig>,
    /// Length of the pre-level countdown.
    pub countdown_secs: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            levels: builtin_levels(),
            countdown_secs: COUNTDOWN_SECS,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_catalogue(&self.levels)
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    levels: Vec<LevelConfig>,
    countdown_secs: f64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,

    // --- Level in progress ---
    current_level: Option<usize>,
    countdown: Cooldown,
    countdown_shown: Option<u32>,
    spawner: SpawnerState,
    next_spawn_order: u64,
    held_input: MoveInput,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            levels: config.levels,
            countdown_secs: config.countdown_secs,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            current_level: None,
            countdown: Cooldown::new(config.countdown_secs),
            countdown_shown: None,
            spawner: SpawnerState::default(),
            next_spawn_order: 0,
            held_input: MoveInput::default(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        match self.phase {
            GamePhase::Countdown => self.advance_countdown(),
            GamePhase::Playing => {
                self.run_systems();
                self.time.advance();
                self.evaluate_outcome();
            }
            _ => {}
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotInputs {
                time: &self.time,
                phase: self.phase,
                level: self.level_view(),
                countdown: (self.phase == GamePhase::Countdown).then(|| self.countdown_display()),
                events,
                score: &self.score,
            },
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Index of the level being played or counted down.
    pub fn current_level(&self) -> Option<usize> {
        self.current_level
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the score state.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a read-only reference to the spawner state.
    pub fn spawner(&self) -> &SpawnerState {
        &self.spawner
    }

    /// Spawn an enemy of the current level's kind at an exact position (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, position: tank_core::types::Position) -> hecs::Entity {
        let kind = self
            .current_level
            .and_then(|i| self.levels.get(i))
            .map(|level| level.enemy_kind)
            .unwrap_or_default();
        let order = world_setup::next_order(&mut self.next_spawn_order);
        world_setup::spawn_enemy_at(&mut self.world, kind, position, order)
    }

    /// Spawn a bullet at `origin` flying along `direction` (for testing).
    #[cfg(test)]
    pub fn spawn_test_bullet(
        &mut self,
        origin: tank_core::types::Position,
        direction: glam::DVec3,
    ) -> hecs::Entity {
        let order = world_setup::next_order(&mut self.next_spawn_order);
        world_setup::spawn_bullet(&mut self.world, origin, direction, order)
    }

    /// Remove the player entity (for testing missing-reference handling).
    #[cfg(test)]
    pub fn despawn_player(&mut self) {
        let players: Vec<hecs::Entity> = {
            let mut query = self.world.query::<&Player>();
            query.iter().map(|(entity, _)| entity).collect()
        };
        for entity in players {
            let _ = self.world.despawn(entity);
        }
    }

    /// Get a mutable reference to the ECS world (for test setup).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let phase = self.phase;
        match (&command, phase) {
            (PlayerCommand::OpenLevelSelect, GamePhase::MainMenu) => {
                self.set_phase(GamePhase::LevelSelect);
            }
            (PlayerCommand::SelectLevel { index }, GamePhase::LevelSelect) => {
                if *index < self.levels.len() {
                    self.enter_countdown(*index);
                } else {
                    log::warn!(
                        "level index {index} out of range ({} level(s) available)",
                        self.levels.len()
                    );
                }
            }
            (
                PlayerCommand::ReturnToMenu,
                GamePhase::LevelSelect | GamePhase::Paused | GamePhase::GameOver | GamePhase::LevelWon,
            ) => {
                self.return_to_menu();
            }
            (PlayerCommand::RestartLevel, GamePhase::GameOver) => {
                if let Some(index) = self.current_level {
                    self.enter_countdown(index);
                }
            }
            (PlayerCommand::NextLevel, GamePhase::LevelWon) => {
                let next = self.current_level.map_or(0, |i| i + 1);
                if next < self.levels.len() {
                    self.enter_countdown(next);
                } else {
                    log::info!("final level won");
                    self.events.push(GameEvent::GameComplete);
                    self.return_to_menu();
                }
            }
            (PlayerCommand::Pause, GamePhase::Playing)
            | (PlayerCommand::TogglePause, GamePhase::Playing) => {
                self.set_phase(GamePhase::Paused);
            }
            (PlayerCommand::Resume, GamePhase::Paused)
            | (PlayerCommand::TogglePause, GamePhase::Paused) => {
                self.set_phase(GamePhase::Playing);
            }
            (PlayerCommand::SetMovement { input }, _) => {
                self.held_input = *input;
                for (_entity, (_player, control)) in
                    self.world.query_mut::<(&Player, &mut PlayerControl)>()
                {
                    control.input = *input;
                }
            }
            (PlayerCommand::Shoot { target }, GamePhase::Playing) => {
                let mut found = false;
                for (_entity, (_player, control)) in
                    self.world.query_mut::<(&Player, &mut PlayerControl)>()
                {
                    control.pending_shot = Some(*target);
                    found = true;
                }
                if !found {
                    log::warn!("shoot requested but there is no player");
                }
            }
            (PlayerCommand::SetTimeScale { scale }, _) => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            _ => {
                log::debug!("ignoring {command:?} in phase {phase:?}");
            }
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Tear down any level world and start the countdown for `index`.
    fn enter_countdown(&mut self, index: usize) {
        self.world.clear();
        self.current_level = Some(index);
        self.countdown = Cooldown::new(self.countdown_secs);
        let shown = self.countdown_display();
        self.countdown_shown = Some(shown);
        self.events.push(GameEvent::Countdown {
            remaining_secs: shown,
        });
        self.set_phase(GamePhase::Countdown);
    }

    fn advance_countdown(&mut self) {
        self.countdown.tick(DT);
        if self.countdown.is_ready() {
            self.start_level();
            return;
        }
        let shown = self.countdown_display();
        if self.countdown_shown != Some(shown) {
            self.countdown_shown = Some(shown);
            self.events.push(GameEvent::Countdown {
                remaining_secs: shown,
            });
        }
    }

    /// Whole seconds left on the countdown, rounded up.
    fn countdown_display(&self) -> u32 {
        self.countdown.remaining_secs().ceil() as u32
    }

    /// Build the level world and begin play.
    fn start_level(&mut self) {
        let Some(index) = self.current_level else {
            log::warn!("countdown finished with no level selected");
            self.return_to_menu();
            return;
        };
        let Some(level) = self.levels.get(index) else {
            log::warn!("level index {index} vanished from the catalogue");
            self.return_to_menu();
            return;
        };

        self.world.clear();
        self.time = SimTime::default();
        self.spawner = SpawnerState::default();
        self.score = ScoreState::default();
        self.next_spawn_order = 0;
        self.countdown_shown = None;

        world_setup::spawn_player(&mut self.world, self.held_input);
        systems::spawner::spawn_initial(
            &mut self.world,
            &mut self.spawner,
            level,
            &mut SpawnContext {
                rng: &mut self.rng,
                next_spawn_order: &mut self.next_spawn_order,
                events: &mut self.events,
                score: &mut self.score,
            },
        );

        log::info!("level {index} ({}) started", level.name);
        self.events.push(GameEvent::LevelStarted {
            index,
            name: level.name.clone(),
        });
        self.set_phase(GamePhase::Playing);
    }

    fn return_to_menu(&mut self) {
        self.world.clear();
        self.current_level = None;
        self.countdown_shown = None;
        self.set_phase(GamePhase::MainMenu);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let Some(level) = self.current_level.and_then(|i| self.levels.get(i)) else {
            log::warn!("playing without a level; skipping systems");
            return;
        };

        // 1. Player movement, knockback, shoot cooldown
        systems::player::run(&mut self.world, DT);
        // 2. Pending shot -> bullet
        systems::shooting::run(
            &mut self.world,
            &mut self.next_spawn_order,
            &mut self.events,
            &mut self.score,
        );
        // 3. Enemy and boss spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.spawner,
            level,
            &mut SpawnContext {
                rng: &mut self.rng,
                next_spawn_order: &mut self.next_spawn_order,
                events: &mut self.events,
                score: &mut self.score,
            },
            DT,
        );
        // 4. Enemy chase + contact damage
        systems::enemy_ai::run(
            &mut self.world,
            DT,
            &mut self.events,
            &mut self.score,
            &mut self.despawn_buffer,
        );
        // 5. Bullet flight
        systems::movement::run(&mut self.world, DT);
        // 6. Bullet hits, damage, defeats, expiry
        systems::combat::run(
            &mut self.world,
            DT,
            &mut self.events,
            &mut self.score,
            &mut self.despawn_buffer,
        );
        // 7. Out-of-arena bullets
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Decide whether the tick ended the level. A defeat outranks a win in
    /// the same tick.
    fn evaluate_outcome(&mut self) {
        let player_defeated = self
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::PlayerDefeated));
        if player_defeated {
            self.set_phase(GamePhase::GameOver);
            return;
        }

        let Some(index) = self.current_level else {
            return;
        };
        let Some(level) = self.levels.get(index) else {
            return;
        };

        let outcome = if level.boss.is_some() {
            self.events
                .iter()
                .any(|e| matches!(e, GameEvent::BossDefeated { .. }))
                .then_some(LevelOutcome::BossDefeated)
        } else {
            let enemies_left = {
                let mut query = self.world.query::<&Enemy>();
                query.iter().count()
            };
            (self.spawner.quota_reached(level) && enemies_left == 0)
                .then_some(LevelOutcome::ArenaCleared)
        };

        if let Some(outcome) = outcome {
            systems::cleanup::clear_hostiles(&mut self.world, &mut self.despawn_buffer);
            log::info!("level {index} won ({outcome:?})");
            self.events.push(GameEvent::LevelWon { index, outcome });
            self.set_phase(GamePhase::LevelWon);
        }
    }

    fn level_view(&self) -> Option<LevelView> {
        let index = self.current_level?;
        let level = self.levels.get(index)?;
        Some(LevelView {
            index,
            name: level.name.clone(),
            enemy_kind: level.enemy_kind,
            map: level.map,
        })
    }
}
