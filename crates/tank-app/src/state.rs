//! Application state shared between the controlling thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, bail, Context};

use tank_core::commands::PlayerCommand;
use tank_core::state::GameStateSnapshot;
use tank_sim::engine::SimConfig;

use crate::game_loop;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle on a running (or not yet started) game loop.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state can be shared across threads
/// - `Arc<Mutex<...>>` holds the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Game loop thread, joined on shutdown.
    loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the game loop thread has been started and not shut down.
    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }

    /// Start the simulation. Spawns the game loop thread if not already running.
    pub fn start_simulation(&self, config: SimConfig) -> anyhow::Result<()> {
        let mut tx_lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel lock poisoned: {e}"))?;
        if tx_lock.is_some() {
            bail!("simulation already running");
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())
            .context("failed to spawn game loop thread")?;
        *tx_lock = Some(cmd_tx);
        if let Ok(mut slot) = self.loop_handle.lock() {
            *slot = Some(handle);
        }
        Ok(())
    }

    /// Send a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> anyhow::Result<()> {
        let tx_lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel lock poisoned: {e}"))?;

        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .context("game loop is no longer receiving commands"),
            None => bail!("simulation not started"),
        }
    }

    /// Get the latest snapshot (for polling / initial state).
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Take the latest snapshot, leaving nothing until the next tick publishes.
    pub fn take_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|mut lock| lock.take())
    }

    /// Stop the game loop and wait for its thread to exit.
    pub fn shutdown(&self) {
        let tx = self.command_tx.lock().ok().and_then(|mut tx| tx.take());
        if let Some(tx) = tx {
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        let handle = self.loop_handle.lock().ok().and_then(|mut h| h.take());
        if let Some(handle) = handle {
            if handle.join().is_err() {
                log::warn!("game loop thread panicked");
            }
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.shutdown();
    }
}
