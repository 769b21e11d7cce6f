//! Scripted player: navigates the menus, backs away from enemies that get
//! too close and shoots whatever is nearest.

use tank_core::commands::PlayerCommand;
use tank_core::components::MoveInput;
use tank_core::constants::{BULLET_LIFESPAN_SECS, BULLET_SPEED, ENEMY_ATTACK_RANGE};
use tank_core::enums::GamePhase;
use tank_core::state::GameStateSnapshot;
use tank_core::types::Position;

/// Enemies closer than this (ground distance) make the autopilot retreat.
const KITE_DISTANCE: f64 = ENEMY_ATTACK_RANGE + 1.0;

/// Farthest target worth a bullet.
const FIRE_RANGE: f64 = BULLET_SPEED * BULLET_LIFESPAN_SECS;

/// Stateful decision maker fed one snapshot per tick.
#[derive(Debug, Clone)]
pub struct Autopilot {
    start_level: usize,
    /// Continue with the next level after a win instead of stopping.
    campaign: bool,
    movement: MoveInput,
}

impl Autopilot {
    pub fn new(start_level: usize, campaign: bool) -> Self {
        Self {
            start_level,
            campaign,
            movement: MoveInput::default(),
        }
    }

    /// Whether the session this autopilot is playing has reached its end.
    pub fn is_finished(&self, snap: &GameStateSnapshot) -> bool {
        match snap.phase {
            GamePhase::GameOver => true,
            GamePhase::LevelWon => !self.campaign,
            GamePhase::MainMenu => snap
                .events
                .iter()
                .any(|e| matches!(e, tank_core::events::GameEvent::GameComplete)),
            _ => false,
        }
    }

    /// Commands to send in response to `snap`.
    pub fn decide(&mut self, snap: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snap.phase {
            GamePhase::MainMenu if !self.is_finished(snap) => vec![PlayerCommand::OpenLevelSelect],
            GamePhase::LevelSelect => vec![PlayerCommand::SelectLevel {
                index: self.start_level,
            }],
            GamePhase::LevelWon if self.campaign => vec![PlayerCommand::NextLevel],
            GamePhase::Paused => vec![PlayerCommand::Resume],
            GamePhase::Playing => self.fight(snap),
            _ => Vec::new(),
        }
    }

    fn fight(&mut self, snap: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let Some(player) = &snap.player else {
            return Vec::new();
        };
        let me = player.position;
        let mut commands = Vec::new();

        let nearest = snap
            .enemies
            .iter()
            .map(|e| (me.ground_distance_to(&e.position), e.position))
            .min_by(|a, b| a.0.total_cmp(&b.0));

        let movement = match nearest {
            Some((distance, threat)) if distance < KITE_DISTANCE => retreat_from(&me, &threat),
            _ => MoveInput::default(),
        };
        if movement != self.movement {
            self.movement = movement;
            commands.push(PlayerCommand::SetMovement { input: movement });
        }

        if player.can_shoot {
            let target = nearest
                .filter(|(distance, _)| *distance <= FIRE_RANGE)
                .map(|(_, position)| position)
                .or_else(|| snap.boss.as_ref().map(|b| b.position));
            if let Some(target) = target {
                commands.push(PlayerCommand::Shoot { target });
            }
        }

        commands
    }
}

/// Keys that move the tank directly away from `threat`.
fn retreat_from(me: &Position, threat: &Position) -> MoveInput {
    let dx = me.x - threat.x;
    let dz = me.z - threat.z;
    MoveInput {
        forward: dz < 0.0,
        backward: dz > 0.0,
        left: dx < 0.0,
        right: dx > 0.0,
    }
}
