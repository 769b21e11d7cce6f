//! Per-level score tally kept by the engine, NOT in the ECS world.

use tank_core::state::ScoreView;

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub enemies_defeated: u32,
    pub enemies_spawned: u32,
    pub bullets_fired: u32,
    pub bullets_hit: u32,
    pub damage_taken: u32,
}

impl ScoreState {
    pub fn view(&self, level_time_secs: f64) -> ScoreView {
        ScoreView {
            enemies_defeated: self.enemies_defeated,
            enemies_spawned: self.enemies_spawned,
            bullets_fired: self.bullets_fired,
            bullets_hit: self.bullets_hit,
            damage_taken: self.damage_taken,
            level_time_secs,
        }
    }
}
