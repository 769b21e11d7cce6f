//! Spawn pacing: how long to wait before the next enemy appears.

use tank_core::config::SpawnPacing;

/// Interval until the next spawn, given total play time and the number of
/// enemies currently alive.
///
/// Before the ramp ends the interval is interpolated between the maximum
/// and the minimum; both a growing crowd and elapsed time pull it toward the
/// minimum. Once `ramp_secs` have passed the interval is pinned at the
/// minimum regardless of the crowd.
pub fn spawn_interval(total_secs: f64, active_enemies: u32, pacing: &SpawnPacing) -> f64 {
    let time_factor = (total_secs / pacing.ramp_secs).min(1.0);
    if time_factor >= 1.0 {
        return pacing.min_interval_secs;
    }

    let limit = pacing.crowd_limit as f64;
    let crowd_factor = ((limit - active_enemies as f64) / limit).max(0.0);
    lerp(
        pacing.min_interval_secs,
        pacing.max_interval_secs,
        crowd_factor * (1.0 - time_factor),
    )
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
