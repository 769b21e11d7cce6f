use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use tank_app::autopilot::Autopilot;
use tank_app::runner::{self, SessionSummary};
use tank_app::logging;
use tank_sim::engine::SimConfig;
use tank_sim::levels;

/// I am the Tank!!! Arena simulation driven by a scripted player
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed for enemy placement
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Level to start on (index into the catalogue)
    #[arg(short, long, default_value_t = 0)]
    level: usize,

    /// JSON level catalogue to use instead of the built-in levels
    #[arg(long)]
    levels: Option<PathBuf>,

    /// Keep playing the following levels after a win
    #[arg(long)]
    campaign: bool,

    /// Tick limit for headless runs
    #[arg(long, default_value_t = 60 * 60 * 10)]
    max_ticks: u64,

    /// Run on the real-time game loop instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Wall-clock limit in seconds for real-time runs
    #[arg(long, default_value_t = 600)]
    timeout: u64,

    /// Simulation speed multiplier for real-time runs
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// Print the session summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = SimConfig {
        seed: args.seed,
        time_scale: args.time_scale,
        ..Default::default()
    };
    if let Some(path) = &args.levels {
        config.levels = levels::load_levels(path)
            .with_context(|| format!("loading levels from {}", path.display()))?;
    }
    config.validate().context("invalid simulation config")?;
    anyhow::ensure!(
        args.level < config.levels.len(),
        "level {} out of range, catalogue has {}",
        args.level,
        config.levels.len()
    );

    let autopilot = Autopilot::new(args.level, args.campaign);
    let summary = if args.realtime {
        runner::run_realtime(config, autopilot, Duration::from_secs(args.timeout))?
    } else {
        runner::run_headless(config, autopilot, args.max_ticks)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &SessionSummary) {
    println!(
        "seed {}: {:?} after {:.1}s of play",
        summary.seed, summary.final_phase, summary.sim_secs
    );
    for level in &summary.levels {
        let score = &level.score;
        println!(
            "  {} #{} {:?}: {}/{} enemies, {}/{} hits ({:.0}%), {} damage taken",
            level.name,
            level.index,
            level.status,
            score.enemies_defeated,
            score.enemies_spawned,
            score.bullets_hit,
            score.bullets_fired,
            score.accuracy() * 100.0,
            score.damage_taken
        );
    }
    if summary.game_complete {
        println!("all levels complete");
    }
}
