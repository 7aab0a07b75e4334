//! Headless coinrun runner.
//!
//! Builds a level with a floor, a player, wandering enemies and scattered
//! coins, then steps it with a scripted input pattern and logs the outcome.
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use coinrun::{
    init_logging, Direction, GameConfig, ModelUpdate, MovementPattern, ObjectKind, Simulation,
    DELTA_TIME,
};
use glam::Vec3;
use log::{debug, info};

/// Frames each scripted direction is held for.
const SCRIPT_HOLD: usize = 60;

/// Collect the coins before hunger gets you
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
    /// JSON file overriding the built-in constants
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,
    /// Seconds per frame
    #[arg(long, default_value_t = DELTA_TIME)]
    delta: f32,
    /// Seed for placement and wandering
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Number of wandering enemies
    #[arg(long, default_value_t = 3)]
    enemies: usize,
    /// Number of coins
    #[arg(long, default_value_t = 5)]
    coins: usize,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    GameConfig::load(path).with_context(|| format!("loading {}", path.display()))
}

fn build_level(config: GameConfig, args: &Args) -> Simulation {
    let mut sim = Simulation::new(config, args.seed);
    let mut placements: Vec<ModelUpdate> = Vec::new();

    sim.spawn_floor(Vec3::new(0.0, -6.0, 0.0), Vec3::new(20.0, 0.5, 20.0));
    sim.spawn(ObjectKind::Player, Vec3::splat(0.5), Vec3::splat(-0.5));
    for _ in 0..args.enemies {
        let enemy = sim.spawn(ObjectKind::Enemy, Vec3::splat(0.4), Vec3::splat(-0.4));
        sim.set_movement(enemy, MovementPattern::Wander);
        sim.place_randomly(enemy, &mut placements);
    }
    for _ in 0..args.coins {
        let coin = sim.spawn(ObjectKind::Coin, Vec3::splat(0.25), Vec3::splat(-0.25));
        sim.scale_object(coin, Vec3::splat(0.5));
        sim.place_randomly(coin, &mut placements);
    }
    debug!("initial placements: {placements:?}");
    sim
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);
    ensure!(args.delta > 0.0, "--delta must be positive");

    let config = load_config(args.config.as_ref())?;
    let mut sim = build_level(config, &args);
    info!(
        "simulating {} frames with {} enemies and {} coins",
        args.frames, args.enemies, args.coins
    );

    let script = Direction::ALL
        .into_iter()
        .flat_map(|direction| std::iter::repeat(direction).take(SCRIPT_HOLD))
        .cycle();
    let mut updates: Vec<ModelUpdate> = Vec::new();
    let mut collisions = 0;
    for direction in script.take(usize::try_from(args.frames)?) {
        let report = sim.step(args.delta, &[direction], &mut updates);
        collisions += report.collisions;
        updates.clear();
        if sim.state().is_over() {
            info!("game over at frame {}", report.frame);
            break;
        }
    }

    let state = sim.state();
    info!(
        "finished after {} frames: score {}, lives {}, hunger {:.3}, collisions {collisions}",
        sim.frame(),
        state.score,
        state.lives,
        state.hunger
    );
    Ok(())
}
