use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use dungeon::mapgen::invariants::check_invariants;
use dungeon::{LevelGenerator, LevelRng, MoveInput, RunSession, SessionConfig, seeded_rng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tools::config_file::resolve_config;
use tools::seed::level_seed;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Independent runs, each with its own derived seed
    #[arg(short, long, default_value_t = 200)]
    runs: u64,
    /// Random-walk steps per run
    #[arg(short, long, default_value_t = 500)]
    ticks: u32,
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, Serialize)]
struct FuzzSummary {
    runs: u64,
    levels_checked: u64,
    levels_cleared: u64,
    collectibles_taken: u64,
    blocked_moves: u64,
    min_rooms: usize,
    max_rooms: usize,
}

impl FuzzSummary {
    fn record_rooms(&mut self, rooms: usize) {
        self.levels_checked += 1;
        self.min_rooms = if self.levels_checked == 1 { rooms } else { self.min_rooms.min(rooms) };
        self.max_rooms = self.max_rooms.max(rooms);
    }
}

const INPUTS: [MoveInput; 9] = [
    MoveInput { left: false, right: false, up: false, down: false },
    MoveInput { left: true, right: false, up: false, down: false },
    MoveInput { left: false, right: true, up: false, down: false },
    MoveInput { left: false, right: false, up: true, down: false },
    MoveInput { left: false, right: false, up: false, down: true },
    MoveInput { left: true, right: false, up: true, down: false },
    MoveInput { left: true, right: false, up: false, down: true },
    MoveInput { left: false, right: true, up: true, down: false },
    MoveInput { left: false, right: true, up: false, down: true },
];

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.choose_index(slice.len())]
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = resolve_config(args.config.as_deref())?;
    let separation = config.room_separation;
    let generator = LevelGenerator::new(config)?;

    if !args.json {
        println!(
            "Starting fuzz harness on base seed {} for {} runs of {} steps...",
            args.seed, args.runs, args.ticks
        );
    }

    let mut summary = FuzzSummary::default();
    for run in 0..args.runs {
        let run_seed = level_seed(args.seed, run);
        let mut level_rng = seeded_rng(run_seed);
        let mut input_rng = seeded_rng(!run_seed);

        let mut session =
            RunSession::start(generator.clone(), SessionConfig::default(), &mut level_rng)
                .with_context(|| format!("run {run} (seed {run_seed}) failed to generate"))?;
        check_invariants(session.level().layout(), separation)
            .with_context(|| format!("run {run} (seed {run_seed}) level 1"))?;
        summary.record_rooms(session.level().layout().rooms.len());

        for tick in 0..args.ticks {
            let report = session
                .step(choose(&mut input_rng, &INPUTS), &mut level_rng)
                .with_context(|| format!("run {run} (seed {run_seed}) failed at tick {tick}"))?;
            summary.collectibles_taken += report.collected as u64;
            summary.blocked_moves += u64::from(report.blocked);

            if report.advanced_level {
                summary.levels_cleared += 1;
                check_invariants(session.level().layout(), separation).with_context(|| {
                    format!("run {run} (seed {run_seed}) level {}", session.level_index())
                })?;
                summary.record_rooms(session.level().layout().rooms.len());
            }

            if session.level().obstacles().intersects_wall(&session.unit().rect()) {
                log::warn!("unit overlaps a wall after tick {tick} of run {run}");
                bail!(
                    "Invariant failed: unit inside wall at {:?} (run {run}, seed {run_seed}, tick {tick})",
                    session.unit().position()
                );
            }
        }
        log::debug!(
            "run {run} (seed {run_seed}) finished on level {} with score {}",
            session.level_index(),
            session.score()
        );
        summary.runs += 1;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Fuzzing completed successfully.");
        println!("{summary:#?}");
    }
    Ok(())
}
