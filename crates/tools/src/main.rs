use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dungeon::{LevelGenerator, seeded_rng};
use tools::config_file::resolve_config;
use tools::format_fingerprint;
use tools::preview::{render_level, summary_lines};
use tools::seed::resolve_seed;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the level random source; derived from the clock when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// TOML file overriding generator settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of consecutive levels drawn from the same random source
    #[arg(short, long, default_value_t = 1)]
    levels: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref())?;
    let generator = LevelGenerator::new(config)?;
    let seed = resolve_seed(args.seed);
    let mut rng = seeded_rng(seed.value());

    println!("Seed: {} ({})", seed.value(), seed.label());
    for level_number in 1..=args.levels {
        let level = generator
            .generate(&mut rng)
            .with_context(|| format!("Level {level_number} could not be generated"))?;
        println!();
        println!("Level {level_number} fingerprint {}", format_fingerprint(level.fingerprint()));
        for line in summary_lines(&level) {
            println!("{line}");
        }
        print!("{}", render_level(&level));
    }

    Ok(())
}
