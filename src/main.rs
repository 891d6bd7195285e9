use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use npuzzle::presentation::{NoPlayback, Presenter, TerminalPlayback};
use npuzzle::{solve, Generator, SolveConfig};

/// Solve a random sliding-tile puzzle
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Board side length (2 to 4)
    #[arg(short = 'n', long, default_value_t = 4)]
    size: usize,

    /// Milliseconds between frames during playback
    #[arg(short, long, default_value_t = 25)]
    interval: u64,

    /// Play the solution back in the terminal
    #[arg(short, long)]
    animate: bool,

    /// Seed for the board generator
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many expansions
    #[arg(long)]
    expansion_limit: Option<u64>,

    /// Write the board being expanded to this CSV file
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Expansions between snapshot writes
    #[arg(long, default_value_t = 1000)]
    snapshot_interval: u64,
}

impl From<Args> for SolveConfig {
    fn from(args: Args) -> Self {
        SolveConfig {
            size: args.size,
            playback_interval_ms: args.interval,
            animate: args.animate,
            seed: args.seed,
            expansion_limit: args.expansion_limit,
            snapshot_path: args.snapshot,
            snapshot_interval: args.snapshot_interval,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = SolveConfig::from(Args::parse());
    config.validate().context("Invalid arguments")?;

    let mut generator = Generator::from_seed(config.seed);
    let mut presenter: Box<dyn Presenter> = if config.animate {
        Box::new(TerminalPlayback::stdout(config.playback_interval()))
    } else {
        Box::new(NoPlayback)
    };

    let report = solve(&config, &mut generator, presenter.as_mut()).context("Failed to solve puzzle")?;

    let stats = report.solution.stats;
    info!(
        "expanded {}, discovered {}, duplicates skipped {}, peak frontier {}",
        stats.expanded, stats.pushed, stats.duplicates, stats.peak_frontier
    );

    if !config.animate {
        for (step, dir) in report.solution.moves().iter().enumerate() {
            println!("{:>4}. {}", step + 1, dir);
        }
    }

    println!();
    println!("{} steps in {:.5} secs.", report.steps, report.elapsed_secs);
    Ok(())
}
