//! Time the minimax search at increasing depths from a fixed opening.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;

use turnwise::ai::SearchPolicy;
use turnwise::config::AppConfig;
use turnwise::game::GameState;

#[derive(Parser, Debug)]
#[command(name = "bench", about = "Benchmark the minimax search")]
struct Args {
    /// Path to the TOML config file (board dimensions)
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Deepest search to time (defaults to the configured search depth)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Per-search deadline in milliseconds (defaults to the configured one)
    #[arg(long)]
    deadline_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    let max_depth = args.max_depth.unwrap_or(config.search.depth.max(1));
    let deadline_ms = args.deadline_ms.or(config.search.deadline_ms);

    // Two stacked center pieces, a realistic early-game position
    let mut state = GameState::with_dims(config.board.rows, config.board.cols);
    let center = state.board().center_col();
    state = state.apply_move(center)?;
    state = state.apply_move(center)?;

    println!(
        "Board {}x{}, branching factor {}",
        config.board.rows,
        config.board.cols,
        config.board.cols
    );
    println!("{:>5} {:>10} {:>12} {:>6} {:>10}", "depth", "time", "positions", "move", "score");

    for depth in 1..=max_depth {
        let mut policy = SearchPolicy::new(depth);
        if let Some(ms) = deadline_ms {
            policy = policy.with_deadline(Duration::from_millis(ms));
        }

        let start = Instant::now();
        let result = policy.search(&state)?;
        let elapsed = start.elapsed();

        // Upper bound on the tree size, for scale
        let positions = (config.board.cols as u64).pow(depth as u32);
        println!(
            "{:>5} {:>9.3?} {:>12} {:>6} {:>10.1}",
            depth, elapsed, positions, result.column, result.score
        );
    }

    Ok(())
}
