//! Train the card-game Q-learning agent and print the learned policy.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use turnwise::cards::{CardAction, SevenAndHalfEnv};
use turnwise::config::AppConfig;
use turnwise::rl::{evaluate_greedy, QLearningAgent, QState, Trainer, TrainingSchedule};

#[derive(Parser, Debug)]
#[command(name = "train", about = "Train the card-game Q-learning agent")]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the number of training episodes
    #[arg(long)]
    episodes: Option<usize>,

    /// Seed for the environment and agent RNGs (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the learned Q-table as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Greedy evaluation games to play after training
    #[arg(long, default_value_t = 5_000)]
    eval_games: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    if let Some(episodes) = args.episodes {
        config.qlearning.episodes = episodes;
    }
    config.validate().context("validating config overrides")?;
    let q = &config.qlearning;

    let (env, agent) = match args.seed {
        Some(seed) => (
            SevenAndHalfEnv::with_seed(seed),
            QLearningAgent::with_seed(q.alpha, q.gamma, q.epsilon_start, seed.wrapping_add(1)),
        ),
        None => (
            SevenAndHalfEnv::new(),
            QLearningAgent::new(q.alpha, q.gamma, q.epsilon_start),
        ),
    };

    let schedule = TrainingSchedule {
        episodes: q.episodes,
        history_interval: q.history_interval,
        epsilon_decay: q.epsilon_decay,
        epsilon_floor: q.epsilon_floor,
    };

    println!(
        "Training for {} episodes (alpha {}, gamma {}, epsilon {} -> {})",
        q.episodes, q.alpha, q.gamma, q.epsilon_start, q.epsilon_floor
    );
    let mut trainer = Trainer::new(env, agent, schedule).verbose();
    let report = trainer.train();
    let table = trainer.into_agent().into_table();

    println!();
    println!(
        "Done: {} episodes, {} states visited, final epsilon {:.4}",
        report.episodes, report.states_visited, report.final_epsilon
    );
    if let Some(last) = report.win_rate_history.last() {
        println!("Win rate over the final interval: {:.3}", last);
    }

    let mut eval_env = match args.seed {
        Some(seed) => SevenAndHalfEnv::with_seed(seed.wrapping_add(2)),
        None => SevenAndHalfEnv::new(),
    };
    let win_rate = evaluate_greedy(&mut eval_env, &table, args.eval_games);
    println!(
        "Greedy win rate over {} evaluation games: {:.3}",
        args.eval_games, win_rate
    );

    print_policy_grid(&table);

    if let Some(path) = args.output {
        let file = File::create(&path)
            .with_context(|| format!("creating Q-table output file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &table).context("serializing Q-table")?;
        println!("Q-table written to {}", path.display());
    }

    Ok(())
}

/// Print the stand/draw decision for each (player score, dealer card) cell.
fn print_policy_grid(table: &turnwise::rl::QTable) {
    // Dealer columns: half-point face bucket, then ranks 1 through 7
    let dealer_cards = [0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

    println!();
    println!("Learned policy (S = stand, D = draw):");
    print!("player \\ dealer |");
    for dealer in dealer_cards {
        print!(" {dealer:>4}");
    }
    println!();

    // Player scores in half-point steps up to the bust threshold
    for half_points in 1..=15u8 {
        let player = f64::from(half_points) / 2.0;
        print!("{player:>15} |");
        for dealer in dealer_cards {
            let state = QState::from_scores(player, dealer);
            let mark = match table.greedy_action(state) {
                CardAction::Stand => 'S',
                CardAction::Draw => 'D',
            };
            print!(" {mark:>4}");
        }
        println!();
    }
}
