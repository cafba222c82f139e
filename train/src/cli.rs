use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use nim::Piles;
use nim_agent::config::{EPSILON, LEARNING_RATE, MAX_PILE_SIZE, PIT_GAMES, TRAIN_EPISODES};

/// Train a Nim agent by self-play
#[derive(Parser)]
pub struct Args {
    /// Path to an agent to keep training, leave blank for a new agent
    pub model_path: Option<PathBuf>,
    /// Where to save the trained agent
    #[clap(short, long, default_value = "nim_agent.json")]
    pub output: PathBuf,
    /// Number of self-play games
    #[clap(short, long, default_value_t = TRAIN_EPISODES)]
    pub episodes: usize,
    /// Step size of value updates (new agents only)
    #[clap(long, default_value_t = LEARNING_RATE)]
    pub learning_rate: f64,
    /// Chance of a random move during self-play (new agents only)
    #[clap(long, default_value_t = EPSILON)]
    pub epsilon: f64,
    /// Starting piles, comma separated
    #[clap(long, default_value = "1,3,5,7")]
    pub piles: Piles,
    /// Number of training threads, each with its own table
    #[clap(short, long, default_value_t = 1)]
    pub workers: usize,
    /// Seed for reproducible training
    #[clap(long)]
    pub seed: Option<u64>,
    /// Games against a random player after training
    #[clap(long, default_value_t = PIT_GAMES)]
    pub pit_games: usize,
    /// Write logs to this file instead of stderr
    #[clap(long)]
    pub log_file: Option<PathBuf>,
    /// Log every episode
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Reject settings that training cannot work with.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.epsilon),
            "epsilon must be between 0 and 1, got {}",
            self.epsilon
        );
        ensure!(
            self.learning_rate > 0.0 && self.learning_rate <= 1.0,
            "learning rate must be in (0, 1], got {}",
            self.learning_rate
        );
        ensure!(!self.piles.is_terminal(), "starting piles {} are already empty", self.piles);
        ensure!(
            self.piles.iter().all(|count| count <= MAX_PILE_SIZE),
            "piles may hold at most {MAX_PILE_SIZE} objects, got {}",
            self.piles
        );
        Ok(())
    }
}
