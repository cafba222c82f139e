use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use nim::Piles;
use nim_agent::config::{MAX_PILE_SIZE, TRAIN_EPISODES};

/// Play Nim against a trained agent
#[derive(Parser)]
pub struct Args {
    /// Path to the agent, trained and saved there if missing
    #[clap(default_value = "nim_agent.json")]
    pub model_path: PathBuf,
    /// Let the agent make the first move
    #[clap(short, long)]
    pub ai_first: bool,
    /// Starting piles, comma separated
    #[clap(long, default_value = "1,3,5,7")]
    pub piles: Piles,
    /// Self-play games to train a missing agent, 0 plays untrained
    #[clap(long, default_value_t = TRAIN_EPISODES)]
    pub train_episodes: usize,
    /// Write logs to this file instead of stderr
    #[clap(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.piles.is_terminal(), "starting piles {} are already empty", self.piles);
        ensure!(
            self.piles.iter().all(|count| count <= MAX_PILE_SIZE),
            "piles may hold at most {MAX_PILE_SIZE} objects, got {}",
            self.piles
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(args: &[&str]) -> Result<()> {
        Args::try_parse_from(args)?.validate()
    }

    #[test]
    fn empty_piles_are_rejected_before_training() {
        assert!(check(&["play"]).is_ok());
        let err = check(&["play", "--piles", "0,0"]).unwrap_err();
        assert_eq!(err.to_string(), "starting piles 0,0 are already empty");
    }

    #[test]
    fn pile_size_is_capped() {
        assert!(check(&["play", "--piles", "3,1000"]).is_ok());
        assert!(check(&["play", "--piles", "4294967295"]).is_err());
    }
}
