//! Command-line interface for the MiMiu gomoku app.

use std::path::PathBuf;

use clap::Parser;
use gomoku::{AppConfig, Difficulty};

/// Gomoku against MiMiu, a companion who plays White
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Play gomoku against MiMiu", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Difficulty for new games
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Pause before MiMiu moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// User id for saved games
    #[arg(short, long)]
    pub user: Option<String>,

    /// Directory for saved games
    #[arg(long, conflicts_with = "no_save")]
    pub save_dir: Option<PathBuf>,

    /// Seed MiMiu's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep state in memory only, even if the config names a save directory
    #[arg(long)]
    pub no_save: bool,
}

impl Cli {
    /// Layer the command-line values over a loaded config
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(delay) = self.delay_ms {
            config.opponent_delay_ms = delay;
        }
        if let Some(user) = &self.user {
            config.user_id = user.clone();
        }
        if let Some(dir) = &self.save_dir {
            config.save_dir = Some(dir.clone());
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_save {
            config.save_dir = None;
        }
        config
    }
}
