use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::settings::{Difficulty, Settings};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Shoot down the alien fleet before it lands.
#[derive(Debug, Parser)]
#[command(name = "alien_invasion", version, about)]
pub struct Config {
    /// High score file (default: high_score.txt next to the executable)
    #[arg(long)]
    pub score_file: Option<PathBuf>,

    /// Bullet width preset for the first game
    #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
    pub difficulty: DifficultyArg,

    /// Ships per game
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pub ships: u32,

    /// Milliseconds per frame
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Ring the terminal bell on hits
    #[arg(long)]
    pub bell: bool,
}

impl Config {
    /// Fold command-line choices into the settings.
    pub fn apply(&self, settings: &mut Settings) {
        settings.ship_limit = self.ships;
        settings.tick_rate = Duration::from_millis(self.tick_ms);
        settings.bullet_width = settings.bullet_width_for(self.difficulty.into());
    }
}
