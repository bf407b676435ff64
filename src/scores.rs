use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const SCORE_FILE_NAME: &str = "high_score.txt";

/// The single-integer high score file.
#[derive(Clone, Debug)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: next to the executable, else the working directory.
    pub fn default_path() -> PathBuf {
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join(SCORE_FILE_NAME);
            }
        }
        PathBuf::from(SCORE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score. A missing file means no score yet.
    pub fn load(&self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No high score file at {}, starting from 0", self.path.display());
                return Ok(0);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("reading high score from {}", self.path.display()))
            }
        };
        let score = text
            .trim()
            .parse::<u32>()
            .with_context(|| format!("parsing high score in {}", self.path.display()))?;
        Ok(score)
    }

    /// Overwrite the file with `score` as decimal text.
    pub fn save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("writing high score to {}", self.path.display()))?;
        log::info!("Saved high score {} to {}", score, self.path.display());
        Ok(())
    }
}
