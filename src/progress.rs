#![warn(clippy::all, clippy::pedantic)]

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Fallback progress file path
const PROGRESS_FILE_PATH: &str = "progress.toml";

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("progress file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("progress file is malformed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("progress could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Receives final scores when a session ends.
pub trait ProgressTracker: Send + Sync {
    fn record_score(&mut self, game_id: &str, score: u32) -> Result<(), ProgressError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    pub last_score: u32,
    pub best_score: u32,
    pub plays: u32,
}

impl GameProgress {
    pub fn record(&mut self, score: u32) {
        self.last_score = score;
        self.best_score = self.best_score.max(score);
        self.plays += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressBook {
    #[serde(default)]
    pub games: BTreeMap<String, GameProgress>,
}

/// Keeps per-game progress in a TOML file.
#[derive(Debug, Clone)]
pub struct FileProgress {
    path: PathBuf,
}

impl FileProgress {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `$ORDERING_PROGRESS`, then the platform data directory.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(default_progress_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<ProgressBook, ProgressError> {
        if !self.path.exists() {
            return Ok(ProgressBook::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn save(&self, book: &ProgressBook) -> Result<(), ProgressError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, toml::to_string_pretty(book)?)?;
        Ok(())
    }
}

impl ProgressTracker for FileProgress {
    fn record_score(&mut self, game_id: &str, score: u32) -> Result<(), ProgressError> {
        let mut book = self.load()?;
        book.games.entry(game_id.to_string()).or_default().record(score);
        self.save(&book)?;
        info!(
            "Recorded score {score} for {game_id} in {}",
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory tracker. Clones share the same record list.
#[derive(Debug, Clone, Default)]
pub struct MemoryProgress {
    records: Arc<Mutex<Vec<(String, u32)>>>,
}

impl MemoryProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> Vec<(String, u32)> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ProgressTracker for MemoryProgress {
    fn record_score(&mut self, game_id: &str, score: u32) -> Result<(), ProgressError> {
        debug!("Recording score {score} for {game_id} in memory");
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((game_id.to_string(), score));
        Ok(())
    }
}

fn default_progress_path() -> PathBuf {
    if let Ok(path) = std::env::var("ORDERING_PROGRESS") {
        return PathBuf::from(path);
    }

    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("numberorder").join("progress.toml")
    } else {
        PathBuf::from(PROGRESS_FILE_PATH)
    }
}
