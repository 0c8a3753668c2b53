//! High score persistence
//!
//! The best score is a single decimal integer in a text file. Failures never
//! reach the game: a missing or garbled file reads as 0 and a failed write is
//! logged and forgotten.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default location of the high score file
pub const DEFAULT_HIGH_SCORE_PATH: &str = "assets/userdata/highscore.txt";

/// Errors from reading or writing the high score file
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed high score {0:?}")]
    Parse(String),
}

/// Where the best score is kept between runs
pub trait ScoreStore {
    /// Stored best, or 0 if there is none
    fn load(&mut self) -> u32;
    /// Best-effort write
    fn save(&mut self, value: u32);
}

/// Text-file score store
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_PATH)
    }
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file
    pub fn read(&self) -> Result<u32, StorageError> {
        let text = fs::read_to_string(&self.path)?;
        let line = text.lines().next().unwrap_or("").trim();
        line.parse::<u32>()
            .map_err(|_| StorageError::Parse(line.to_string()))
    }

    /// Write the value, creating parent directories as needed
    pub fn write(&self, value: u32) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, value.to_string())?;
        Ok(())
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> u32 {
        match self.read() {
            Ok(score) => {
                log::info!("Loaded high score {} from {}", score, self.path.display());
                score
            }
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, value: u32) {
        match self.write(value) {
            Ok(()) => log::info!("High score {} saved", value),
            Err(e) => log::warn!("Could not save high score to {}: {}", self.path.display(), e),
        }
    }
}

/// In-memory store that remembers every save (tests and demos)
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub value: Option<u32>,
    pub saves: Vec<u32>,
}

impl MemoryScoreStore {
    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            saves: Vec::new(),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn save(&mut self, value: u32) {
        self.value = Some(value);
        self.saves.push(value);
    }
}
