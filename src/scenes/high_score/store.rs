//=========================================================================
// Score Store
//=========================================================================
//
// Persistence seam for the high-score table. The scene only ever calls
// `load` once at construction and `save` after each committed entry;
// failures are reported to the caller, which logs them and keeps playing
// with the in-memory table.
//
//=========================================================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== HighScoreEntry ======================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
}

impl HighScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self { name: name.into(), score }
    }
}

//=== Errors ==============================================================

#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("failed to read high scores from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write high scores to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid high score file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialise high scores: {0}")]
    Serialize(#[from] ron::Error),
}

//=== ScoreStore ==========================================================

pub trait ScoreStore: Send {
    /// Reads the persisted table. A store with nothing saved yet returns
    /// an empty list.
    fn load(&mut self) -> Result<Vec<HighScoreEntry>, ScoreStoreError>;

    /// Replaces the persisted table with `entries`.
    fn save(&mut self, entries: &[HighScoreEntry]) -> Result<(), ScoreStoreError>;
}

//=== RonScoreStore =======================================================

/// High-score table kept in a RON file.
#[derive(Debug, Clone)]
pub struct RonScoreStore {
    path: PathBuf,
}

impl RonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for RonScoreStore {
    fn load(&mut self) -> Result<Vec<HighScoreEntry>, ScoreStoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ScoreStoreError::Read { path: self.path.clone(), source })
            }
        };

        ron::from_str(&data).map_err(|source| ScoreStoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, entries: &[HighScoreEntry]) -> Result<(), ScoreStoreError> {
        let data = ron::ser::to_string_pretty(entries, ron::ser::PrettyConfig::default())?;
        fs::write(&self.path, data).map_err(|source| ScoreStoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

//=== MemoryScoreStore ====================================================

#[derive(Debug, Default)]
struct MemoryState {
    entries: Vec<HighScoreEntry>,
    saves: usize,
}

/// In-memory store. Clones share the same table, so a caller can keep a
/// handle after boxing one into the scene.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<HighScoreEntry>) -> Self {
        let store = Self::default();
        store.lock().entries = entries;
        store
    }

    /// Snapshot of the stored table.
    pub fn entries(&self) -> Vec<HighScoreEntry> {
        self.lock().entries.clone()
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> Result<Vec<HighScoreEntry>, ScoreStoreError> {
        Ok(self.lock().entries.clone())
    }

    fn save(&mut self, entries: &[HighScoreEntry]) -> Result<(), ScoreStoreError> {
        let mut state = self.lock();
        state.entries = entries.to_vec();
        state.saves += 1;
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
