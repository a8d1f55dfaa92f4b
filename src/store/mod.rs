//! Best-score persistence.
//!
//! The engine reads the best score once at start-up and writes it only
//! when a lost round beats it. Storage sits behind [`ScoreStore`] so the
//! engine never touches ambient global state:
//!
//! - [`MemoryStore`]: in-process map, for tests and embedding
//! - [`FileStore`]: JSON object on disk, one entry per key
//!
//! Persistence is best-effort. [`BestScore`] wraps a store and keeps the
//! in-memory value authoritative when reads or writes fail.

mod best;
mod file;
mod memory;

pub use best::BestScore;
pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Store failures. Never fatal to a game.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store data is malformed: {0}")]
    Format(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Key-value persistence for the best score.
pub trait ScoreStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<u32>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: u32) -> Result<()>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<u32>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: u32) -> Result<()> {
        (**self).set(key, value)
    }
}
