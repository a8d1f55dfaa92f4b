//! In-memory score store.

use rustc_hash::FxHashMap;

use super::{Result, ScoreStore, StoreError};

/// Score store backed by a hash map.
///
/// `unavailable()` builds a store whose every call fails, for exercising
/// the engine's best-effort persistence.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, u32>,
    writes: usize,
    unavailable: bool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one value.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: u32) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value);
        store
    }

    /// Create a store that fails every read and write.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of successful `set` calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(StoreError::Unavailable("memory store disabled".to_string()));
        }
        Ok(())
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<u32>> {
        self.check()?;
        Ok(self.values.get(key).copied())
    }

    fn set(&mut self, key: &str, value: u32) -> Result<()> {
        self.check()?;
        self.values.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }
}
