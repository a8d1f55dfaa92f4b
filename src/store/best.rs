//! Best-effort best-score tracking.

use tracing::{info, warn};

use super::ScoreStore;

/// The best score, backed by a [`ScoreStore`].
///
/// The in-memory value is the source of truth for the session. The store
/// is read once in [`BestScore::load`] and written only by
/// [`BestScore::record`] on a strict improvement. Store failures are
/// logged and otherwise ignored.
#[derive(Debug)]
pub struct BestScore<S> {
    store: S,
    key: String,
    value: u32,
}

impl<S: ScoreStore> BestScore<S> {
    /// Read the persisted best score. Absent or unreadable means 0.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let value = match store.get(&key) {
            Ok(value) => value.unwrap_or(0),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read best score, starting from 0");
                0
            }
        };
        Self { store, key, value }
    }

    /// Current best score.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Offer a finished round's score.
    ///
    /// Returns true if it beat the previous best. Only then is the store
    /// written; ties leave it untouched.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }

        info!(previous = self.value, score, "New best score");
        self.value = score;
        if let Err(e) = self.store.set(&self.key, score) {
            warn!(key = %self.key, score, error = %e, "Failed to persist best score");
        }
        true
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
