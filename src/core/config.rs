//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Default delay between a guess and the advancement step.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1200;

/// Default store key for the persisted best score.
pub const DEFAULT_BEST_SCORE_KEY: &str = "higherOrLowerHighScore";

/// Round engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for pair selection. Same seed, same pairs.
    pub seed: u64,

    /// How long a resolved guess stays on screen before the round
    /// advances or ends, in milliseconds.
    pub reveal_delay_ms: u64,

    /// Key the best score is stored under.
    pub best_score_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            best_score_key: DEFAULT_BEST_SCORE_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Use a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a custom reveal delay.
    #[must_use]
    pub fn with_reveal_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reveal_delay_ms = delay_ms;
        self
    }

    /// Store the best score under a different key.
    #[must_use]
    pub fn with_best_score_key(mut self, key: impl Into<String>) -> Self {
        self.best_score_key = key.into();
        self
    }
}
