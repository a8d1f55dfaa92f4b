//! Player guesses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction the player thinks the hidden population goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Guess {
    Higher,
    Lower,
}

impl Guess {
    /// Is this guess right for the given populations?
    ///
    /// Comparison is strict: equal populations are wrong both ways.
    #[must_use]
    pub fn evaluate(self, revealed: u64, hidden: u64) -> bool {
        match self {
            Guess::Higher => hidden > revealed,
            Guess::Lower => hidden < revealed,
        }
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guess::Higher => write!(f, "higher"),
            Guess::Lower => write!(f, "lower"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown guess {0:?}, expected \"higher\" or \"lower\"")]
pub struct ParseGuessError(pub String);

impl FromStr for Guess {
    type Err = ParseGuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "higher" => Ok(Guess::Higher),
            "lower" => Ok(Guess::Lower),
            _ => Err(ParseGuessError(s.to_string())),
        }
    }
}
