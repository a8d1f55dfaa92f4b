//! Round state.

use serde::{Deserialize, Serialize};

use crate::selection::Pair;

/// Where the round is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Waiting for a guess.
    Playing,
    /// A guess was made; its result is on screen until the delay elapses.
    Resolving,
    /// A wrong guess ended the round. Only `restart` leaves this state.
    Lost,
}

/// Everything the engine tracks about the current round.
///
/// Only `RoundEngine` mutates this. Callers get `&RoundState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Cities on screen.
    pub pair: Pair,

    /// Correct guesses this round.
    pub score: u32,

    /// Best score across sessions.
    pub best_score: u32,

    pub status: RoundStatus,

    /// Result of the last guess. `None` until the first guess of a round.
    pub last_guess_correct: Option<bool>,

    /// Bumped on every accepted guess and every restart. A timer fire only
    /// applies if it carries the current generation.
    pub generation: u64,
}

impl RoundState {
    /// Fresh round on `pair`.
    #[must_use]
    pub fn new(pair: Pair, best_score: u32) -> Self {
        Self {
            pair,
            score: 0,
            best_score,
            status: RoundStatus::Playing,
            last_guess_correct: None,
            generation: 0,
        }
    }

    /// Guesses are only accepted while playing.
    #[must_use]
    pub fn accepts_guess(&self) -> bool {
        self.status == RoundStatus::Playing
    }

    /// Once a guess is in, the hidden population is no longer secret.
    #[must_use]
    pub fn hidden_revealed(&self) -> bool {
        self.status != RoundStatus::Playing
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.status == RoundStatus::Lost
    }
}
