//! The round engine.
//!
//! `RoundEngine` owns the catalog, the RNG, the best score and the round
//! state, and is the only thing that mutates them. Callers drive it with
//! three operations:
//!
//! - `submit_guess`: evaluate a guess and schedule the advancement
//! - `tick`: report the current time; applies the advancement once due
//! - `restart`: start a new round, cancelling anything pending
//!
//! ## Example
//!
//! ```
//! use higher_lower::core::{Catalog, City, EngineConfig};
//! use higher_lower::rules::{Guess, GuessOutcome, RoundEngine, RoundStatus};
//! use higher_lower::store::MemoryStore;
//!
//! let catalog = Catalog::new(vec![
//!     City::new("Cairo", "Egypt", 20_076_000),
//!     City::new("Lima", "Peru", 10_391_000),
//! ]).unwrap();
//!
//! let mut engine = RoundEngine::initialize(catalog, MemoryStore::new(), EngineConfig::default()).unwrap();
//!
//! let outcome = engine.submit_guess(Guess::Higher);
//! assert!(matches!(outcome, GuessOutcome::Accepted { due_at_ms: 1200, .. }));
//! assert_eq!(engine.state().status, RoundStatus::Resolving);
//!
//! // Nothing happens until the reveal delay has passed.
//! assert!(engine.tick(1199).unwrap().is_none());
//! assert!(engine.tick(1200).unwrap().is_some());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Catalog, City, CityId, EngineConfig, EngineError, GameRng, GameRngState, Result};
use crate::selection::{draw_index, select_pair, Pair};
use crate::store::{BestScore, ScoreStore};
use crate::view::RoundView;

use super::guess::Guess;
use super::state::{RoundState, RoundStatus};
use super::timer::AdvanceTimer;

/// What `submit_guess` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The round was not `Playing`; nothing changed.
    Ignored,

    /// The guess was evaluated and an advancement scheduled.
    Accepted {
        correct: bool,
        generation: u64,
        due_at_ms: u64,
    },
}

impl GuessOutcome {
    /// `Some(correct)` for an accepted guess.
    #[must_use]
    pub fn correct(&self) -> Option<bool> {
        match self {
            GuessOutcome::Accepted { correct, .. } => Some(*correct),
            GuessOutcome::Ignored => None,
        }
    }
}

/// Result of an advancement step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advancement {
    /// Correct guess: the hidden city is now revealed and a new one drawn.
    Advanced { pair: Pair, score: u32 },

    /// Wrong guess: the round is over.
    Lost { score: u32, new_best: bool },
}

/// Higher-or-lower round engine.
///
/// Generic over the best-score store so tests can inject a `MemoryStore`.
#[derive(Debug)]
pub struct RoundEngine<S> {
    config: EngineConfig,
    catalog: Catalog,
    rng: GameRng,
    best: BestScore<S>,
    state: RoundState,
    timer: AdvanceTimer,
}

impl<S: ScoreStore> RoundEngine<S> {
    /// Start a session: read the best score and draw the first pair.
    pub fn initialize(catalog: Catalog, store: S, config: EngineConfig) -> Result<Self> {
        if catalog.len() < Catalog::MIN_LEN {
            return Err(EngineError::InvalidCatalog { len: catalog.len() });
        }

        let best = BestScore::load(store, config.best_score_key.clone());
        let mut rng = GameRng::new(config.seed);
        let pair = select_pair(catalog.len(), &[], &mut rng)?;

        info!(cities = catalog.len(), best_score = best.value(), pair = %pair, "Session started");

        Ok(Self {
            state: RoundState::new(pair, best.value()),
            config,
            catalog,
            rng,
            best,
            timer: AdvanceTimer::new(),
        })
    }

    /// Start a session from raw city records.
    ///
    /// Fails with `InvalidCatalog` for fewer than two cities.
    pub fn from_cities(cities: Vec<City>, store: S, config: EngineConfig) -> Result<Self> {
        Self::initialize(Catalog::new(cities)?, store, config)
    }

    // === Operations ===

    /// Guess whether the hidden population is higher or lower.
    ///
    /// Ignored unless the round is `Playing`. An accepted guess moves the
    /// round to `Resolving` and schedules one advancement `reveal_delay_ms`
    /// after the engine's current time.
    pub fn submit_guess(&mut self, guess: Guess) -> GuessOutcome {
        if !self.state.accepts_guess() {
            debug!(%guess, status = ?self.state.status, "Ignoring guess");
            return GuessOutcome::Ignored;
        }

        let revealed = self.catalog[self.state.pair.revealed].population;
        let hidden = self.catalog[self.state.pair.hidden].population;
        let correct = guess.evaluate(revealed, hidden);

        self.state.status = RoundStatus::Resolving;
        self.state.last_guess_correct = Some(correct);
        self.state.generation += 1;
        let due_at_ms = self.timer.schedule(self.state.generation, self.config.reveal_delay_ms);

        debug!(%guess, revealed, hidden, correct, due_at_ms, "Guess accepted");

        GuessOutcome::Accepted {
            correct,
            generation: self.state.generation,
            due_at_ms,
        }
    }

    /// Report the current time.
    ///
    /// Runs the advancement step if its delay has elapsed. A fire left over
    /// from before a restart is discarded. On error the state is unchanged
    /// and the advancement stays pending, so the next `tick` retries it.
    pub fn tick(&mut self, now_ms: u64) -> Result<Option<Advancement>> {
        let Some(fired) = self.timer.advance_to(now_ms) else {
            return Ok(None);
        };

        if fired.generation != self.state.generation || self.state.status != RoundStatus::Resolving {
            debug!(generation = fired.generation, current = self.state.generation, "Discarding stale advancement");
            return Ok(None);
        }

        match self.advance() {
            Ok(advancement) => Ok(Some(advancement)),
            Err(e) => {
                self.timer.rearm(fired);
                Err(e)
            }
        }
    }

    /// Start a new round on a fresh pair. Safe from any status.
    ///
    /// Score resets to 0; the best score is kept. Any pending advancement
    /// is cancelled.
    pub fn restart(&mut self) -> Result<()> {
        let pair = select_pair(self.catalog.len(), &[], &mut self.rng)?;

        if let Some(cancelled) = self.timer.cancel() {
            debug!(generation = cancelled.generation, "Cancelled pending advancement");
        }

        let generation = self.state.generation + 1;
        self.state = RoundState {
            generation,
            ..RoundState::new(pair, self.best.value())
        };

        info!(pair = %pair, best_score = self.state.best_score, "Round restarted");
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView::new(&self.state, &self.catalog)
    }

    /// Engine's logical time, as last reported through `tick`.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.timer.now_ms()
    }

    /// When the pending advancement fires, if one is pending.
    #[must_use]
    pub fn pending_due_at(&self) -> Option<u64> {
        self.timer.pending().map(|p| p.due_at_ms)
    }

    /// The best-score store.
    #[must_use]
    pub fn store(&self) -> &S {
        self.best.store()
    }

    /// RNG position, for reproducing a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Advancement ===

    fn advance(&mut self) -> Result<Advancement> {
        if self.state.last_guess_correct != Some(true) {
            let score = self.state.score;
            let new_best = self.best.record(score);
            self.state.best_score = self.best.value();
            self.state.status = RoundStatus::Lost;

            info!(score, best_score = self.state.best_score, new_best, "Round lost");
            return Ok(Advancement::Lost { score, new_best });
        }

        let revealed = self.state.pair.hidden;
        let hidden = self.draw_hidden(revealed)?;
        let pair = Pair::new(revealed, hidden);

        self.state.pair = pair;
        self.state.score += 1;
        self.state.status = RoundStatus::Playing;

        debug!(pair = %pair, score = self.state.score, "Round advanced");
        Ok(Advancement::Advanced {
            pair,
            score: self.state.score,
        })
    }

    /// Draw the next hidden city, never the one being revealed.
    ///
    /// Uses the pair's second slot. A two-city catalog cannot fill both
    /// slots with one exclusion, so that case falls back to a single draw.
    fn draw_hidden(&mut self, revealed: CityId) -> Result<CityId> {
        let len = self.catalog.len();
        match select_pair(len, &[revealed], &mut self.rng) {
            Ok(pair) => Ok(pair.hidden),
            Err(EngineError::ExhaustedPool { .. }) => {
                debug!(catalog_len = len, %revealed, "Pair pool exhausted, drawing single city");
                draw_index(len, &[revealed], &mut self.rng)
            }
            Err(e) => Err(e),
        }
    }
}
