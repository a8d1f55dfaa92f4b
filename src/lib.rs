//! # higher-lower
//!
//! Round engine for a higher-or-lower city population game.
//!
//! Two cities are on screen: one with its population shown, one hidden.
//! The player guesses whether the hidden population is higher or lower.
//! A right guess scores a point and the hidden city becomes the next
//! revealed one; a wrong guess ends the round. The best score persists
//! across sessions.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: the crate owns selection, scoring and timing.
//!    Front ends render a `RoundView` and forward guesses.
//!
//! 2. **Deterministic**: pairs come from a seeded `GameRng` and time is a
//!    logical clock the caller advances, so every game is reproducible.
//!
//! 3. **Injected persistence**: the best score goes through a
//!    `ScoreStore`, never ambient global state. Store failures are
//!    logged, not fatal.
//!
//! ## Modules
//!
//! - `core`: Cities, catalog, RNG, configuration, errors
//! - `selection`: Pair drawing from the complement of an exclusion set
//! - `rules`: Guesses, round state, the advancement timer, `RoundEngine`
//! - `store`: Best-score stores and best-effort tracking
//! - `view`: Read-only snapshot for rendering
//! - `session`: Tokio task that drives an engine in real time

pub mod core;
pub mod selection;
pub mod rules;
pub mod store;
pub mod view;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    City, CityId, Catalog,
    GameRng, GameRngState,
    EngineConfig, EngineError,
};

pub use crate::selection::{Pair, select_pair, draw_index};

pub use crate::rules::{
    Guess, GuessOutcome, Advancement,
    RoundEngine, RoundState, RoundStatus,
};

pub use crate::store::{ScoreStore, StoreError, MemoryStore, FileStore, BestScore};

pub use crate::view::{RoundView, CityCard};

pub use crate::session::{Session, SessionHandle, SessionError};
