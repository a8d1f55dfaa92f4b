//! The round engine: guesses, timing and scoring.
//!
//! - `guess`: `Guess` and the strict comparison rule
//! - `state`: `RoundState` and `RoundStatus`
//! - `timer`: the cancellable one-shot advancement timer
//! - `engine`: `RoundEngine`, the only mutator of round state
//!
//! ## Lifecycle
//!
//! ```text
//! Playing --submit_guess--> Resolving --tick (delay elapsed)--> Playing (correct)
//!                                                           \-> Lost    (wrong)
//! any --restart--> Playing
//! ```

pub mod guess;
pub mod state;
pub mod timer;
pub mod engine;

pub use guess::{Guess, ParseGuessError};
pub use state::{RoundState, RoundStatus};
pub use timer::{AdvanceTimer, ScheduledAdvance};
pub use engine::{Advancement, GuessOutcome, RoundEngine};
