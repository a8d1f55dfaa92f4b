//! City pair selection.
//!
//! A pair is drawn in two slots: the first slot comes uniformly from the
//! catalog minus an exclusion set, the second from the same set minus the
//! first slot. Draws sample the explicit complement rather than retrying,
//! so a fully excluded pool fails with `ExhaustedPool` instead of spinning.
//!
//! ```
//! use higher_lower::core::{CityId, GameRng};
//! use higher_lower::selection::select_pair;
//!
//! let mut rng = GameRng::new(42);
//! let pair = select_pair(5, &[CityId::new(0)], &mut rng).unwrap();
//!
//! assert_ne!(pair.revealed, pair.hidden);
//! assert_ne!(pair.revealed, CityId::new(0));
//! ```

mod pair;
mod sampler;

pub use pair::Pair;
pub use sampler::{complement, draw_index, select_pair, Exclusions};
