//! The pair of cities currently on screen.

use serde::{Deserialize, Serialize};

use crate::core::CityId;

/// Two distinct catalog entries.
///
/// `revealed` always shows its population; `hidden` is concealed until
/// the guess resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub revealed: CityId,
    pub hidden: CityId,
}

impl Pair {
    /// Create a pair. Panics if both sides are the same city.
    #[must_use]
    pub fn new(revealed: CityId, hidden: CityId) -> Self {
        assert_ne!(revealed, hidden, "Pair must hold two distinct cities");
        Self { revealed, hidden }
    }

    /// Does the pair contain this city on either side?
    #[must_use]
    pub fn contains(&self, id: CityId) -> bool {
        self.revealed == id || self.hidden == id
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.revealed.0, self.hidden.0)
    }
}
