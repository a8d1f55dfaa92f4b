//! Read-only snapshot for the presentation layer.
//!
//! The shell renders a `RoundView` and never sees engine internals. The
//! reveal rules live here so every front end hides the same things:
//!
//! - the revealed city's population is always shown
//! - the hidden city's population is shown once the round leaves `Playing`
//! - the hidden card is highlighted while a wrong guess is on screen

use serde::{Deserialize, Serialize};

use crate::core::{Catalog, CityId};
use crate::rules::{RoundState, RoundStatus};

/// One city card as displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCard {
    pub id: CityId,
    pub name: String,
    pub country: String,
    pub image_ref: String,
    /// `None` while the population is concealed.
    pub population: Option<u64>,
}

impl CityCard {
    fn new(catalog: &Catalog, id: CityId, show_population: bool) -> Self {
        let city = &catalog[id];
        Self {
            id,
            name: city.name.clone(),
            country: city.country.clone(),
            image_ref: city.image_ref.clone(),
            population: show_population.then_some(city.population),
        }
    }
}

/// Everything a front end needs to draw the screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub revealed: CityCard,
    pub hidden: CityCard,
    pub score: u32,
    pub best_score: u32,
    pub status: RoundStatus,
    pub last_guess_correct: Option<bool>,
    /// Wrong guess currently on screen.
    pub highlight_hidden: bool,
}

impl RoundView {
    #[must_use]
    pub fn new(state: &RoundState, catalog: &Catalog) -> Self {
        Self {
            revealed: CityCard::new(catalog, state.pair.revealed, true),
            hidden: CityCard::new(catalog, state.pair.hidden, state.hidden_revealed()),
            score: state.score,
            best_score: state.best_score,
            status: state.status,
            last_guess_correct: state.last_guess_correct,
            highlight_hidden: state.status == RoundStatus::Resolving
                && state.last_guess_correct == Some(false),
        }
    }

    /// Should the higher/lower buttons be live?
    #[must_use]
    pub fn accepts_guess(&self) -> bool {
        self.status == RoundStatus::Playing
    }

    /// Should the restart prompt be shown?
    #[must_use]
    pub fn can_restart(&self) -> bool {
        self.status == RoundStatus::Lost
    }
}
