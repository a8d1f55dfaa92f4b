//! Round engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{Catalog, EngineConfig};
use crate::rules::{Advancement, Guess, RoundEngine, RoundStatus};
use crate::store::MemoryStore;
use crate::view::CityCard;

use super::py_core::PyPair;

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn status_name(status: RoundStatus) -> &'static str {
    match status {
        RoundStatus::Playing => "playing",
        RoundStatus::Resolving => "resolving",
        RoundStatus::Lost => "lost",
    }
}

fn card_dict<'py>(py: Python<'py>, card: &CityCard) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("id", card.id.0)?;
    dict.set_item("name", &card.name)?;
    dict.set_item("country", &card.country)?;
    dict.set_item("image", &card.image_ref)?;
    dict.set_item("population", card.population)?;
    Ok(dict)
}

/// Python wrapper for a round engine.
///
/// Time is logical: call `tick(now_ms)` to let the reveal delay elapse.
/// The best score lives in memory; pass the previous best in and read
/// `best_score` back out to persist it.
#[pyclass(name = "HigherLower")]
pub struct PyHigherLower {
    engine: RoundEngine<MemoryStore>,
}

#[pymethods]
impl PyHigherLower {
    /// Create a game.
    ///
    /// # Arguments
    /// - cities_json: `cities.json` contents (list of city/country/population/image)
    /// - seed: RNG seed for deterministic pairs
    /// - reveal_delay_ms: How long a result shows before the round moves on
    /// - best_score: Previously persisted best score
    #[new]
    #[pyo3(signature = (cities_json, seed = 42, reveal_delay_ms = 1200, best_score = 0))]
    fn new(cities_json: &str, seed: u64, reveal_delay_ms: u64, best_score: u32) -> PyResult<Self> {
        let config = EngineConfig::default()
            .with_seed(seed)
            .with_reveal_delay_ms(reveal_delay_ms);
        let store = MemoryStore::with_value(config.best_score_key.clone(), best_score);
        let catalog = Catalog::from_json(cities_json).map_err(value_error)?;
        let engine = RoundEngine::initialize(catalog, store, config).map_err(value_error)?;
        Ok(Self { engine })
    }

    /// Guess "higher" or "lower".
    ///
    /// Returns whether the guess was right, or None if it was ignored.
    fn guess(&mut self, direction: &str) -> PyResult<Option<bool>> {
        let guess: Guess = direction.parse().map_err(value_error)?;
        Ok(self.engine.submit_guess(guess).correct())
    }

    /// Advance the logical clock.
    ///
    /// Returns "advanced" or "lost" if the pending result was applied.
    fn tick(&mut self, now_ms: u64) -> PyResult<Option<&'static str>> {
        let advancement = self.engine.tick(now_ms).map_err(value_error)?;
        Ok(advancement.map(|a| match a {
            Advancement::Advanced { .. } => "advanced",
            Advancement::Lost { .. } => "lost",
        }))
    }

    /// Start a new round. Keeps the best score.
    fn restart(&mut self) -> PyResult<()> {
        self.engine.restart().map_err(value_error)
    }

    #[getter]
    fn score(&self) -> u32 {
        self.engine.state().score
    }

    #[getter]
    fn best_score(&self) -> u32 {
        self.engine.state().best_score
    }

    /// "playing", "resolving" or "lost".
    #[getter]
    fn status(&self) -> &'static str {
        status_name(self.engine.state().status)
    }

    #[getter]
    fn pair(&self) -> PyPair {
        PyPair(self.engine.state().pair)
    }

    #[getter]
    fn now_ms(&self) -> u64 {
        self.engine.now_ms()
    }

    /// Snapshot for rendering, as a dict.
    fn view<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let view = self.engine.view();
        let dict = PyDict::new_bound(py);
        dict.set_item("revealed", card_dict(py, &view.revealed)?)?;
        dict.set_item("hidden", card_dict(py, &view.hidden)?)?;
        dict.set_item("score", view.score)?;
        dict.set_item("best_score", view.best_score)?;
        dict.set_item("status", status_name(view.status))?;
        dict.set_item("last_guess_correct", view.last_guess_correct)?;
        dict.set_item("highlight_hidden", view.highlight_hidden)?;
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        let state = self.engine.state();
        format!(
            "HigherLower(score={}, best={}, status={})",
            state.score,
            state.best_score,
            status_name(state.status)
        )
    }
}
