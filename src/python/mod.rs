//! Python bindings for the higher-lower round engine.
//!
//! # Quick Start
//!
//! ```python
//! import higher_lower as hl
//!
//! game = hl.HigherLower(open("cities.json").read(), seed=7)
//!
//! correct = game.guess("higher")
//! game.tick(game.now_ms + 1200)
//!
//! print(game.score, game.status, game.view())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// higher_lower: a higher-or-lower city population game engine.
#[pymodule]
fn higher_lower(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPair>()?;
    m.add_class::<PyHigherLower>()?;

    Ok(())
}
