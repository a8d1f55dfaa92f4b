//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::CityId;
use crate::selection::Pair;

/// Python wrapper for Pair.
#[pyclass(name = "Pair")]
#[derive(Clone, Debug)]
pub struct PyPair(pub Pair);

#[pymethods]
impl PyPair {
    /// Create a pair of catalog indices.
    #[new]
    fn new(revealed: u32, hidden: u32) -> PyResult<Self> {
        if revealed == hidden {
            return Err(pyo3::exceptions::PyValueError::new_err(
                "pair must hold two distinct cities",
            ));
        }
        Ok(Self(Pair::new(CityId::new(revealed), CityId::new(hidden))))
    }

    /// Index of the city whose population is shown.
    #[getter]
    fn revealed(&self) -> u32 {
        self.0.revealed.0
    }

    /// Index of the city whose population is concealed.
    #[getter]
    fn hidden(&self) -> u32 {
        self.0.hidden.0
    }

    fn __repr__(&self) -> String {
        format!("Pair(revealed={}, hidden={})", self.0.revealed.0, self.0.hidden.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        (u64::from(self.0.revealed.0) << 32) | u64::from(self.0.hidden.0)
    }
}
