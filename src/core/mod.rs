//! Core types: cities, the catalog, RNG, configuration and errors.
//!
//! Nothing in here knows about rounds or scoring. The round engine in
//! `rules` builds on these.

pub mod city;
pub mod catalog;
pub mod rng;
pub mod config;
pub mod error;

pub use city::{City, CityId};
pub use catalog::Catalog;
pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
