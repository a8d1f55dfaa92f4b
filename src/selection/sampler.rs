//! Complement-set sampling.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{CityId, EngineError, GameRng, Result};

use super::pair::Pair;

/// Exclusion list for a draw.
///
/// The engine never excludes more than two cities, so this stays inline.
pub type Exclusions = SmallVec<[CityId; 2]>;

/// Catalog indices in `0..catalog_len` that are not excluded, ascending.
///
/// Exclusions outside the catalog are ignored.
#[must_use]
pub fn complement(catalog_len: usize, exclude: &[CityId]) -> Vec<CityId> {
    let excluded: FxHashSet<CityId> = exclude.iter().copied().collect();
    (0..catalog_len)
        .map(CityId::from_index)
        .filter(|id| !excluded.contains(id))
        .collect()
}

/// Draw one index uniformly from the complement of `exclude`.
pub fn draw_index(catalog_len: usize, exclude: &[CityId], rng: &mut GameRng) -> Result<CityId> {
    let pool = complement(catalog_len, exclude);
    rng.choose(&pool)
        .copied()
        .ok_or(EngineError::ExhaustedPool {
            catalog_len,
            excluded: catalog_len - pool.len(),
        })
}

/// Draw two distinct indices, neither in `exclude`.
///
/// The first draw fills `revealed`, the second `hidden`. Fails with
/// `ExhaustedPool` when fewer than two candidates remain. In particular a
/// two-city catalog with one exclusion fails here: its first slot is the
/// sole remaining city, which `draw_index` returns on its own.
pub fn select_pair(catalog_len: usize, exclude: &[CityId], rng: &mut GameRng) -> Result<Pair> {
    let first = draw_index(catalog_len, exclude, rng)?;

    let mut second_exclude: Exclusions = exclude.iter().copied().collect();
    second_exclude.push(first);
    let second = draw_index(catalog_len, &second_exclude, rng)?;

    debug!(revealed = %first, hidden = %second, catalog_len, excluded = exclude.len(), "Selected pair");
    Ok(Pair::new(first, second))
}
