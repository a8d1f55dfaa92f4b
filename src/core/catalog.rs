//! The city catalog.
//!
//! Loaded once per session and never mutated afterwards. Backed by an
//! `im::Vector` so restarting a round (or handing the catalog to a
//! session task) clones in O(1).

use std::io::Read;
use std::ops::Index;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::city::{City, CityId};
use super::error::{EngineError, Result};

/// Ordered, immutable sequence of cities. Always holds at least two.
///
/// ## Example
///
/// ```
/// use higher_lower::core::{Catalog, City, CityId};
///
/// let catalog = Catalog::new(vec![
///     City::new("Paris", "France", 2_102_650),
///     City::new("Rome", "Italy", 2_746_984),
/// ]).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.population(CityId::new(1)), Some(2_746_984));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<City>", into = "Vec<City>")]
pub struct Catalog {
    cities: Vector<City>,
}

impl Catalog {
    /// Minimum number of cities a playable catalog holds.
    pub const MIN_LEN: usize = 2;

    /// Build a catalog from already-decoded cities.
    ///
    /// Fails with `InvalidCatalog` for fewer than two entries.
    pub fn new(cities: impl IntoIterator<Item = City>) -> Result<Self> {
        let cities: Vector<City> = cities.into_iter().collect();
        if cities.len() < Self::MIN_LEN {
            return Err(EngineError::InvalidCatalog { len: cities.len() });
        }
        Ok(Self { cities })
    }

    /// Decode a `cities.json` array.
    pub fn from_json(json: &str) -> Result<Self> {
        let cities: Vec<City> = serde_json::from_str(json)?;
        Self::new(cities)
    }

    /// Decode a `cities.json` array from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let cities: Vec<City> = serde_json::from_reader(reader)?;
        Self::new(cities)
    }

    /// Number of cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always false; a catalog holds at least two cities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Look up a city.
    #[must_use]
    pub fn get(&self, id: CityId) -> Option<&City> {
        self.cities.get(id.index())
    }

    /// Population of a city, if the ID is in range.
    #[must_use]
    pub fn population(&self, id: CityId) -> Option<u64> {
        self.get(id).map(|c| c.population)
    }

    /// Iterate over `(id, city)` in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (CityId, &City)> {
        self.cities
            .iter()
            .enumerate()
            .map(|(i, c)| (CityId::from_index(i), c))
    }
}

/// Panics if the ID is out of range, like slice indexing.
impl Index<CityId> for Catalog {
    type Output = City;

    fn index(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }
}

impl TryFrom<Vec<City>> for Catalog {
    type Error = EngineError;

    fn try_from(cities: Vec<City>) -> Result<Self> {
        Self::new(cities)
    }
}

impl From<Catalog> for Vec<City> {
    fn from(catalog: Catalog) -> Self {
        catalog.cities.into_iter().collect()
    }
}
