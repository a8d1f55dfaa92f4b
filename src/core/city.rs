//! City records and catalog indices.

use serde::{Deserialize, Serialize};

/// Index of a city within a [`Catalog`](super::Catalog).
///
/// Only meaningful relative to the catalog it was drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub u32);

impl CityId {
    /// Create a new city ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the catalog index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Build an ID from a catalog index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "City({})", self.0)
    }
}

/// A single city in the catalog.
///
/// Field names on the wire follow `cities.json`: `city`, `country`,
/// `population`, `image`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Display name.
    #[serde(rename = "city")]
    pub name: String,

    /// Country the city belongs to.
    pub country: String,

    /// Population. The only value the game compares.
    pub population: u64,

    /// Opaque image reference (usually a URL or asset path).
    #[serde(rename = "image")]
    pub image_ref: String,
}

impl City {
    /// Create a city with an empty image reference.
    pub fn new(name: impl Into<String>, country: impl Into<String>, population: u64) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            population,
            image_ref: String::new(),
        }
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }
}
