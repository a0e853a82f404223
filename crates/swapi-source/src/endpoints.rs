//! Collection URLs for the six kinds.

use serde::{Deserialize, Serialize};

use catalog_core::EntityKind;

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Starting URL of each collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub planets: String,
    pub people: String,
    pub films: String,
    pub species: String,
    pub starships: String,
    pub vehicles: String,
}

impl Endpoints {
    /// Standard collection paths under `base_url`.
    pub fn from_base_url(base_url: &str) -> Self {
        let base = base_url.trim().trim_end_matches('/');
        let url = |kind: EntityKind| format!("{base}/{}/", kind.collection());
        Self {
            planets: url(EntityKind::Planet),
            people: url(EntityKind::Character),
            films: url(EntityKind::Film),
            species: url(EntityKind::Species),
            starships: url(EntityKind::Starship),
            vehicles: url(EntityKind::Vehicle),
        }
    }

    pub fn url_for(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Planet => &self.planets,
            EntityKind::Character => &self.people,
            EntityKind::Film => &self.films,
            EntityKind::Species => &self.species,
            EntityKind::Starship => &self.starships,
            EntityKind::Vehicle => &self.vehicles,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_base_url(DEFAULT_BASE_URL)
    }
}
