use async_trait::async_trait;
use serde::Deserialize;

use catalog_core::relation::{PLANET_FILMS, PLANET_RESIDENTS};
use catalog_core::{EntityKind, ExternalId, Planet, PlanetAttributes};
use catalog_store::{CatalogStore, StoreError};

use crate::linker::{link_all, LinkTally};
use crate::records::{lenient_text, parse_timestamp, reference_list, text};
use crate::upsert::Upsert;

/// A record of the `planets` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanetRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub rotation_period: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub orbital_period: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub diameter: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub climate: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gravity: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub terrain: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub surface_water: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub population: Option<String>,
    #[serde(default, deserialize_with = "reference_list")]
    pub residents: Vec<Option<String>>,
    #[serde(default, deserialize_with = "reference_list")]
    pub films: Vec<Option<String>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub edited: Option<String>,
    pub url: Option<String>,
}

#[async_trait]
impl Upsert for PlanetRecord {
    type Target = Planet;

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn attributes(&self, external_id: ExternalId) -> PlanetAttributes {
        let kind = EntityKind::Planet;
        PlanetAttributes {
            name: text(&self.name),
            rotation_period: text(&self.rotation_period),
            orbital_period: text(&self.orbital_period),
            diameter: text(&self.diameter),
            climate: text(&self.climate),
            gravity: text(&self.gravity),
            terrain: text(&self.terrain),
            surface_water: text(&self.surface_water),
            population: text(&self.population),
            created: parse_timestamp(self.created.as_deref(), "created", kind, external_id),
            edited: parse_timestamp(self.edited.as_deref(), "edited", kind, external_id),
            url: text(&self.url),
        }
    }

    async fn link<S>(&self, store: &S, planet: &mut Planet) -> Result<LinkTally, StoreError>
    where
        S: CatalogStore + ?Sized,
    {
        let mut tally = LinkTally::default();
        link_all(store, planet, &PLANET_RESIDENTS, &self.residents, &mut tally).await?;
        link_all(store, planet, &PLANET_FILMS, &self.films, &mut tally).await?;
        Ok(tally)
    }
}
