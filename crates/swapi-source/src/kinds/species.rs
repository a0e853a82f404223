use async_trait::async_trait;
use serde::Deserialize;

use catalog_core::relation::{SPECIES_FILMS, SPECIES_PEOPLE};
use catalog_core::{EntityKind, ExternalId, Species, SpeciesAttributes};
use catalog_store::{CatalogStore, StoreError};

use crate::linker::{link_all, LinkTally};
use crate::records::{lenient_text, parse_timestamp, reference_list, text};
use crate::upsert::Upsert;

/// A record of the `species` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub classification: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub average_height: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub skin_colors: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub hair_colors: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub eye_colors: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub average_lifespan: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub homeworld: Option<String>,
    #[serde(default, deserialize_with = "reference_list")]
    pub people: Vec<Option<String>>,
    #[serde(default, deserialize_with = "reference_list")]
    pub films: Vec<Option<String>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub edited: Option<String>,
    pub url: Option<String>,
}

#[async_trait]
impl Upsert for SpeciesRecord {
    type Target = Species;

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn attributes(&self, external_id: ExternalId) -> SpeciesAttributes {
        let kind = EntityKind::Species;
        SpeciesAttributes {
            name: text(&self.name),
            classification: text(&self.classification),
            designation: text(&self.designation),
            average_height: text(&self.average_height),
            skin_colors: text(&self.skin_colors),
            hair_colors: text(&self.hair_colors),
            eye_colors: text(&self.eye_colors),
            average_lifespan: text(&self.average_lifespan),
            language: text(&self.language),
            // Stored as given; species are not linked to planets.
            homeworld: self.homeworld.clone().filter(|h| !h.trim().is_empty()),
            created: parse_timestamp(self.created.as_deref(), "created", kind, external_id),
            edited: parse_timestamp(self.edited.as_deref(), "edited", kind, external_id),
            url: text(&self.url),
        }
    }

    async fn link<S>(&self, store: &S, species: &mut Species) -> Result<LinkTally, StoreError>
    where
        S: CatalogStore + ?Sized,
    {
        let mut tally = LinkTally::default();
        link_all(store, species, &SPECIES_PEOPLE, &self.people, &mut tally).await?;
        link_all(store, species, &SPECIES_FILMS, &self.films, &mut tally).await?;
        Ok(tally)
    }
}
