use async_trait::async_trait;
use serde::Deserialize;

use catalog_core::relation::{
    CHARACTER_FILMS, CHARACTER_HOMEWORLD, CHARACTER_SPECIES, CHARACTER_STARSHIPS,
    CHARACTER_VEHICLES,
};
use catalog_core::{Character, CharacterAttributes, EntityKind, ExternalId};
use catalog_store::{CatalogStore, StoreError};

use crate::linker::{link_all, LinkTally};
use crate::records::{lenient_text, parse_timestamp, reference_list, single_reference, text};
use crate::upsert::Upsert;

/// A record of the `people` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub birth_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub mass: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub hair_color: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub skin_color: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub eye_color: Option<String>,
    #[serde(default, deserialize_with = "single_reference")]
    pub homeworld: Option<Option<String>>,
    #[serde(default, deserialize_with = "reference_list")]
    pub films: Vec<Option<String>>,
    #[serde(default, deserialize_with = "reference_list")]
    pub species: Vec<Option<String>>,
    #[serde(default, deserialize_with = "reference_list")]
    pub vehicles: Vec<Option<String>>,
    #[serde(default, deserialize_with = "reference_list")]
    pub starships: Vec<Option<String>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub edited: Option<String>,
    pub url: Option<String>,
}

#[async_trait]
impl Upsert for CharacterRecord {
    type Target = Character;

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn attributes(&self, external_id: ExternalId) -> CharacterAttributes {
        let kind = EntityKind::Character;
        CharacterAttributes {
            name: text(&self.name),
            birth_year: text(&self.birth_year),
            gender: text(&self.gender),
            height: text(&self.height),
            mass: text(&self.mass),
            hair_color: text(&self.hair_color),
            skin_color: text(&self.skin_color),
            eye_color: text(&self.eye_color),
            created: parse_timestamp(self.created.as_deref(), "created", kind, external_id),
            edited: parse_timestamp(self.edited.as_deref(), "edited", kind, external_id),
            url: text(&self.url),
        }
    }

    async fn link<S>(&self, store: &S, character: &mut Character) -> Result<LinkTally, StoreError>
    where
        S: CatalogStore + ?Sized,
    {
        let mut tally = LinkTally::default();
        if let Some(homeworld) = &self.homeworld {
            let homeworld = std::slice::from_ref(homeworld);
            link_all(store, character, &CHARACTER_HOMEWORLD, homeworld, &mut tally).await?;
        }
        link_all(store, character, &CHARACTER_FILMS, &self.films, &mut tally).await?;
        link_all(store, character, &CHARACTER_SPECIES, &self.species, &mut tally).await?;
        link_all(store, character, &CHARACTER_VEHICLES, &self.vehicles, &mut tally).await?;
        link_all(store, character, &CHARACTER_STARSHIPS, &self.starships, &mut tally).await?;
        Ok(tally)
    }
}
