use async_trait::async_trait;
use serde::Deserialize;

use catalog_core::relation::{STARSHIP_FILMS, STARSHIP_PILOTS};
use catalog_core::{EntityKind, ExternalId, Starship, StarshipAttributes};
use catalog_store::{CatalogStore, StoreError};

use crate::linker::{link_all, LinkTally};
use crate::records::{lenient_text, parse_timestamp, reference_list, text};
use crate::upsert::Upsert;

/// A record of the `starships` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct StarshipRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cost_in_credits: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub length: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub max_atmosphering_speed: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub crew: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub passengers: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cargo_capacity: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub consumables: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub hyperdrive_rating: Option<String>,
    #[serde(rename = "MGLT")]
    #[serde(default, deserialize_with = "lenient_text")]
    pub mglt: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub starship_class: Option<String>,
    #[serde(default, deserialize_with = "reference_list")]
    pub pilots: Vec<Option<String>>,
    #[serde(default, deserialize_with = "reference_list")]
    pub films: Vec<Option<String>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub edited: Option<String>,
    pub url: Option<String>,
}

#[async_trait]
impl Upsert for StarshipRecord {
    type Target = Starship;

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn attributes(&self, external_id: ExternalId) -> StarshipAttributes {
        let kind = EntityKind::Starship;
        StarshipAttributes {
            name: text(&self.name),
            model: text(&self.model),
            manufacturer: text(&self.manufacturer),
            cost_in_credits: text(&self.cost_in_credits),
            length: text(&self.length),
            max_atmosphering_speed: text(&self.max_atmosphering_speed),
            crew: text(&self.crew),
            passengers: text(&self.passengers),
            cargo_capacity: text(&self.cargo_capacity),
            consumables: text(&self.consumables),
            hyperdrive_rating: text(&self.hyperdrive_rating),
            mglt: text(&self.mglt),
            starship_class: text(&self.starship_class),
            created: parse_timestamp(self.created.as_deref(), "created", kind, external_id),
            edited: parse_timestamp(self.edited.as_deref(), "edited", kind, external_id),
            url: text(&self.url),
        }
    }

    async fn link<S>(&self, store: &S, starship: &mut Starship) -> Result<LinkTally, StoreError>
    where
        S: CatalogStore + ?Sized,
    {
        let mut tally = LinkTally::default();
        link_all(store, starship, &STARSHIP_PILOTS, &self.pilots, &mut tally).await?;
        link_all(store, starship, &STARSHIP_FILMS, &self.films, &mut tally).await?;
        Ok(tally)
    }
}
