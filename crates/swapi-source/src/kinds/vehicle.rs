use async_trait::async_trait;
use serde::Deserialize;

use catalog_core::relation::{VEHICLE_FILMS, VEHICLE_PILOTS};
use catalog_core::{EntityKind, ExternalId, Vehicle, VehicleAttributes};
use catalog_store::{CatalogStore, StoreError};

use crate::linker::{link_all, LinkTally};
use crate::records::{lenient_text, parse_timestamp, reference_list, text};
use crate::upsert::Upsert;

/// A record of the `vehicles` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRecord {
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
    pub vehicle_class: Option<String>,
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
impl Upsert for VehicleRecord {
    type Target = Vehicle;

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn attributes(&self, external_id: ExternalId) -> VehicleAttributes {
        let kind = EntityKind::Vehicle;
        VehicleAttributes {
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
            vehicle_class: text(&self.vehicle_class),
            created: parse_timestamp(self.created.as_deref(), "created", kind, external_id),
            edited: parse_timestamp(self.edited.as_deref(), "edited", kind, external_id),
            url: text(&self.url),
        }
    }

    async fn link<S>(&self, store: &S, vehicle: &mut Vehicle) -> Result<LinkTally, StoreError>
    where
        S: CatalogStore + ?Sized,
    {
        let mut tally = LinkTally::default();
        link_all(store, vehicle, &VEHICLE_PILOTS, &self.pilots, &mut tally).await?;
        link_all(store, vehicle, &VEHICLE_FILMS, &self.films, &mut tally).await?;
        Ok(tally)
    }
}
