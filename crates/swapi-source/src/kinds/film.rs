use async_trait::async_trait;
use serde::Deserialize;

use catalog_core::relation::{
    FILM_CHARACTERS, FILM_PLANETS, FILM_SPECIES, FILM_STARSHIPS, FILM_VEHICLES,
};
use catalog_core::{EntityKind, ExternalId, Film, FilmAttributes};
use catalog_store::{CatalogStore, StoreError};

use crate::linker::{link_all, LinkTally};
use crate::records::{
    lenient_i32, lenient_text, parse_date, parse_timestamp, reference_list, text,
};
use crate::upsert::Upsert;

/// A record of the `films` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct FilmRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub episode_id: Option<i32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub opening_crawl: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub producer: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "reference_list")]
    pub characters: Vec<Option<String>>,
    #[serde(default, deserialize_with = "reference_list")]
    pub planets: Vec<Option<String>>,
    #[serde(default, deserialize_with = "reference_list")]
    pub species: Vec<Option<String>>,
    #[serde(default, deserialize_with = "reference_list")]
    pub starships: Vec<Option<String>>,
    #[serde(default, deserialize_with = "reference_list")]
    pub vehicles: Vec<Option<String>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub edited: Option<String>,
    pub url: Option<String>,
}

#[async_trait]
impl Upsert for FilmRecord {
    type Target = Film;

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn attributes(&self, external_id: ExternalId) -> FilmAttributes {
        let kind = EntityKind::Film;
        FilmAttributes {
            title: text(&self.title),
            episode_id: self.episode_id,
            opening_crawl: text(&self.opening_crawl),
            director: text(&self.director),
            producer: text(&self.producer),
            release_date: parse_date(
                self.release_date.as_deref(),
                "release_date",
                kind,
                external_id,
            ),
            created: parse_timestamp(self.created.as_deref(), "created", kind, external_id),
            edited: parse_timestamp(self.edited.as_deref(), "edited", kind, external_id),
            url: text(&self.url),
        }
    }

    async fn link<S>(&self, store: &S, film: &mut Film) -> Result<LinkTally, StoreError>
    where
        S: CatalogStore + ?Sized,
    {
        let mut tally = LinkTally::default();
        link_all(store, film, &FILM_CHARACTERS, &self.characters, &mut tally).await?;
        link_all(store, film, &FILM_PLANETS, &self.planets, &mut tally).await?;
        link_all(store, film, &FILM_SPECIES, &self.species, &mut tally).await?;
        link_all(store, film, &FILM_STARSHIPS, &self.starships, &mut tally).await?;
        link_all(store, film, &FILM_VEHICLES, &self.vehicles, &mut tally).await?;
        Ok(tally)
    }
}
