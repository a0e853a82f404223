//! Shared test doubles for sync engine tests.
//!
//! - [`StaticFetcher`] serves scripted pages from memory and records calls
//! - [`FailingStore`] wraps a [`MemoryStore`] and injects store failures
//! - record builders producing remote JSON records

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

use catalog_core::{Entity, EntityKind, ExternalId, LocalId, Page, PageQuery};
use catalog_store::{MemoryStore, Repository, StoreError, TableEntity};
use swapi_sync_source::{Endpoints, FetchError, PageFetcher, RawPage};

pub const BASE: &str = "https://swapi.test/api";

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

pub fn endpoints() -> Endpoints {
    Endpoints::from_base_url(BASE)
}

pub fn id(value: u32) -> ExternalId {
    ExternalId::new(value).unwrap()
}

pub fn url(collection: &str, id: u32) -> String {
    format!("{BASE}/{collection}/{id}/")
}

fn urls(collection: &str, ids: &[u32]) -> Vec<String> {
    ids.iter().map(|id| url(collection, *id)).collect()
}

// ============================================================================
// StaticFetcher
// ============================================================================

enum Scripted {
    Page(Value),
    Fail(u16),
}

/// Serves pages from memory. Unscripted URLs answer with an empty last page.
#[derive(Default)]
pub struct StaticFetcher {
    pages: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `records` as the single page of a collection.
    pub fn collection(&self, collection: &str, records: Vec<Value>) {
        self.page(
            &format!("{BASE}/{collection}/"),
            json!({"count": records.len(), "next": null, "previous": null, "results": records}),
        );
    }

    pub fn page(&self, url: &str, body: Value) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), Scripted::Page(body));
    }

    pub fn fail(&self, url: &str, status: u16) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), Scripted::Fail(status));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch_page(&self, url: &str) -> Result<RawPage, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.pages.lock().unwrap().get(url) {
            Some(Scripted::Page(body)) => Ok(serde_json::from_value(body.clone()).unwrap()),
            Some(Scripted::Fail(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Ok(RawPage {
                count: Some(0),
                results: Some(Vec::new()),
                ..RawPage::default()
            }),
        }
    }
}

// ============================================================================
// FailingStore
// ============================================================================

/// A [`MemoryStore`] that can reject saves of one record or become
/// unavailable for one kind.
#[derive(Default)]
pub struct FailingStore {
    pub inner: MemoryStore,
    reject_save: Option<(EntityKind, ExternalId)>,
    unavailable: Option<EntityKind>,
}

impl FailingStore {
    pub fn rejecting_save_of(kind: EntityKind, external_id: u32) -> Self {
        Self {
            reject_save: Some((kind, id(external_id))),
            ..Self::default()
        }
    }

    pub fn unavailable_for(kind: EntityKind) -> Self {
        Self {
            unavailable: Some(kind),
            ..Self::default()
        }
    }

    fn check(&self, kind: EntityKind) -> Result<(), StoreError> {
        if self.unavailable == Some(kind) {
            return Err(StoreError::Unavailable(format!("{kind} table is offline")));
        }
        Ok(())
    }
}

#[async_trait]
impl<E: TableEntity> Repository<E> for FailingStore {
    async fn find_by_external_id(&self, external_id: ExternalId) -> Result<Option<E>, StoreError> {
        self.check(E::KIND)?;
        Repository::<E>::find_by_external_id(&self.inner, external_id).await
    }

    async fn find_all_by_ids(&self, ids: &[LocalId]) -> Result<Vec<E>, StoreError> {
        self.check(E::KIND)?;
        Repository::<E>::find_all_by_ids(&self.inner, ids).await
    }

    async fn save(&self, entity: E) -> Result<E, StoreError> {
        self.check(E::KIND)?;
        if self.reject_save == Some((E::KIND, entity.external_id())) {
            return Err(StoreError::Rejected {
                kind: E::KIND,
                external_id: entity.external_id(),
                reason: "constraint violation".to_string(),
            });
        }
        Repository::<E>::save(&self.inner, entity).await
    }

    async fn find_page(&self, query: &PageQuery) -> Result<Page<E>, StoreError> {
        self.check(E::KIND)?;
        Repository::<E>::find_page(&self.inner, query).await
    }

    async fn count(&self) -> Result<usize, StoreError> {
        self.check(E::KIND)?;
        Repository::<E>::count(&self.inner).await
    }
}

// ============================================================================
// Remote record builders
// ============================================================================

pub fn planet(id: u32, name: &str, residents: &[u32], films: &[u32]) -> Value {
    json!({
        "name": name,
        "rotation_period": "23",
        "orbital_period": "304",
        "diameter": "10465",
        "climate": "arid",
        "gravity": "1 standard",
        "terrain": "desert",
        "surface_water": "1",
        "population": "200000",
        "residents": urls("people", residents),
        "films": urls("films", films),
        "created": "2014-12-09T13:50:49.641000Z",
        "edited": "2014-12-20T20:58:18.411000Z",
        "url": url("planets", id),
    })
}

#[derive(Default)]
pub struct CharacterRefs<'a> {
    pub homeworld: Option<u32>,
    pub films: &'a [u32],
    pub species: &'a [u32],
    pub vehicles: &'a [u32],
    pub starships: &'a [u32],
}

pub fn character(id: u32, name: &str, refs: CharacterRefs<'_>) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": refs.homeworld.map(|h| url("planets", h)),
        "films": urls("films", refs.films),
        "species": urls("species", refs.species),
        "vehicles": urls("vehicles", refs.vehicles),
        "starships": urls("starships", refs.starships),
        "created": "2014-12-09T13:50:51.644000Z",
        "edited": "2014-12-20T21:17:56.891000Z",
        "url": url("people", id),
    })
}

#[derive(Default)]
pub struct FilmRefs<'a> {
    pub characters: &'a [u32],
    pub planets: &'a [u32],
    pub species: &'a [u32],
    pub starships: &'a [u32],
    pub vehicles: &'a [u32],
}

pub fn film(id: u32, title: &str, refs: FilmRefs<'_>) -> Value {
    json!({
        "title": title,
        "episode_id": 4,
        "opening_crawl": "It is a period of civil war.",
        "director": "George Lucas",
        "producer": "Gary Kurtz, Rick McCallum",
        "release_date": "1977-05-25",
        "characters": urls("people", refs.characters),
        "planets": urls("planets", refs.planets),
        "starships": urls("starships", refs.starships),
        "vehicles": urls("vehicles", refs.vehicles),
        "species": urls("species", refs.species),
        "created": "2014-12-10T14:23:31.880000Z",
        "edited": "2014-12-20T19:49:45.256000Z",
        "url": url("films", id),
    })
}

pub fn species(id: u32, name: &str, people: &[u32], films: &[u32]) -> Value {
    json!({
        "name": name,
        "classification": "mammal",
        "designation": "sentient",
        "average_height": "180",
        "skin_colors": "caucasian, black, asian, hispanic",
        "hair_colors": "blonde, brown, black, red",
        "eye_colors": "brown, blue, green, hazel, grey, amber",
        "average_lifespan": "120",
        "homeworld": url("planets", 9),
        "language": "Galactic Basic",
        "people": urls("people", people),
        "films": urls("films", films),
        "created": "2014-12-10T13:52:11.567000Z",
        "edited": "2014-12-20T21:36:42.136000Z",
        "url": url("species", id),
    })
}

pub fn starship(id: u32, name: &str, pilots: &[u32], films: &[u32]) -> Value {
    json!({
        "name": name,
        "model": "T-65 X-wing",
        "manufacturer": "Incom Corporation",
        "cost_in_credits": "149999",
        "length": "12.5",
        "max_atmosphering_speed": "1050",
        "crew": "1",
        "passengers": "0",
        "cargo_capacity": "110",
        "consumables": "1 week",
        "hyperdrive_rating": "1.0",
        "MGLT": "100",
        "starship_class": "Starfighter",
        "pilots": urls("people", pilots),
        "films": urls("films", films),
        "created": "2014-12-12T11:19:05.340000Z",
        "edited": "2014-12-20T21:23:49.886000Z",
        "url": url("starships", id),
    })
}

pub fn vehicle(id: u32, name: &str, pilots: &[u32], films: &[u32]) -> Value {
    json!({
        "name": name,
        "model": "t-47 airspeeder",
        "manufacturer": "Incom corporation",
        "cost_in_credits": "unknown",
        "length": "4.5",
        "max_atmosphering_speed": "650",
        "crew": "2",
        "passengers": "0",
        "cargo_capacity": "10",
        "consumables": "none",
        "vehicle_class": "airspeeder",
        "pilots": urls("people", pilots),
        "films": urls("films", films),
        "created": "2014-12-15T12:22:12Z",
        "edited": "2014-12-20T21:30:21.672000Z",
        "url": url("vehicles", id),
    })
}

/// Stored record of kind `E`, panicking if absent.
pub async fn stored<E, S>(store: &S, external_id: u32) -> E
where
    E: Entity,
    S: Repository<E>,
{
    store
        .find_by_external_id(id(external_id))
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("{} {external_id} not stored", E::KIND))
}
