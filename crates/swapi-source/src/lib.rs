//! Remote catalog source for swapi-sync.
//!
//! This crate walks the six paginated collections of a SWAPI-style catalog
//! and mirrors them into a [`catalog_store::CatalogStore`]:
//!
//! - [`PageFetcher`] / [`HttpPageFetcher`] - fetch one page of a collection
//! - [`PageCursor`] - follow `next` links until the collection is exhausted
//! - [`Upsert`] - per-kind mapping from remote record to local entity
//! - [`linker`] - two-sided relation bookkeeping against the store
//! - [`SyncEngine`] - run the six kinds in order and report the outcome
//!
//! # Failure handling
//!
//! | Failure                              | Effect                                  |
//! |--------------------------------------|-----------------------------------------|
//! | Record or reference without an id    | skipped, warning, sync continues        |
//! | Store rejects one record             | that record skipped, sync continues     |
//! | Page fetch fails                     | that kind stops early, next kind runs   |
//! | Store unavailable                    | whole run aborts with [`SyncError`]     |
//!
//! Nothing is retried. A new run is always safe because records are matched
//! by external id.

pub mod cursor;
pub mod endpoints;
pub mod fetcher;
pub mod kinds;
pub mod linker;
pub mod records;
pub mod report;
pub mod sync;
pub mod upsert;

pub use cursor::{FetchedPage, PageCursor};
pub use endpoints::{Endpoints, DEFAULT_BASE_URL};
pub use fetcher::{FetchError, HttpPageFetcher, PageFetcher};
pub use kinds::{
    CharacterRecord, FilmRecord, PlanetRecord, SpeciesRecord, StarshipRecord, VehicleRecord,
};
pub use linker::LinkTally;
pub use records::RawPage;
pub use report::{KindReport, SkipCounts, SyncReport};
pub use sync::{SyncEngine, SyncError};
pub use upsert::{upsert_record, RecordOutcome, SkipReason, Upsert};
