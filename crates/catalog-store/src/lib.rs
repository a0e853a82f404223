//! Local store for the swapi-sync catalog mirror.
//!
//! This crate provides:
//! - [`Repository`] - Per-kind repository trait used by the sync engine and the
//!   read side
//! - [`CatalogStore`] - A store that is a repository for all six kinds
//! - [`MemoryStore`] - In-memory arena store guarded by an async lock
//! - [`CatalogSnapshot`] / [`SnapshotFile`] - JSON persistence of the whole store
//!
//! # Usage
//!
//! ```ignore
//! use catalog_core::{Character, ExternalId};
//! use catalog_store::{MemoryStore, Repository, SnapshotFile};
//!
//! let file = SnapshotFile::new(".swapi-sync/catalog.json");
//! let store = MemoryStore::from_snapshot(file.load()?.unwrap_or_default())?;
//!
//! let luke = Repository::<Character>::find_by_external_id(&store, ExternalId::new(1).unwrap()).await?;
//!
//! file.save(&store.snapshot().await)?;
//! ```

pub mod error;
pub mod memory;
pub mod repository;
pub mod snapshot;

pub use error::StoreError;
pub use memory::{MemoryStore, MemoryTables, Table, TableEntity};
pub use repository::{CatalogStore, Repository};
pub use snapshot::{CatalogSnapshot, SnapshotFile, SNAPSHOT_VERSION};

#[cfg(test)]
mod tests;
