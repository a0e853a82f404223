//! Core types for the swapi-sync catalog mirror.
//!
//! This crate provides the foundational types shared by the store and the
//! remote source:
//!
//! - [`EntityKind`] - The six catalog kinds and their sync order
//! - [`ExternalId`] - Stable id extracted from a remote resource reference
//! - [`LocalId`] - Store-assigned surrogate id
//! - [`Entity`] - Common surface of the six entity types
//! - [`Relation`] - Two-sided relation descriptors used by the linker
//! - [`PageQuery`] / [`Page`] - Read-side paging
//!
//! # Architecture
//!
//! ```text
//! catalog-core (this crate)
//!    │
//!    ├─── catalog-store       (repositories keyed by ExternalId / LocalId)
//!    │
//!    └─── swapi-sync-source   (remote records, linker, upserters, orchestrator)
//! ```
//!
//! # Example
//!
//! ```rust
//! use catalog_core::ExternalId;
//!
//! let id = ExternalId::from_reference(Some("https://swapi.dev/api/people/1/"));
//! assert_eq!(id.map(ExternalId::get), Some(1));
//!
//! assert_eq!(ExternalId::from_reference(Some("https://swapi.dev/api/people/")), None);
//! ```

pub mod entity;
pub mod error;
pub mod id;
pub mod kind;
pub mod page;
pub mod relation;

// Re-exports for convenience
pub use entity::{
    Character, CharacterAttributes, Entity, Film, FilmAttributes, Planet, PlanetAttributes,
    Species, SpeciesAttributes, Starship, StarshipAttributes, Vehicle, VehicleAttributes,
};
pub use error::CatalogError;
pub use id::{ExternalId, LocalId};
pub use kind::{EntityKind, SYNC_ORDER};
pub use page::{Page, PageQuery, DEFAULT_PAGE_SIZE};
pub use relation::Relation;
