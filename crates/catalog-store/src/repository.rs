//! Repository traits.

use async_trait::async_trait;
use catalog_core::{
    Character, Entity, ExternalId, Film, LocalId, Page, PageQuery, Planet, Species, Starship,
    Vehicle,
};

use crate::error::StoreError;

/// Per-kind access to stored records.
///
/// This trait abstracts the storage backend so the sync engine can run
/// against the in-memory store or a test double. A type usually implements it
/// once per entity kind, so calls name the kind explicitly:
///
/// ```ignore
/// let film = Repository::<Film>::find_by_external_id(&store, id).await?;
/// ```
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    async fn find_by_external_id(&self, external_id: ExternalId) -> Result<Option<E>, StoreError>;

    /// Records for the given local ids, in the order given. Unknown ids are skipped.
    async fn find_all_by_ids(&self, ids: &[LocalId]) -> Result<Vec<E>, StoreError>;

    /// Create or update a record.
    ///
    /// A record without a local id is created and gets one assigned; the
    /// returned value carries it. A record with a local id replaces the stored
    /// one. Either way the external id must not belong to another record.
    async fn save(&self, entity: E) -> Result<E, StoreError>;

    /// Records matching the query's name filter, ordered by local id.
    async fn find_page(&self, query: &PageQuery) -> Result<Page<E>, StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;
}

/// A store holding all six kinds.
pub trait CatalogStore:
    Repository<Planet>
    + Repository<Character>
    + Repository<Film>
    + Repository<Species>
    + Repository<Starship>
    + Repository<Vehicle>
{
}

impl<T> CatalogStore for T where
    T: Repository<Planet>
        + Repository<Character>
        + Repository<Film>
        + Repository<Species>
        + Repository<Starship>
        + Repository<Vehicle>
{
}
