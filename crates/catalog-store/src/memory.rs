//! In-memory store.
//!
//! Each kind lives in a [`Table`]: an arena of records where local id `n` sits
//! at position `n - 1`, plus an index from external id to local id. All six
//! tables share one async read/write lock, so query-side readers can run while
//! a sync holds no write.

use async_trait::async_trait;
use catalog_core::{
    Character, Entity, ExternalId, Film, LocalId, Page, PageQuery, Planet, Species, Starship,
    Vehicle,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::repository::Repository;
use crate::snapshot::CatalogSnapshot;

/// Records of one kind.
#[derive(Debug, Clone)]
pub struct Table<E> {
    records: Vec<E>,
    index: HashMap<ExternalId, LocalId>,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<E: Entity> Table<E> {
    /// Rebuild a table from records in local id order.
    fn from_records(records: Vec<E>) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let expected = LocalId::new(position as u64 + 1);
            if record.local_id() != Some(expected) {
                return Err(StoreError::CorruptSnapshot(format!(
                    "{} at position {position} has local id {:?}, expected {expected}",
                    E::KIND,
                    record.local_id()
                )));
            }
            if index.insert(record.external_id(), expected).is_some() {
                return Err(StoreError::CorruptSnapshot(format!(
                    "{} external id {} appears more than once",
                    E::KIND,
                    record.external_id()
                )));
            }
        }

        Ok(Self { records, index })
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, local_id: LocalId) -> Option<usize> {
        let position = usize::try_from(local_id.get().checked_sub(1)?).ok()?;
        (position < self.records.len()).then_some(position)
    }

    fn get(&self, local_id: LocalId) -> Option<&E> {
        self.position(local_id).map(|position| &self.records[position])
    }

    fn find(&self, external_id: ExternalId) -> Option<&E> {
        self.index
            .get(&external_id)
            .and_then(|local_id| self.get(*local_id))
    }

    fn save(&mut self, mut entity: E) -> Result<E, StoreError> {
        let external_id = entity.external_id();
        let owner = self.index.get(&external_id).copied();

        match entity.local_id() {
            None => {
                if let Some(existing) = owner {
                    return Err(StoreError::DuplicateExternalId {
                        kind: E::KIND,
                        external_id,
                        existing,
                    });
                }
                let local_id = LocalId::new(self.records.len() as u64 + 1);
                entity.set_local_id(local_id);
                self.index.insert(external_id, local_id);
                self.records.push(entity.clone());
                Ok(entity)
            }
            Some(local_id) => {
                let position = self.position(local_id).ok_or(StoreError::UnknownLocalId {
                    kind: E::KIND,
                    local_id,
                })?;
                if let Some(existing) = owner.filter(|owner| *owner != local_id) {
                    return Err(StoreError::DuplicateExternalId {
                        kind: E::KIND,
                        external_id,
                        existing,
                    });
                }

                let previous = self.records[position].external_id();
                if previous != external_id {
                    return Err(StoreError::Rejected {
                        kind: E::KIND,
                        external_id,
                        reason: format!("local id {local_id} belongs to {previous}"),
                    });
                }
                self.records[position] = entity.clone();
                Ok(entity)
            }
        }
    }
}

/// The six tables behind a [`MemoryStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryTables {
    planets: Table<Planet>,
    characters: Table<Character>,
    films: Table<Film>,
    species: Table<Species>,
    starships: Table<Starship>,
    vehicles: Table<Vehicle>,
}

/// An entity kind with a table in [`MemoryTables`].
pub trait TableEntity: Entity {
    fn table(tables: &MemoryTables) -> &Table<Self>;
    fn table_mut(tables: &mut MemoryTables) -> &mut Table<Self>;
}

impl TableEntity for Planet {
    fn table(tables: &MemoryTables) -> &Table<Self> {
        &tables.planets
    }
    fn table_mut(tables: &mut MemoryTables) -> &mut Table<Self> {
        &mut tables.planets
    }
}

impl TableEntity for Character {
    fn table(tables: &MemoryTables) -> &Table<Self> {
        &tables.characters
    }
    fn table_mut(tables: &mut MemoryTables) -> &mut Table<Self> {
        &mut tables.characters
    }
}

impl TableEntity for Film {
    fn table(tables: &MemoryTables) -> &Table<Self> {
        &tables.films
    }
    fn table_mut(tables: &mut MemoryTables) -> &mut Table<Self> {
        &mut tables.films
    }
}

impl TableEntity for Species {
    fn table(tables: &MemoryTables) -> &Table<Self> {
        &tables.species
    }
    fn table_mut(tables: &mut MemoryTables) -> &mut Table<Self> {
        &mut tables.species
    }
}

impl TableEntity for Starship {
    fn table(tables: &MemoryTables) -> &Table<Self> {
        &tables.starships
    }
    fn table_mut(tables: &mut MemoryTables) -> &mut Table<Self> {
        &mut tables.starships
    }
}

impl TableEntity for Vehicle {
    fn table(tables: &MemoryTables) -> &Table<Self> {
        &tables.vehicles
    }
    fn table_mut(tables: &mut MemoryTables) -> &mut Table<Self> {
        &mut tables.vehicles
    }
}

/// In-memory [`Repository`] for all six kinds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<MemoryTables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a snapshot, checking that local ids are dense and
    /// external ids unique per kind.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self, StoreError> {
        snapshot.check_version()?;

        let tables = MemoryTables {
            planets: Table::from_records(snapshot.planets)?,
            characters: Table::from_records(snapshot.characters)?,
            films: Table::from_records(snapshot.films)?,
            species: Table::from_records(snapshot.species)?,
            starships: Table::from_records(snapshot.starships)?,
            vehicles: Table::from_records(snapshot.vehicles)?,
        };

        tracing::debug!(
            "Loaded store: {} planets, {} characters, {} films, {} species, {} starships, {} vehicles",
            tables.planets.len(),
            tables.characters.len(),
            tables.films.len(),
            tables.species.len(),
            tables.starships.len(),
            tables.vehicles.len()
        );

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    /// Copy of every record, stamped with the current time.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        let tables = self.tables.read().await;
        CatalogSnapshot {
            saved_at: Some(chrono::Utc::now()),
            planets: tables.planets.records.clone(),
            characters: tables.characters.records.clone(),
            films: tables.films.records.clone(),
            species: tables.species.records.clone(),
            starships: tables.starships.records.clone(),
            vehicles: tables.vehicles.records.clone(),
            ..CatalogSnapshot::default()
        }
    }
}

#[async_trait]
impl<E: TableEntity> Repository<E> for MemoryStore {
    async fn find_by_external_id(&self, external_id: ExternalId) -> Result<Option<E>, StoreError> {
        let tables = self.tables.read().await;
        Ok(E::table(&tables).find(external_id).cloned())
    }

    async fn find_all_by_ids(&self, ids: &[LocalId]) -> Result<Vec<E>, StoreError> {
        let tables = self.tables.read().await;
        let table = E::table(&tables);
        Ok(ids.iter().filter_map(|id| table.get(*id).cloned()).collect())
    }

    async fn save(&self, entity: E) -> Result<E, StoreError> {
        let mut tables = self.tables.write().await;
        E::table_mut(&mut tables).save(entity)
    }

    async fn find_page(&self, query: &PageQuery) -> Result<Page<E>, StoreError> {
        let tables = self.tables.read().await;
        let matches = E::table(&tables)
            .records
            .iter()
            .filter(|record| query.matches(record.display_name()))
            .cloned()
            .collect();
        Ok(Page::from_matches(matches, query))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let tables = self.tables.read().await;
        Ok(E::table(&tables).len())
    }
}
