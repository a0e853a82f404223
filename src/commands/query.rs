use anyhow::Context;
use serde::Serialize;

use catalog_core::{
    Character, Entity, EntityKind, Film, PageQuery, Planet, Species, Starship, Vehicle,
};
use catalog_store::{MemoryStore, Repository, SnapshotFile};

use super::load_store;
use crate::config::Settings;

/// Read one page of `kind` from the local snapshot as JSON.
pub async fn run_query(
    settings: &Settings,
    kind: EntityKind,
    query: &PageQuery,
) -> anyhow::Result<serde_json::Value> {
    let store = load_store(&SnapshotFile::new(&settings.store_file))?;

    match kind {
        EntityKind::Planet => page_json::<Planet>(&store, query).await,
        EntityKind::Character => page_json::<Character>(&store, query).await,
        EntityKind::Film => page_json::<Film>(&store, query).await,
        EntityKind::Species => page_json::<Species>(&store, query).await,
        EntityKind::Starship => page_json::<Starship>(&store, query).await,
        EntityKind::Vehicle => page_json::<Vehicle>(&store, query).await,
    }
}

async fn page_json<E>(store: &MemoryStore, query: &PageQuery) -> anyhow::Result<serde_json::Value>
where
    E: Entity + Serialize,
    MemoryStore: Repository<E>,
{
    let page = Repository::<E>::find_page(store, query)
        .await
        .with_context(|| format!("Failed to query {}", E::KIND.collection()))?;
    Ok(serde_json::to_value(page)?)
}
