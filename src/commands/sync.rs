use anyhow::Context;
use std::sync::Arc;

use catalog_store::SnapshotFile;
use swapi_sync_source::{HttpPageFetcher, PageFetcher, SyncEngine, SyncReport};

use super::{load_store, save_store};
use crate::config::Settings;

/// Run one resync against the configured remote catalog.
pub async fn run_sync(settings: &Settings) -> anyhow::Result<SyncReport> {
    let fetcher =
        HttpPageFetcher::new(settings.request_timeout).context("Failed to create HTTP client")?;
    sync_once(settings, fetcher).await
}

/// Load the snapshot, sync every kind through `fetcher`, and write the
/// snapshot back.
///
/// The snapshot is written even when the run aborts so that records saved
/// before the failure are kept.
pub async fn sync_once<F: PageFetcher>(
    settings: &Settings,
    fetcher: F,
) -> anyhow::Result<SyncReport> {
    let file = SnapshotFile::new(&settings.store_file);
    let store = Arc::new(load_store(&file)?);

    let engine = SyncEngine::new(Arc::clone(&store), fetcher, settings.endpoints.clone());
    let result = engine.sync_all().await;

    match result {
        Ok(report) => {
            save_store(&store, &file).await?;
            Ok(report)
        }
        Err(e) => {
            tracing::warn!(
                "Keeping {} records saved before the failure",
                e.report().total_saved()
            );
            if let Err(save_err) = save_store(&store, &file).await {
                tracing::error!("{save_err:#}");
            }
            Err(e).context("Catalog sync failed")
        }
    }
}
