//! Full-catalog sync orchestration.

use std::sync::Arc;

use catalog_core::{Entity, EntityKind, SYNC_ORDER};
use catalog_store::{CatalogStore, Repository, StoreError};

use crate::cursor::PageCursor;
use crate::endpoints::Endpoints;
use crate::fetcher::PageFetcher;
use crate::kinds::{
    CharacterRecord, FilmRecord, PlanetRecord, SpeciesRecord, StarshipRecord, VehicleRecord,
};
use crate::report::{KindReport, SyncReport};
use crate::upsert::{upsert_record, Upsert};

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The store stopped serving requests. Kinds after `kind` were not run;
    /// records saved before the failure stay in place.
    #[error("Sync aborted while syncing {kind}")]
    Aborted {
        kind: EntityKind,
        #[source]
        source: StoreError,
        report: Box<SyncReport>,
    },
}

impl SyncError {
    /// Progress made before the run was aborted.
    pub fn report(&self) -> &SyncReport {
        match self {
            SyncError::Aborted { report, .. } => report,
        }
    }
}

/// Mirrors the remote catalog into a store.
pub struct SyncEngine<S, F> {
    store: Arc<S>,
    fetcher: F,
    endpoints: Endpoints,
}

impl<S: CatalogStore, F: PageFetcher> SyncEngine<S, F> {
    pub fn new(store: Arc<S>, fetcher: F, endpoints: Endpoints) -> Self {
        Self {
            store,
            fetcher,
            endpoints,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Sync all six kinds, one after another in [`SYNC_ORDER`].
    ///
    /// A kind whose pagination fails is reported as stopped early and the run
    /// moves on. Only a store failure aborts the run.
    pub async fn sync_all(&self) -> Result<SyncReport, SyncError> {
        let mut report = SyncReport::start();
        tracing::info!("Starting catalog sync");

        for kind in SYNC_ORDER {
            let mut kind_report = KindReport::new(kind);
            let result = self.sync_kind(kind, &mut kind_report).await;
            report.kinds.push(kind_report);

            if let Err(source) = result {
                report.finish();
                tracing::error!("Catalog sync aborted while syncing {kind}: {source}");
                return Err(SyncError::Aborted {
                    kind,
                    source,
                    report: Box::new(report),
                });
            }
        }

        report.finish();
        tracing::info!(
            "Catalog sync completed: {} records saved, {} skipped{}",
            report.total_saved(),
            report.total_skipped(),
            if report.is_partial() {
                " (some kinds stopped early)"
            } else {
                ""
            }
        );

        Ok(report)
    }

    async fn sync_kind(&self, kind: EntityKind, report: &mut KindReport) -> Result<(), StoreError> {
        match kind {
            EntityKind::Planet => self.sync_records::<PlanetRecord>(report).await,
            EntityKind::Character => self.sync_records::<CharacterRecord>(report).await,
            EntityKind::Film => self.sync_records::<FilmRecord>(report).await,
            EntityKind::Species => self.sync_records::<SpeciesRecord>(report).await,
            EntityKind::Starship => self.sync_records::<StarshipRecord>(report).await,
            EntityKind::Vehicle => self.sync_records::<VehicleRecord>(report).await,
        }
    }

    async fn sync_records<R>(&self, report: &mut KindReport) -> Result<(), StoreError>
    where
        R: Upsert,
        S: Repository<R::Target>,
    {
        let kind = <R::Target as Entity>::KIND;
        let url = self.endpoints.url_for(kind);
        tracing::info!("Syncing {kind} from {url}");

        let mut cursor = PageCursor::new(&self.fetcher, url);
        while let Some(page) = cursor.next_page().await {
            let page = match page {
                Ok(page) => page,
                Err(e) => {
                    let cause = error_chain(&e);
                    tracing::error!("Stopped syncing {kind} early: {cause}");
                    report.stopped_early = Some(cause);
                    break;
                }
            };
            report.pages += 1;
            tracing::debug!(
                "Processing {} {kind} records from {}",
                page.records.len(),
                page.url
            );

            for raw in page.records {
                let (outcome, links) = upsert_record::<R, S>(self.store.as_ref(), raw).await?;
                report.record(outcome, links);
            }
        }

        tracing::info!(
            "Synced {kind}: {} created, {} updated, {} skipped, {} links ({} unresolved) over {} pages",
            report.created,
            report.updated,
            report.skipped.total(),
            report.links.linked,
            report.links.unresolved,
            report.pages
        );
        Ok(())
    }
}

/// `error: cause: cause ...` on one line.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
