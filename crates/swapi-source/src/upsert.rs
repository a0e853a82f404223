//! Create-or-update of one remote record.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use catalog_core::{Entity, ExternalId};
use catalog_store::{CatalogStore, Repository, StoreError};

use crate::linker::LinkTally;

/// A remote record type and how it maps onto its local entity.
#[async_trait]
pub trait Upsert: DeserializeOwned + Send + Sync {
    type Target: Entity;

    /// The record's own resource reference.
    fn url(&self) -> Option<&str>;

    /// Scalar attributes for the local entity.
    fn attributes(&self, external_id: ExternalId) -> <Self::Target as Entity>::Attributes;

    /// Link `entity` with every reference this record carries.
    async fn link<S>(&self, store: &S, entity: &mut Self::Target) -> Result<LinkTally, StoreError>
    where
        S: CatalogStore + ?Sized;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The record's own reference has no usable external id.
    MissingExternalId,
    /// The record does not have the kind's shape.
    MalformedRecord,
    /// The store rejected the record.
    PersistFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOutcome {
    Created,
    Updated,
    Skipped(SkipReason),
}

/// Upsert one raw record of kind `R`.
///
/// 1. Decode the record and extract its external id.
/// 2. Load the stored entity with that id, or start a new one.
/// 3. Overwrite its scalar attributes.
/// 4. Clear its own relation sets and relink them from the record.
/// 5. Save it.
///
/// Record-level problems come back as [`RecordOutcome::Skipped`]. Only errors
/// that make the store unusable are returned as `Err`.
pub async fn upsert_record<R, S>(
    store: &S,
    raw: serde_json::Value,
) -> Result<(RecordOutcome, LinkTally), StoreError>
where
    R: Upsert,
    S: CatalogStore + Repository<R::Target> + ?Sized,
{
    let kind = <R::Target as Entity>::KIND;

    let record: R = match serde_json::from_value(raw) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!("Skipping malformed {kind} record: {e}");
            return Ok(skipped(SkipReason::MalformedRecord));
        }
    };

    let Some(external_id) = ExternalId::from_reference(record.url()) else {
        tracing::warn!(
            "Skipping {kind} record without a usable id (url: {:?})",
            record.url()
        );
        return Ok(skipped(SkipReason::MissingExternalId));
    };

    let existing = match Repository::<R::Target>::find_by_external_id(store, external_id).await {
        Ok(existing) => existing,
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            tracing::error!("Failed to look up {kind} {external_id}: {e}");
            return Ok(skipped(SkipReason::PersistFailed));
        }
    };

    let created = existing.is_none();
    let mut entity = existing.unwrap_or_else(|| <R::Target as Entity>::new(external_id));

    entity.set_attributes(record.attributes(external_id));
    entity.clear_relations();
    let links = record.link(store, &mut entity).await?;

    match Repository::<R::Target>::save(store, entity).await {
        Ok(saved) => {
            tracing::debug!(
                "Saved {kind} {external_id} '{}' ({} links)",
                saved.display_name(),
                links.linked
            );
            let outcome = if created {
                RecordOutcome::Created
            } else {
                RecordOutcome::Updated
            };
            Ok((outcome, links))
        }
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            tracing::error!("Failed to save {kind} {external_id}: {e}");
            Ok((RecordOutcome::Skipped(SkipReason::PersistFailed), links))
        }
    }
}

fn skipped(reason: SkipReason) -> (RecordOutcome, LinkTally) {
    (RecordOutcome::Skipped(reason), LinkTally::default())
}
