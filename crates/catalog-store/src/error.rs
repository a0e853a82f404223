//! Store error type.

use catalog_core::{EntityKind, ExternalId, LocalId};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} with external id {external_id} is already stored as local id {existing}")]
    DuplicateExternalId {
        kind: EntityKind,
        external_id: ExternalId,
        existing: LocalId,
    },

    #[error("No {kind} with local id {local_id}")]
    UnknownLocalId { kind: EntityKind, local_id: LocalId },

    #[error("{kind} {external_id} rejected: {reason}")]
    Rejected {
        kind: EntityKind,
        external_id: ExternalId,
        reason: String,
    },

    #[error("Snapshot is inconsistent: {0}")]
    CorruptSnapshot(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether the store as a whole can no longer serve requests.
    ///
    /// Non-fatal errors concern a single record; the caller may skip that
    /// record and continue.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            StoreError::Unavailable(_) | StoreError::Io(_) | StoreError::CorruptSnapshot(_)
        )
    }
}
