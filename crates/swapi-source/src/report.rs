//! Sync outcome reporting.

use chrono::{DateTime, Utc};
use serde::Serialize;

use catalog_core::EntityKind;

use crate::linker::LinkTally;
use crate::upsert::{RecordOutcome, SkipReason};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub missing_external_id: usize,
    pub malformed_record: usize,
    pub persist_failed: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.missing_external_id + self.malformed_record + self.persist_failed
    }
}

/// What happened to one kind during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindReport {
    pub kind: EntityKind,
    pub pages: usize,
    pub created: usize,
    pub updated: usize,
    pub skipped: SkipCounts,
    pub links: LinkTally,
    /// Why pagination ended before the last page, if it did.
    pub stopped_early: Option<String>,
}

impl KindReport {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            pages: 0,
            created: 0,
            updated: 0,
            skipped: SkipCounts::default(),
            links: LinkTally::default(),
            stopped_early: None,
        }
    }

    pub fn record(&mut self, outcome: RecordOutcome, links: LinkTally) {
        match outcome {
            RecordOutcome::Created => self.created += 1,
            RecordOutcome::Updated => self.updated += 1,
            RecordOutcome::Skipped(SkipReason::MissingExternalId) => {
                self.skipped.missing_external_id += 1
            }
            RecordOutcome::Skipped(SkipReason::MalformedRecord) => {
                self.skipped.malformed_record += 1
            }
            RecordOutcome::Skipped(SkipReason::PersistFailed) => self.skipped.persist_failed += 1,
        }
        self.links.absorb(links);
    }

    /// Records created or updated.
    pub fn saved(&self) -> usize {
        self.created + self.updated
    }
}

/// Outcome of one full run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub kinds: Vec<KindReport>,
}

impl SyncReport {
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            kinds: Vec::new(),
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn kind(&self, kind: EntityKind) -> Option<&KindReport> {
        self.kinds.iter().find(|report| report.kind == kind)
    }

    /// Whether any kind stopped before its last page.
    pub fn is_partial(&self) -> bool {
        self.kinds.iter().any(|report| report.stopped_early.is_some())
    }

    pub fn total_saved(&self) -> usize {
        self.kinds.iter().map(KindReport::saved).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.kinds.iter().map(|report| report.skipped.total()).sum()
    }
}
