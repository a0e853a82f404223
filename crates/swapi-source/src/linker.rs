//! Two-sided relation linking.
//!
//! For every reference on a remote record the linker resolves the target by
//! external id and, when found, records the link on the target (persisted
//! right away through the target's repository) and then on the source. A
//! target that is not stored yet is skipped: the kind synced later links the
//! pair from its own side.

use serde::Serialize;

use catalog_core::{Entity, ExternalId, Relation};
use catalog_store::{Repository, StoreError};

/// Per-reference outcomes of linking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkTally {
    /// Linked on both sides.
    pub linked: usize,
    /// Target not stored (yet).
    pub unresolved: usize,
    /// Reference without a usable external id.
    pub malformed: usize,
    /// Target lookup or save rejected by the store.
    pub failed: usize,
}

impl LinkTally {
    pub fn absorb(&mut self, other: LinkTally) {
        self.linked += other.linked;
        self.unresolved += other.unresolved;
        self.malformed += other.malformed;
        self.failed += other.failed;
    }

    pub fn total(&self) -> usize {
        self.linked + self.unresolved + self.malformed + self.failed
    }
}

/// Link `source` with every resolvable reference in `references`.
///
/// Only errors that make the store unusable are returned; anything else is
/// logged, counted in `tally` and the reference skipped.
pub async fn link_all<S, Src, Tgt>(
    store: &S,
    source: &mut Src,
    relation: &Relation<Src, Tgt>,
    references: &[Option<String>],
    tally: &mut LinkTally,
) -> Result<(), StoreError>
where
    S: Repository<Tgt> + ?Sized,
    Src: Entity,
    Tgt: Entity,
{
    let source_id = source.external_id();

    for reference in references {
        let Some(target_id) = ExternalId::from_reference(reference.as_deref()) else {
            tracing::warn!(
                "Skipping malformed {} reference {:?} on {} {source_id}",
                relation.name,
                reference,
                Src::KIND
            );
            tally.malformed += 1;
            continue;
        };

        let mut target = match store.find_by_external_id(target_id).await {
            Ok(Some(target)) => target,
            Ok(None) => {
                tracing::debug!(
                    "{} {target_id} referenced by {} {source_id} ({}) is not stored yet",
                    Tgt::KIND,
                    Src::KIND,
                    relation.name
                );
                tally.unresolved += 1;
                continue;
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::error!(
                    "Failed to look up {} {target_id} for {} {source_id}: {e}",
                    Tgt::KIND,
                    Src::KIND
                );
                tally.failed += 1;
                continue;
            }
        };

        (relation.attach_inverse)(&mut target, source_id);

        match store.save(target).await {
            Ok(_) => {
                (relation.attach)(source, target_id);
                tally.linked += 1;
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::error!(
                    "Failed to save {} {target_id} while linking {} {source_id}: {e}",
                    Tgt::KIND,
                    Src::KIND
                );
                tally.failed += 1;
            }
        }
    }

    Ok(())
}
