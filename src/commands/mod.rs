//! Command implementations behind the CLI.
//!
//! Every command works on the snapshot file named in
//! [`Settings`](crate::config::Settings). It is loaded into a [`MemoryStore`]
//! first and, for the sync commands, written back after each run.

mod query;
mod schedule;
mod sync;

pub use query::run_query;
pub use schedule::{run_schedule, run_schedule_with};
pub use sync::{run_sync, sync_once};

use anyhow::Context;

use catalog_store::{MemoryStore, SnapshotFile};

/// Open the store kept in `file`, or an empty one if the file does not exist
/// yet.
pub fn load_store(file: &SnapshotFile) -> anyhow::Result<MemoryStore> {
    let snapshot = file
        .load()
        .with_context(|| format!("Failed to read snapshot {}", file.path().display()))?;

    match snapshot {
        Some(snapshot) => {
            tracing::info!(
                "Loaded {} records from {}",
                snapshot.record_count(),
                file.path().display()
            );
            MemoryStore::from_snapshot(snapshot)
                .with_context(|| format!("Failed to restore snapshot {}", file.path().display()))
        }
        None => {
            tracing::info!(
                "No snapshot at {}, starting with an empty store",
                file.path().display()
            );
            Ok(MemoryStore::new())
        }
    }
}

pub async fn save_store(store: &MemoryStore, file: &SnapshotFile) -> anyhow::Result<()> {
    file.save(&store.snapshot().await)
        .with_context(|| format!("Failed to write snapshot {}", file.path().display()))
}
