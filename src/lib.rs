//! swapi-sync Library
//!
//! Mirrors a paginated SWAPI-style catalog into a local, searchable store.
//!
//! # Features
//!
//! - Full synchronization: walks all six collections in dependency order
//! - Two-sided relations: every link is recorded on both of its ends
//! - Idempotent re-runs: records are matched by the id in their remote URL
//! - Snapshot persistence: the store is kept in a JSON file between runs
//! - Scheduling: periodic resync with an optional run at startup
//!
//! # Workspace Crates
//!
//! - `catalog_core` - kinds, ids, entities, relations and paging types
//! - `catalog_store` - repository traits, in-memory store, JSON snapshots
//! - `swapi_sync_source` - remote fetching, upserters, linker, orchestrator
//!
//! # CLI Usage
//!
//! ```bash
//! # One manual resync
//! swapi-sync sync --base-url https://swapi.dev/api
//!
//! # Resync every 24 hours, starting now
//! swapi-sync schedule --interval 24h --run-on-start
//!
//! # Search the local mirror
//! swapi-sync query people --search sky
//! ```

use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod config;

pub use catalog_core as core;
pub use catalog_store as store;
pub use swapi_sync_source as source;

#[derive(Parser, Clone, Debug, Default)]
pub struct SourceOpts {
    /// Base URL of the remote catalog API
    #[arg(long, env = "SWAPI_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout (e.g. "30s", "2m")
    #[arg(long, env = "SWAPI_REQUEST_TIMEOUT")]
    pub request_timeout: Option<String>,
}

#[derive(Parser, Clone, Debug, Default)]
pub struct StoreOpts {
    /// Snapshot file holding the local catalog
    #[arg(long, env = "SWAPI_STORE_FILE")]
    pub store_file: Option<PathBuf>,
}
