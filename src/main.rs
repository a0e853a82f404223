//! Command-line interface for swapi-sync
//!
//! # Usage Examples
//!
//! ## Manual Resync
//! ```bash
//! # Mirror the public catalog into the default snapshot file
//! swapi-sync sync
//!
//! # Mirror a self-hosted copy into a custom snapshot
//! swapi-sync sync \
//!   --base-url http://localhost:8080/api \
//!   --store-file /var/lib/swapi-sync/catalog.json \
//!   --request-timeout 10s
//! ```
//!
//! ## Scheduled Resync
//! ```bash
//! # Resync once a day, starting immediately
//! swapi-sync schedule --interval 24h --run-on-start
//!
//! # Take every setting from a config file
//! swapi-sync --config swapi-sync.toml schedule
//! ```
//!
//! ## Querying the Mirror
//! ```bash
//! # First page of characters whose name contains "sky"
//! swapi-sync query people --search sky
//!
//! # Third page of films, five per page
//! swapi-sync query films --page 2 --size 5
//! ```
//!
//! ## Configuration Precedence
//! CLI flags (and their environment variables) override the `--config` file,
//! which overrides the built-in defaults.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use swapi_sync::commands::{run_query, run_schedule, run_sync};
use swapi_sync::config::{ConfigFile, ScheduleSettings, Settings};
use swapi_sync::core::{EntityKind, PageQuery, DEFAULT_PAGE_SIZE};
use swapi_sync::{SourceOpts, StoreOpts};

#[derive(Parser)]
#[command(name = "swapi-sync")]
#[command(about = "A tool for mirroring a SWAPI-style catalog into a local searchable store")]
#[command(long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "SWAPI_SYNC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resync the whole catalog once and print the report
    Sync {
        #[command(flatten)]
        source: SourceOpts,

        #[command(flatten)]
        store: StoreOpts,
    },

    /// Resync the whole catalog periodically until interrupted
    Schedule {
        #[command(flatten)]
        source: SourceOpts,

        #[command(flatten)]
        store: StoreOpts,

        /// Time between runs (e.g. "24h", "30m"); defaults to 24h
        #[arg(long)]
        interval: Option<String>,

        /// Also run once immediately at startup
        #[arg(long)]
        run_on_start: bool,
    },

    /// Print one page of locally stored records
    Query {
        /// Kind to read (planets, people, films, species, starships, vehicles)
        kind: EntityKind,

        #[command(flatten)]
        store: StoreOpts,

        /// Case-insensitive name (or film title) filter
        #[arg(long)]
        search: Option<String>,

        /// Zero-based page number
        #[arg(long, default_value = "0")]
        page: usize,

        /// Records per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Some(
            ConfigFile::from_file(path)
                .with_context(|| format!("Failed to load config from {path:?}"))?,
        ),
        None => None,
    };

    match cli.command {
        Commands::Sync { source, store } => {
            let settings = Settings::resolve(&source, &store, config.as_ref())?;
            let report = run_sync(&settings).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Schedule {
            source,
            store,
            interval,
            run_on_start,
        } => {
            let settings = Settings::resolve(&source, &store, config.as_ref())?;
            let schedule =
                ScheduleSettings::resolve(interval.as_deref(), run_on_start, config.as_ref())?;
            run_schedule(&settings, schedule).await?;
        }
        Commands::Query {
            kind,
            store,
            search,
            page,
            size,
        } => {
            let settings = Settings::resolve(&SourceOpts::default(), &store, config.as_ref())?;
            let page = run_query(&settings, kind, &PageQuery::new(page, size, search)).await?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
    }

    Ok(())
}
