//! Runtime settings.
//!
//! Values come from CLI flags (or their environment variables), then the
//! optional TOML file, then built-in defaults.

mod duration;
mod file;

pub use duration::parse_duration;
pub use file::{ConfigFile, EndpointOverrides, ScheduleSection, SourceSection, StoreSection};

use anyhow::Context;
use std::path::PathBuf;
use std::time::Duration;

use swapi_sync_source::{Endpoints, DEFAULT_BASE_URL};

use crate::{SourceOpts, StoreOpts};

pub const DEFAULT_STORE_FILE: &str = ".swapi-sync/catalog.json";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "30s";
pub const DEFAULT_SCHEDULE_INTERVAL: &str = "24h";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoints: Endpoints,
    pub request_timeout: Duration,
    pub store_file: PathBuf,
}

impl Settings {
    pub fn resolve(
        source: &SourceOpts,
        store: &StoreOpts,
        file: Option<&ConfigFile>,
    ) -> anyhow::Result<Self> {
        let section = file.map(|f| &f.source);

        let base_url = source
            .base_url
            .as_deref()
            .or_else(|| section.and_then(|s| s.base_url.as_deref()))
            .unwrap_or(DEFAULT_BASE_URL);
        let mut endpoints = Endpoints::from_base_url(base_url);
        if let Some(section) = section {
            apply_overrides(&mut endpoints, &section.endpoints);
        }

        let timeout = source
            .request_timeout
            .as_deref()
            .or_else(|| section.and_then(|s| s.request_timeout.as_deref()))
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        let request_timeout = parse_duration(timeout)
            .with_context(|| format!("Invalid request timeout: {timeout}"))?;

        let store_file = store
            .store_file
            .clone()
            .or_else(|| file.and_then(|f| f.store.file.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));

        Ok(Self {
            endpoints,
            request_timeout,
            store_file,
        })
    }
}

fn apply_overrides(endpoints: &mut Endpoints, overrides: &EndpointOverrides) {
    let pairs = [
        (&mut endpoints.planets, &overrides.planets),
        (&mut endpoints.people, &overrides.people),
        (&mut endpoints.films, &overrides.films),
        (&mut endpoints.species, &overrides.species),
        (&mut endpoints.starships, &overrides.starships),
        (&mut endpoints.vehicles, &overrides.vehicles),
    ];
    for (url, replacement) in pairs {
        if let Some(replacement) = replacement {
            *url = replacement.clone();
        }
    }
}

/// Timing of the `schedule` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSettings {
    pub interval: Duration,
    pub run_on_start: bool,
}

impl ScheduleSettings {
    pub fn resolve(
        interval: Option<&str>,
        run_on_start: bool,
        file: Option<&ConfigFile>,
    ) -> anyhow::Result<Self> {
        let section = file.map(|f| &f.schedule);

        let interval = interval
            .or_else(|| section.and_then(|s| s.interval.as_deref()))
            .unwrap_or(DEFAULT_SCHEDULE_INTERVAL);
        let parsed = parse_duration(interval)
            .with_context(|| format!("Invalid schedule interval: {interval}"))?;

        // The flag can only switch it on; the file decides otherwise.
        let run_on_start =
            run_on_start || section.and_then(|s| s.run_on_start).unwrap_or(false);

        Ok(Self {
            interval: parsed,
            run_on_start,
        })
    }
}
