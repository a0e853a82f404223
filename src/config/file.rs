//! TOML configuration file.
//!
//! ```toml
//! [source]
//! base_url = "https://swapi.dev/api"
//! request_timeout = "30s"
//!
//! [source.endpoints]
//! people = "https://mirror.example/api/people/"
//!
//! [store]
//! file = "/var/lib/swapi-sync/catalog.json"
//!
//! [schedule]
//! interval = "24h"
//! run_on_start = true
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub source: SourceSection,
    pub store: StoreSection,
    pub schedule: ScheduleSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceSection {
    pub base_url: Option<String>,
    pub request_timeout: Option<String>,
    pub endpoints: EndpointOverrides,
}

/// Per-collection URLs replacing the ones derived from `base_url`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EndpointOverrides {
    pub planets: Option<String>,
    pub people: Option<String>,
    pub films: Option<String>,
    pub species: Option<String>,
    pub starships: Option<String>,
    pub vehicles: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreSection {
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleSection {
    pub interval: Option<String>,
    pub run_on_start: Option<bool>,
}

impl ConfigFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
