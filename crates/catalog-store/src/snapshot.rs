//! JSON snapshot persistence.
//!
//! The whole store is written as one pretty-printed JSON document. Writes go
//! to a sibling temporary file that is then renamed over the target, so a
//! crash mid-write leaves the previous snapshot intact.

use catalog_core::{Character, Film, Planet, Species, Starship, Vehicle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub version: u32,
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub planets: Vec<Planet>,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub films: Vec<Film>,
    #[serde(default)]
    pub species: Vec<Species>,
    #[serde(default)]
    pub starships: Vec<Starship>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: None,
            planets: Vec::new(),
            characters: Vec::new(),
            films: Vec::new(),
            species: Vec::new(),
            starships: Vec::new(),
            vehicles: Vec::new(),
        }
    }
}

impl CatalogSnapshot {
    pub(crate) fn check_version(&self) -> Result<(), StoreError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(StoreError::CorruptSnapshot(format!(
                "unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
                self.version
            )));
        }
        Ok(())
    }

    /// Total number of records across all kinds.
    pub fn record_count(&self) -> usize {
        self.planets.len()
            + self.characters.len()
            + self.films.len()
            + self.species.len()
            + self.starships.len()
            + self.vehicles.len()
    }
}

/// A snapshot on the local filesystem.
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. Returns None if the file doesn't exist.
    pub fn load(&self) -> Result<Option<CatalogSnapshot>, StoreError> {
        if !self.path.exists() {
            tracing::debug!("No snapshot at {}", self.path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&content)?;
        Ok(Some(snapshot))
    }

    pub fn save(&self, snapshot: &CatalogSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, serde_json::to_string_pretty(snapshot)?)?;
        std::fs::rename(&tmp, &self.path)?;

        tracing::info!(
            "Stored {} records to {}",
            snapshot.record_count(),
            self.path.display()
        );
        Ok(())
    }
}
