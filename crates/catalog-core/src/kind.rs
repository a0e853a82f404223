//! The six catalog entity kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Planet,
    Character,
    Film,
    Species,
    Starship,
    Vehicle,
}

/// Order in which a full sync visits the kinds.
///
/// Planets and characters go first so most references already resolve in the
/// same pass. Linking does not depend on this order.
pub const SYNC_ORDER: [EntityKind; 6] = [
    EntityKind::Planet,
    EntityKind::Character,
    EntityKind::Film,
    EntityKind::Species,
    EntityKind::Starship,
    EntityKind::Vehicle,
];

impl EntityKind {
    /// Collection name used by the remote catalog (`people` for characters).
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Planet => "planets",
            EntityKind::Character => "people",
            EntityKind::Film => "films",
            EntityKind::Species => "species",
            EntityKind::Starship => "starships",
            EntityKind::Vehicle => "vehicles",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Planet => "planet",
            EntityKind::Character => "character",
            EntityKind::Film => "film",
            EntityKind::Species => "species",
            EntityKind::Starship => "starship",
            EntityKind::Vehicle => "vehicle",
        };
        f.write_str(name)
    }
}

impl FromStr for EntityKind {
    type Err = CatalogError;

    /// Accepts singular names and remote collection names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planet" | "planets" => Ok(EntityKind::Planet),
            "character" | "characters" | "people" | "person" => Ok(EntityKind::Character),
            "film" | "films" => Ok(EntityKind::Film),
            "species" => Ok(EntityKind::Species),
            "starship" | "starships" => Ok(EntityKind::Starship),
            "vehicle" | "vehicles" => Ok(EntityKind::Vehicle),
            _ => Err(CatalogError::UnknownKind(s.to_string())),
        }
    }
}
