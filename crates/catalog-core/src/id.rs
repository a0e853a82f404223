//! Identifiers for catalog records.
//!
//! Every remote resource is addressed by a reference such as
//! `https://swapi.dev/api/people/1/`. The trailing numeric segment is the
//! record's [`ExternalId`], the only key used to match remote records with
//! local ones. The store assigns a separate [`LocalId`] on first save.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive integer id embedded in a remote resource reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalId(u32);

impl ExternalId {
    /// Wrap a raw value. Zero is not a valid id.
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Extract the id from a resource reference.
    ///
    /// Takes the last non-blank `/`-separated segment and parses it as a
    /// positive integer. Returns `None` for a missing or blank reference, a
    /// non-numeric trailing segment, or a value that does not fit. Never panics.
    pub fn from_reference(reference: Option<&str>) -> Option<Self> {
        let reference = reference?.trim();
        if reference.is_empty() {
            return None;
        }

        let segment = reference
            .rsplit('/')
            .map(str::trim)
            .find(|segment| !segment.is_empty())?;

        if !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        segment.parse::<u32>().ok().and_then(Self::new)
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Surrogate id assigned by the store on first save; stable across updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalId(u64);

impl LocalId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
