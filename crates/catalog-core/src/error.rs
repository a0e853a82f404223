//! Error types for catalog-core.

/// Errors raised while interpreting catalog values.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A kind name did not match any of the six catalog kinds
    #[error("Unknown entity kind: '{0}' (expected one of planets, people, films, species, starships, vehicles)")]
    UnknownKind(String),
}
