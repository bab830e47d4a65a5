//! Error kinds for catalog operations.

use thiserror::Error;

/// Errors returned by catalog and registry operations.
///
/// These are the only two failure kinds; every operation is total over
/// well-typed inputs otherwise. A failed write leaves the catalog unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A required field was missing or empty on a write operation
    #[error("{reason}")]
    InvalidInput { reason: String },

    /// A lookup by identifier failed
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

impl CatalogError {
    /// Invalid-input error with the given reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Not-found error for an entity kind and id.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}
