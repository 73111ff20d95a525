use thiserror::Error;

use super::model::CreatorId;
use super::validation::ValidationError;
use crate::store::StoreError;

/// Errors returned by [`CreatorClient`](super::CreatorClient) operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Required field blank; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transport, status, decode or configuration failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A write scoped to this id matched no row.
    #[error("Creator {id} not found")]
    NotFound { id: CreatorId },

    /// An insert succeeded but the store echoed no row back.
    #[error("Store returned no representation for the inserted creator")]
    EmptyRepresentation,
}

impl CatalogError {
    /// Whether the error was raised locally, before any request.
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }

    /// HTTP status, when the store rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Store(err) => err.status(),
            _ => None,
        }
    }
}
