//! Catalog domain errors
//!
//! A missing product is not an error in this domain: lookups return `None`
//! and updates return `false`. The errors here are the conditions a caller
//! must be able to tell apart from "not found".

use chrono::{DateTime, Utc};
use core_kernel::ProductId;
use thiserror::Error;

/// Errors that can occur in the catalog domain
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The stored product was modified after the caller last read it
    #[error("Concurrency conflict on product {id}: stored {stored} is newer than {attempted}")]
    ConcurrencyConflict {
        id: ProductId,
        stored: DateTime<Utc>,
        attempted: DateTime<Utc>,
    },

    /// The stored stamp is the last representable instant, so no later write can be versioned
    #[error("Version exhausted on product {id}: no stamp is newer than {stored}")]
    VersionExhausted { id: ProductId, stored: DateTime<Utc> },

    /// Two products with the same ID were supplied when seeding a store
    #[error("Duplicate product: {0}")]
    DuplicateProduct(ProductId),
}

impl CatalogError {
    /// Creates a ConcurrencyConflict error
    pub fn conflict(id: ProductId, stored: DateTime<Utc>, attempted: DateTime<Utc>) -> Self {
        CatalogError::ConcurrencyConflict {
            id,
            stored,
            attempted,
        }
    }

    /// Returns true if a newer write superseded the caller's version
    pub fn is_conflict(&self) -> bool {
        matches!(self, CatalogError::ConcurrencyConflict { .. })
    }

    /// Returns the product this error concerns
    pub fn product_id(&self) -> ProductId {
        match self {
            CatalogError::ConcurrencyConflict { id, .. } => *id,
            CatalogError::VersionExhausted { id, .. } => *id,
            CatalogError::DuplicateProduct(id) => *id,
        }
    }
}
