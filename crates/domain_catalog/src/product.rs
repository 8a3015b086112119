//! Product records
//!
//! A `Product` is both the stored record and the candidate a caller submits
//! for an update. Its `last_modified` timestamp is the version token: a
//! candidate carries the version its author last observed, and the store
//! replaces it with a fresh stamp when the update commits.

use chrono::{DateTime, Utc};
use core_kernel::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: Decimal,
    last_modified: DateTime<Utc>,
}

impl Product {
    /// Creates a product stamped with the current time
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Decimal) -> Self {
        Self::with_last_modified(id, name, price, Utc::now())
    }

    /// Creates a product carrying an explicit version
    ///
    /// Use this to build an update candidate from a version observed earlier.
    pub fn with_last_modified(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            last_modified,
        }
    }

    /// Returns the product identifier
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the version this record carries
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Returns true if this record's version is strictly newer than `other`'s
    pub fn is_newer_than(&self, other: &Product) -> bool {
        self.last_modified > other.last_modified
    }

    /// Copies the mutable fields from `candidate` and records the commit stamp
    pub(crate) fn apply(&mut self, candidate: &Product, stamp: DateTime<Utc>) {
        self.name.clone_from(&candidate.name);
        self.price = candidate.price;
        self.last_modified = stamp;
    }
}
