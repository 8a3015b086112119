//! Custom Test Assertions
//!
//! Assertion helpers for update outcomes that give more meaningful failure
//! messages than a bare `assert!`.

use core_kernel::ProductId;
use domain_catalog::{CatalogError, Product};

/// Asserts that an update was rejected as stale, for the given product
///
/// # Panics
///
/// Panics if the outcome is anything other than `ConcurrencyConflict` on `id`
pub fn assert_conflict(outcome: &Result<bool, CatalogError>, id: ProductId) {
    match outcome {
        Err(CatalogError::ConcurrencyConflict {
            id: conflicted,
            stored,
            attempted,
        }) => {
            assert_eq!(*conflicted, id, "Conflict reported for the wrong product");
            assert!(
                stored > attempted,
                "Conflict reported although stored version {} is not newer than {}",
                stored,
                attempted
            );
        }
        other => panic!("Expected ConcurrencyConflict on {}, got {:?}", id, other),
    }
}

/// Asserts that an update was committed
pub fn assert_committed(outcome: &Result<bool, CatalogError>) {
    assert!(
        matches!(outcome, Ok(true)),
        "Expected a committed update, got {:?}",
        outcome
    );
}

/// Asserts that `after` carries the same data as `candidate` and a newer version than `before`
pub fn assert_applied(before: &Product, candidate: &Product, after: &Product) {
    assert_eq!(after.id(), before.id(), "Product identity changed");
    assert_eq!(after.name, candidate.name, "Name was not applied");
    assert_eq!(after.price, candidate.price, "Price was not applied");
    assert!(
        after.last_modified() > before.last_modified(),
        "Version did not advance: before={}, after={}",
        before.last_modified(),
        after.last_modified()
    );
}
