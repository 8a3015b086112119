//! Pre-built Test Fixtures
//!
//! Ready-to-use test data. Timestamps are fixed so tests can reason about
//! exact versions.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::ProductId;
use domain_catalog::Product;
use rust_decimal_macros::dec;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Instant the catalogue is seeded at (Jan 1, 2024)
    pub fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// One second after seeding
    pub fn t1() -> DateTime<Utc> {
        Self::t0() + Duration::seconds(1)
    }

    /// Two seconds after seeding
    pub fn t2() -> DateTime<Utc> {
        Self::t0() + Duration::seconds(2)
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// ID of the first seeded product
    pub fn first() -> ProductId {
        ProductId::new(1)
    }

    /// ID no fixture store ever holds
    pub fn missing() -> ProductId {
        ProductId::new(404)
    }
}

/// Fixture for product test data
pub struct ProductFixtures;

impl ProductFixtures {
    /// `Product 1` at 9.99, stamped `t0`
    pub fn product_1() -> Product {
        Product::with_last_modified(1, "Product 1", dec!(9.99), TemporalFixtures::t0())
    }

    /// `Product 2` at 19.99, stamped `t0`
    pub fn product_2() -> Product {
        Product::with_last_modified(2, "Product 2", dec!(19.99), TemporalFixtures::t0())
    }

    /// `Product 3` at 29.99, stamped `t0`
    pub fn product_3() -> Product {
        Product::with_last_modified(3, "Product 3", dec!(29.99), TemporalFixtures::t0())
    }

    /// The default three-product catalogue, all stamped `t0`
    pub fn catalogue() -> Vec<Product> {
        vec![Self::product_1(), Self::product_2(), Self::product_3()]
    }

    /// The update candidate used by the lost-update scenarios: product 1
    /// renamed to `Updated` at 29.99, carrying version `t0`
    pub fn updated_product_1() -> Product {
        Product::with_last_modified(1, "Updated", dec!(29.99), TemporalFixtures::t0())
    }
}
