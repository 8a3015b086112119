//! Test Data Builders
//!
//! Builders that let tests specify only the fields they care about.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use core_kernel::{ManualClock, ProductId};
use domain_catalog::{InMemoryProductRepository, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{ProductFixtures, TemporalFixtures};

/// Builder for constructing test products
pub struct ProductBuilder {
    id: ProductId,
    name: String,
    price: Decimal,
    last_modified: DateTime<Utc>,
}

impl Default for ProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ProductId::new(1),
            name: "Test Product".to_string(),
            price: dec!(10.00),
            last_modified: TemporalFixtures::t0(),
        }
    }

    /// Starts from an existing product, e.g. one just read from a store
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name.clone(),
            price: product.price,
            last_modified: product.last_modified(),
        }
    }

    /// Sets the product ID
    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the price
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Sets the version the product carries
    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = last_modified;
        self
    }

    /// Builds the product
    pub fn build(self) -> Product {
        Product::with_last_modified(self.id, self.name, self.price, self.last_modified)
    }
}

/// Builder for stores driven by a manual clock
///
/// The clock starts at `TemporalFixtures::t0()` and only moves when the test
/// advances it, so every stamp the store hands out is predictable.
pub struct TestStoreBuilder {
    products: Vec<Product>,
    clock_start: DateTime<Utc>,
}

impl Default for TestStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStoreBuilder {
    /// Creates a builder holding the fixture catalogue
    pub fn new() -> Self {
        Self {
            products: ProductFixtures::catalogue(),
            clock_start: TemporalFixtures::t0(),
        }
    }

    /// Replaces the seeded products
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    /// Starts the clock somewhere other than `t0`
    pub fn with_clock_start(mut self, start: DateTime<Utc>) -> Self {
        self.clock_start = start;
        self
    }

    /// Builds the store and hands back the clock that drives it
    ///
    /// # Panics
    ///
    /// Panics if the seeded products contain duplicate IDs
    pub fn build(self) -> (Arc<InMemoryProductRepository>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(self.clock_start));
        let store = InMemoryProductRepository::with_products(self.products)
            .expect("test catalogue must not contain duplicate IDs")
            .with_clock(clock.clone());
        (Arc::new(store), clock)
    }
}
