//! In-memory Product Adapter
//!
//! `InMemoryProductRepository` owns the canonical copy of every product and
//! implements the optimistic-concurrency update protocol.
//!
//! # Locking
//!
//! The set of product IDs is fixed when the store is built, so the map itself
//! is never mutated and needs no lock. Each product sits behind its own
//! `RwLock`:
//!
//! - reads take the read lock and clone the record
//! - updates take the write lock for the whole check-and-apply step
//!
//! Writers on different products never contend, and a reader can never see
//! a product whose name, price and stamp come from different writes. No lock
//! is ever held across an `.await`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use rust_decimal_macros::dec;
use tracing::{debug, info, instrument, warn};

use core_kernel::{
    next_modified, Clock, DomainPort, HealthCheckResult, HealthCheckable, ProductId, SystemClock,
};

use crate::error::CatalogError;
use crate::ports::ProductRepository;
use crate::product::Product;

const ADAPTER_ID: &str = "in-memory-product-repository";

/// In-memory product store with per-product locking
#[derive(Debug)]
pub struct InMemoryProductRepository {
    products: HashMap<ProductId, RwLock<Product>>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductRepository {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Creates a store holding the default catalogue
    pub fn seeded() -> Self {
        let products = [
            Product::new(1, "Product 1", dec!(9.99)),
            Product::new(2, "Product 2", dec!(19.99)),
            Product::new(3, "Product 3", dec!(29.99)),
        ];

        Self {
            products: products
                .into_iter()
                .map(|product| (product.id(), RwLock::new(product)))
                .collect(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Creates a store holding the given products
    ///
    /// # Errors
    ///
    /// `CatalogError::DuplicateProduct` if two products share an ID
    pub fn with_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut map = HashMap::with_capacity(products.len());
        for product in products {
            let id = product.id();
            if map.insert(id, RwLock::new(product)).is_some() {
                return Err(CatalogError::DuplicateProduct(id));
            }
        }

        Ok(Self {
            products: map,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replaces the time source used to stamp committed updates
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the number of products held
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the store holds no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns the IDs of all products, in ascending order
    pub fn ids(&self) -> Vec<ProductId> {
        let mut ids: Vec<_> = self.products.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns a copy of a product, blocking only while a write to the same product is in flight
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn get(&self, id: ProductId) -> Option<Product> {
        debug!("Fetching product by ID");
        self.products.get(&id).map(|slot| slot.read().clone())
    }

    /// Commits `candidate` unless the stored product is newer than the version it carries
    ///
    /// The freshness check and the write both run under the product's write lock.
    /// A product whose stamp cannot advance any further is never overwritten.
    #[instrument(skip(self, candidate), fields(product_id = %candidate.id()))]
    pub fn update(&self, candidate: &Product) -> Result<bool, CatalogError> {
        let Some(slot) = self.products.get(&candidate.id()) else {
            debug!("Update target does not exist");
            return Ok(false);
        };

        let mut stored = slot.write();
        if stored.is_newer_than(candidate) {
            warn!(
                stored = %stored.last_modified(),
                attempted = %candidate.last_modified(),
                "Rejecting stale update"
            );
            return Err(CatalogError::conflict(
                candidate.id(),
                stored.last_modified(),
                candidate.last_modified(),
            ));
        }

        let Some(stamp) = next_modified(stored.last_modified(), self.clock.now()) else {
            warn!(stored = %stored.last_modified(), "No newer stamp available");
            return Err(CatalogError::VersionExhausted {
                id: candidate.id(),
                stored: stored.last_modified(),
            });
        };
        stored.apply(candidate, stamp);

        info!(last_modified = %stamp, "Product updated");
        Ok(true)
    }
}

impl DomainPort for InMemoryProductRepository {}

#[async_trait]
impl HealthCheckable for InMemoryProductRepository {
    async fn health_check(&self) -> HealthCheckResult {
        let result = HealthCheckResult::healthy(ADAPTER_ID).with_record_count(self.len());

        let exhausted = self
            .products
            .values()
            .filter(|slot| {
                let stamp = slot.read().last_modified();
                next_modified(stamp, stamp).is_none()
            })
            .count();
        if exhausted > 0 {
            return result.degraded(format!("{} product(s) can no longer be updated", exhausted));
        }
        result
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.get(id))
    }

    async fn update_product(&self, product: &Product) -> Result<bool, CatalogError> {
        self.update(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use core_kernel::ManualClock;

    fn repository_at_t0() -> (InMemoryProductRepository, Arc<ManualClock>) {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = Arc::new(ManualClock::new(t0));
        let repository = InMemoryProductRepository::with_products(vec![Product::with_last_modified(
            1,
            "Product 1",
            dec!(9.99),
            t0,
        )])
        .unwrap()
        .with_clock(clock.clone());
        (repository, clock)
    }

    #[test]
    fn test_seeded_catalogue() {
        let repository = InMemoryProductRepository::seeded();

        assert_eq!(repository.len(), 3);
        assert_eq!(
            repository.ids(),
            vec![ProductId::new(1), ProductId::new(2), ProductId::new(3)]
        );
        assert_eq!(repository.get(ProductId::new(2)).unwrap().price, dec!(19.99));
    }

    #[test]
    fn test_empty_store() {
        let repository = InMemoryProductRepository::new();
        assert!(repository.is_empty());
        assert!(repository.get(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_duplicate_seed_rejected() {
        let result = InMemoryProductRepository::with_products(vec![
            Product::new(1, "A", dec!(1)),
            Product::new(1, "B", dec!(2)),
        ]);

        assert!(matches!(
            result,
            Err(CatalogError::DuplicateProduct(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_update_stamps_from_clock() {
        let (repository, clock) = repository_at_t0();
        let read = repository.get(ProductId::new(1)).unwrap();

        clock.advance(Duration::seconds(3));
        let mut candidate = read.clone();
        candidate.name = "Updated".to_string();

        assert!(repository.update(&candidate).unwrap());
        let stored = repository.get(ProductId::new(1)).unwrap();
        assert_eq!(stored.last_modified(), read.last_modified() + Duration::seconds(3));
    }

    #[test]
    fn test_update_with_frozen_clock_still_advances_version() {
        let (repository, _clock) = repository_at_t0();
        let read = repository.get(ProductId::new(1)).unwrap();

        assert!(repository.update(&read).unwrap());
        let stored = repository.get(ProductId::new(1)).unwrap();
        assert!(stored.is_newer_than(&read));
    }

    #[test]
    fn test_stale_update_leaves_record_untouched() {
        let (repository, clock) = repository_at_t0();
        let read = repository.get(ProductId::new(1)).unwrap();

        clock.advance(Duration::seconds(1));
        let mut winner = read.clone();
        winner.name = "Modified".to_string();
        repository.update(&winner).unwrap();
        let after_winner = repository.get(ProductId::new(1)).unwrap();

        let mut loser = read;
        loser.name = "Updated".to_string();
        let error = repository.update(&loser).unwrap_err();

        assert!(error.is_conflict());
        assert_eq!(repository.get(ProductId::new(1)).unwrap(), after_winner);
    }

    #[test]
    fn test_update_missing_product_returns_false() {
        let (repository, _clock) = repository_at_t0();
        let candidate = Product::new(99, "Ghost", dec!(1.00));

        assert!(!repository.update(&candidate).unwrap());
        assert_eq!(repository.len(), 1);
    }

    #[tokio::test]
    async fn test_health_check_reports_count() {
        let repository = InMemoryProductRepository::seeded();
        let health = repository.health_check().await;

        assert!(health.is_healthy());
        assert_eq!(health.adapter_id, ADAPTER_ID);
        assert_eq!(health.record_count, Some(3));
    }

    #[tokio::test]
    async fn test_health_check_degraded_by_exhausted_version() {
        let last = chrono::DateTime::<Utc>::MAX_UTC;
        let repository = InMemoryProductRepository::with_products(vec![
            Product::new(1, "Product 1", dec!(9.99)),
            Product::with_last_modified(2, "Product 2", dec!(19.99), last),
        ])
        .unwrap();

        let health = repository.health_check().await;
        assert_eq!(health.status, core_kernel::AdapterHealth::Degraded);
        assert_eq!(health.record_count, Some(2));
        assert!(health.message.unwrap().starts_with("1 product(s)"));

        let candidate = repository.get(ProductId::new(2)).unwrap();
        let error = repository.update(&candidate).unwrap_err();
        assert!(!error.is_conflict());
        assert_eq!(error.product_id(), ProductId::new(2));
    }
}
