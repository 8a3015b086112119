//! Catalog Domain Ports
//!
//! The `ProductRepository` trait is what the catalog domain needs from its
//! data source. The crate ships one adapter, `InMemoryProductRepository`;
//! services only ever see the trait.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_catalog::{ProductRepository, ProductService};
//! use std::sync::Arc;
//!
//! let repository: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::seeded());
//! let service = ProductService::new(repository);
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, ProductId};

use crate::error::CatalogError;
use crate::product::Product;

/// Storage port for products with optimistic concurrency control
///
/// Implementations must treat the freshness check and the write of
/// `update_product` as a single atomic step per product.
#[async_trait]
pub trait ProductRepository: DomainPort + HealthCheckable {
    /// Retrieves a copy of a product by ID
    ///
    /// # Returns
    ///
    /// The product if found, `None` otherwise
    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;

    /// Applies a candidate's name and price if the stored product has not moved on
    ///
    /// # Arguments
    ///
    /// * `product` - The caller's intended state, carrying the `last_modified`
    ///   it observed when it last read the product
    ///
    /// # Returns
    ///
    /// `true` if the update was committed, `false` if no product has that ID
    ///
    /// # Errors
    ///
    /// `CatalogError::ConcurrencyConflict` if the stored version is strictly
    /// newer than the candidate's
    async fn update_product(&self, product: &Product) -> Result<bool, CatalogError>;
}
