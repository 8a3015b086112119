//! Catalog domain services
//!
//! `ProductService` is the entry point callers use. It forwards to whatever
//! `ProductRepository` it was built with and returns the outcome unchanged;
//! retrying after a conflict is left to the caller.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use core_kernel::{HealthCheckResult, ProductId};

use crate::error::CatalogError;
use crate::ports::ProductRepository;
use crate::product::Product;

/// Service for reading and updating products
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Creates a service over the given repository
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves a product by ID
    ///
    /// # Returns
    ///
    /// A copy of the product, or `None` if no product has that ID
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        let product = self.repository.get_product_by_id(id).await?;
        if product.is_none() {
            debug!("Product not found");
        }
        Ok(product)
    }

    /// Submits an update built from a previously read product
    ///
    /// # Returns
    ///
    /// `true` if committed, `false` if the product does not exist
    ///
    /// # Errors
    ///
    /// `CatalogError::ConcurrencyConflict` if someone else updated the
    /// product after `product.last_modified()`
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut product = service.get_product_by_id(id).await?.expect("seeded");
    /// product.price = dec!(24.99);
    /// match service.update_product(&product).await {
    ///     Ok(true) => println!("saved"),
    ///     Ok(false) => println!("gone"),
    ///     Err(e) if e.is_conflict() => println!("reload and try again"),
    ///     Err(e) => return Err(e),
    /// }
    /// ```
    #[instrument(skip(self, product), fields(product_id = %product.id()))]
    pub async fn update_product(&self, product: &Product) -> Result<bool, CatalogError> {
        let outcome = self.repository.update_product(product).await;
        match &outcome {
            Ok(false) => debug!("Update target not found"),
            Err(e) if e.is_conflict() => warn!(error = %e, "Update lost to a concurrent writer"),
            _ => {}
        }
        outcome
    }

    /// Reports the health of the underlying repository
    pub async fn health_check(&self) -> HealthCheckResult {
        self.repository.health_check().await
    }
}
