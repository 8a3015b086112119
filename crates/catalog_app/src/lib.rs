//! Catalog Application Layer
//!
//! Wires the catalog domain into a runnable process:
//!
//! - **config**: `CATALOG_*` environment configuration
//! - **telemetry**: tracing subscriber setup
//! - **demo**: lost-update scenarios driven through `ProductService`
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_app::build_service;
//!
//! let service = build_service();
//! let report = catalog_app::demo::contention(&service, ProductId::new(1), 8).await?;
//! ```

pub mod config;
pub mod telemetry;
pub mod demo;

use std::sync::Arc;

use domain_catalog::{InMemoryProductRepository, ProductService};

/// Builds a service over a freshly seeded in-memory store
pub fn build_service() -> ProductService {
    ProductService::new(Arc::new(InMemoryProductRepository::seeded()))
}
