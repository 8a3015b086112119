//! Product Catalog Domain
//!
//! This crate holds the catalog's products and guards them against lost
//! updates with optimistic concurrency control.
//!
//! # Update Protocol
//!
//! 1. A caller reads a product and keeps the `last_modified` it saw.
//! 2. It edits the copy and submits it with `update_product`.
//! 3. The store compares the stored `last_modified` with the submitted one.
//!    If the stored one is newer, someone else committed in between and the
//!    update fails with `CatalogError::ConcurrencyConflict`. Otherwise the
//!    name and price are applied and the store stamps a new `last_modified`.
//!
//! A product that does not exist is not an error: reads return `None` and
//! updates return `false`.
//!
//! # Examples
//!
//! ```rust
//! use domain_catalog::{InMemoryProductRepository, CatalogError};
//! use core_kernel::ProductId;
//! use rust_decimal_macros::dec;
//!
//! let store = InMemoryProductRepository::seeded();
//!
//! let mine = store.get(ProductId::new(1)).unwrap();
//! let mut theirs = mine.clone();
//! theirs.name = "Modified".to_string();
//! assert!(store.update(&theirs).unwrap());
//!
//! let mut mine = mine;
//! mine.price = dec!(29.99);
//! let err = store.update(&mine).unwrap_err();
//! assert!(matches!(err, CatalogError::ConcurrencyConflict { .. }));
//! assert_eq!(store.get(ProductId::new(1)).unwrap().name, "Modified");
//! ```

pub mod product;
pub mod error;
pub mod ports;
pub mod adapters;
pub mod services;

pub use product::Product;
pub use error::CatalogError;
pub use ports::ProductRepository;
pub use adapters::InMemoryProductRepository;
pub use services::ProductService;
