//! Adapters for the Catalog Domain
//!
//! Implementations of the `ProductRepository` port.
//!
//! # Available Adapters
//!
//! - **InMemoryProductRepository**: process-local store with per-product locking

pub mod in_memory;

pub use in_memory::InMemoryProductRepository;
