//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! catalog store test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for products and timestamps
//! - `builders`: Builder patterns for products and stores
//! - `assertions`: Assertion helpers for update outcomes and versions
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
