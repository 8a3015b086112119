//! Core Kernel - Foundational types and utilities for the catalog store
//!
//! This crate provides the building blocks shared by the domain and
//! application crates:
//! - Strongly-typed integer identifiers
//! - Time sources and monotonic version stamping
//! - Port marker traits and adapter health reporting

pub mod identifiers;
pub mod temporal;
pub mod ports;
pub mod error;

pub use identifiers::ProductId;
pub use temporal::{Clock, SystemClock, ManualClock, next_modified, MIN_STAMP_STEP};
pub use ports::{DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
pub use error::CoreError;
