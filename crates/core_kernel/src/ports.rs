//! Ports and Adapters Infrastructure
//!
//! Foundational types for the hexagonal layout used by the domain crates.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Application Services            │
//! │               (ProductService)               │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │                 Port Traits                  │
//! │             (ProductRepository)              │
//! └──────────────────────────────────────────────┘
//!                        ▲
//!                        │
//!              ┌─────────┴─────────┐
//!              │ In-memory Adapter │
//!              └───────────────────┘
//! ```
//!
//! Each domain defines its own port trait extending the marker traits here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker trait for all domain ports
///
/// Ports are shared across threads and tasks behind `Arc<dyn ...>`.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter serves requests but some of its records can no longer be written
    Degraded,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Number of records held by the adapter, when it knows
    pub record_count: Option<usize>,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: DateTime<Utc>,
}

impl HealthCheckResult {
    /// Creates a healthy result checked now
    pub fn healthy(adapter_id: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Healthy,
            record_count: None,
            message: None,
            checked_at: Utc::now(),
        }
    }

    /// Attaches a record count
    pub fn with_record_count(mut self, count: usize) -> Self {
        self.record_count = Some(count);
        self
    }

    /// Marks the result degraded, with the reason
    pub fn degraded(mut self, reason: impl Into<String>) -> Self {
        self.status = AdapterHealth::Degraded;
        self.message = Some(reason.into());
        self
    }

    /// Returns true if nothing is degraded
    pub fn is_healthy(&self) -> bool {
        self.status == AdapterHealth::Healthy
    }
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}
