//! Kernel error types
//!
//! Lookups of missing records are not errors anywhere in this workspace, so
//! the kernel only carries failures that stop a process from starting.

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}
