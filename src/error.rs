//! Error types for the Capsim capacitor simulator.
//!
//! This module provides a unified error type [`CapsimError`] that covers
//! all error conditions that can occur during parameter validation and
//! results output.

use thiserror::Error;

/// Result type alias using [`CapsimError`].
pub type Result<T> = std::result::Result<T, CapsimError>;

/// Unified error type for all Capsim operations.
#[derive(Error, Debug)]
pub enum CapsimError {
    // ============ Simulation Errors ============
    /// Degenerate simulation parameter rejected before integration
    #[error("Invalid parameter '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // ============ I/O Errors ============
    /// Error writing sampled results
    #[error("Output error: {message}")]
    Output { message: String },
}

impl CapsimError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an output error.
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}
