//! Error types for the `hello_flags` demo.

use thiserror::Error;

/// Errors raised by the demo binary.
#[derive(Debug, Error)]
pub enum HelloFlagsError {
    /// Strict binding reported arguments that were not applied.
    #[error("failed to bind arguments: {0}")]
    Binding(#[from] flagbind::BindError),
    /// Writing the rendered output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Convenience alias for results returned by the demo.
pub type Result<T, E = HelloFlagsError> = std::result::Result<T, E>;
