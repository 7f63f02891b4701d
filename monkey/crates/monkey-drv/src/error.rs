//! Error types for the driver loop.

use thiserror::Error;

/// Errors that stop the driver loop.
///
/// Syntax errors are not here: they are reported to the user and the loop
/// moves on to the next line.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
