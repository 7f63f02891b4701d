//! Error handling module for the monkey CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use monkey_drv::DriverError;
use thiserror::Error;

/// Main error type for the monkey CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when loading or saving configuration fails.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised by the driver loop.
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// The lexed input contained illegal tokens.
    #[error("{0} illegal token(s) found")]
    IllegalTokens(usize),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
