//! Error types for update-notifier operations.
//!
//! This module defines [`NotifierError`], the error type used by the
//! configuration and CLI layers, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - The notification path itself never fails: bad versions or write
//!   errors simply mean nothing is printed
//! - Use `NotifierError` for config and argument problems the user can fix
//! - Use `anyhow::Error` (via `NotifierError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for update-notifier operations.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A required value was missing or malformed.
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for update-notifier operations.
pub type Result<T> = std::result::Result<T, NotifierError>;
