//! Error types for Crampon operations.
//!
//! This module defines [`CramponError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CramponError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CramponError::Other`) for unexpected errors
//! - Unrecognized interpreter identities are not errors: inference degrades
//!   to a generic fallback instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Crampon operations.
#[derive(Debug, Error)]
pub enum CramponError {
    /// Runner configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the runner configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// An explicitly selected environment has no configuration section.
    #[error("Unknown environment: {name}")]
    UnknownEnvironment { name: String },

    /// Waiting on sibling CI jobs failed.
    #[error("Sibling job wait failed: {message}")]
    SiblingWaitFailed { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Crampon operations.
pub type Result<T> = std::result::Result<T, CramponError>;
