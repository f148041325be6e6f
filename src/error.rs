//! Error types for `ghostwake`
//!
//! Game commands never fail: they accept or reject with a boolean. The
//! types here cover everything around the controller (configuration,
//! persistence backends, runtime wiring) and map onto process exit codes.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `ghostwake` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, bad duration, empty key)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (stdin/stdout failure, event file not writable)
    pub const IO_ERROR: i32 = 3;

    /// State store error (unreadable state directory, invalid key)
    pub const STORE_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `ghostwake` operations.
///
/// Aggregates the domain-specific errors and provides exit code mapping.
#[derive(Debug, Error)]
pub enum GhostwakeError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// State store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Controller wiring error
    #[error(transparent)]
    Controller(#[from] ControllerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GhostwakeError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Store(_) => ExitCode::STORE_ERROR,
            Self::Controller(_) | Self::Json(_) => ExitCode::ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },

    /// Configuration file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Store Errors
// ============================================================================

/// Errors raised by [`StateStore`](crate::persist::StateStore) backends.
///
/// The controller never surfaces these to command callers; they are
/// logged and the command result is unaffected.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O failure while reading or writing a stored value
    #[error("store I/O error at {path}: {source}")]
    Io {
        /// File the backend was accessing
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped onto the backend
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

// ============================================================================
// Controller Errors
// ============================================================================

/// Errors raised while constructing a [`GameController`](crate::phase::GameController).
#[derive(Debug, Error)]
pub enum ControllerError {
    /// No tokio runtime is available to host the deferred auto-advance.
    #[error("game controller must be created inside a tokio runtime")]
    NoRuntime,
}
