//! Domain-specific error types for scvmm-clone.
//!
//! This module defines `CloneError`, a `thiserror`-based enum used by the
//! manifest and rendering layers. The clone compilers themselves never fail:
//! a missing mount point, CPU directive or network binding is represented as
//! an absent value, not as an error.
//!
//! `CloneError` implements `Into<anyhow::Error>`, so the `?` operator
//! converts it automatically inside the command handlers.

use std::io;

/// Formats an IO error kind into a human-readable message.
///
/// Provides consistent messages for common IO error kinds
/// (e.g., "I/O error: not found") instead of the OS-level messages
/// (e.g., "No such file or directory (os error 2)").
pub(crate) fn io_error_kind_message(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "I/O error: not found".to_string(),
        io::ErrorKind::PermissionDenied => "I/O error: permission denied".to_string(),
        io::ErrorKind::IsADirectory => "I/O error: is a directory".to_string(),
        _ => format!("I/O error: {}", err),
    }
}

/// Domain-specific error type for scvmm-clone.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CloneError {
    /// A manifest constraint was violated.
    #[error("validation error: {0}")]
    Validation(String),

    /// A manifest file could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A placement target could not be found in the inventory.
    #[error("resolution error: {0}")]
    Resolution(String),

    /// An I/O operation failed with contextual information.
    #[error("{context}: {message}")]
    Io {
        /// The file path or operation being performed.
        context: String,
        /// Human-readable description derived from [`io_error_kind_message`].
        message: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl CloneError {
    /// Creates an `Io` variant with the `message` field derived from `source`.
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            message: io_error_kind_message(&source),
            source,
        }
    }
}
