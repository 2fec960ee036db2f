//! Error types for entry path parsing and resolution.

use thiserror::Error;

/// Errors that can occur while resolving an entry path against a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A mapping segment does not resolve.
    #[error("key {0} not found")]
    KeyNotFound(String),

    /// A sequence segment's index is invalid, or its key is not a sequence.
    #[error("index [{1}] out of range for {0}")]
    IndexOutOfRange(String, i64),

    /// A segment is malformed (strict index policy only).
    #[error("invalid path segment: {0}")]
    InvalidSegment(String),
}
