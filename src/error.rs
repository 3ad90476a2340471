//! Error types for canvas-sanitizer.
//!
//! This module defines the error types returned by sanitization and by the
//! canvas request helpers.

/// Error type for sanitization operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input could not be decoded or tokenized into a tree.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// A canvas identifier has the wrong shape. Carries the rejected id; the
    /// message is fixed since it is reported to callers as-is.
    #[error("invalid canvas ID format. Must start with 'F' (e.g., 'F1234567')")]
    InvalidCanvasId(String),

    /// A canvas request is malformed as a whole (empty, too many ids).
    #[error("{0}")]
    InvalidRequest(String),
}

/// Result type alias for sanitization operations.
pub type Result<T> = std::result::Result<T, Error>;
