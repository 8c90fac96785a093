//! Error types for the Gridscan system.
//!
//! Uses `thiserror` for ergonomic error definition. Every error here is
//! recoverable at single-query granularity; none is fatal to the host.

use thiserror::Error;

use crate::id::GridId;

/// Result alias used throughout Gridscan.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Gridscan operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown token error for the offending query token.
    #[must_use]
    pub fn unknown_token(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownToken(token.into()))
    }

    /// Creates an ambiguous target error.
    #[must_use]
    pub fn ambiguous_target(selector: impl Into<String>, found: usize) -> Self {
        Self::new(ErrorKind::AmbiguousTarget {
            selector: selector.into(),
            found,
        })
    }

    /// Creates a stale grid reference error.
    #[must_use]
    pub fn stale_reference(id: GridId) -> Self {
        Self::new(ErrorKind::StaleReference(id))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A query token matched no registered condition name.
    ///
    /// Compilation aborts and the literal token must be reported back to
    /// the operator.
    #[error("unknown argument '{0}'")]
    UnknownToken(String),

    /// Name or look-at resolution required exactly one group but found
    /// zero or several candidates.
    #[error("target '{selector}' matched {found} grid groups, expected exactly one")]
    AmbiguousTarget {
        /// The name, id, or description of what was being resolved.
        selector: String,
        /// How many candidates were found.
        found: usize,
    },

    /// A grid referenced by an earlier snapshot no longer exists.
    #[error("stale grid reference: {0}")]
    StaleReference(GridId),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
