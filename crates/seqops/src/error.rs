//! Error types for the sequence operators.

use thiserror::Error;

/// Errors raised by the sequence operators.
///
/// Lazy operators surface these as the item of the pull that failed;
/// eager operators return them before touching any element (argument
/// errors) or at the element that caused them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A source, callback or comparer was not supplied.
    #[error("missing argument: {name} can't be null")]
    MissingArgument { name: &'static str },

    /// An argument was supplied but is out of range.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// An element could not be converted to the requested type.
    #[error("type mismatch at index {index}: element is not a {expected}")]
    TypeMismatch { index: usize, expected: &'static str },
}

impl SeqError {
    /// Create a missing-argument error.
    pub fn missing(name: &'static str) -> Self {
        Self::MissingArgument { name }
    }

    /// Create an invalid-argument error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`SeqError::MissingArgument`].
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, SeqError::MissingArgument { .. })
    }

    /// Returns `true` for [`SeqError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SeqError::InvalidArgument { .. })
    }

    /// Returns `true` for [`SeqError::TypeMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, SeqError::TypeMismatch { .. })
    }
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SeqError>;

/// Unwraps a supplied argument or reports it as missing.
pub(crate) fn require<T>(arg: Option<T>, name: &'static str) -> Result<T> {
    arg.ok_or_else(|| {
        tracing::debug!(argument = name, "rejected missing argument");
        SeqError::missing(name)
    })
}
