//! Errors from notation selection and dotted-string parsing.

use thiserror::Error;

/// Convenience alias for results within the core crate.
pub type Result<T> = std::result::Result<T, NotationError>;

/// Errors that can occur when selecting a notation or parsing a dotted OID.
///
/// The formatters never produce these: an absent rendering is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("unknown notation: '{name}'. Available notations: dot, asn1")]
    UnknownNotation { name: String },

    #[error("empty object identifier")]
    EmptyInput,

    #[error("empty arc at position {position}")]
    EmptyComponent { position: usize },

    #[error("arc at position {position} is not a decimal number: '{text}'")]
    InvalidComponent { position: usize, text: String },

    #[error("arc at position {position} does not fit in 64 bits: '{text}'")]
    ArcOverflow { position: usize, text: String },
}
