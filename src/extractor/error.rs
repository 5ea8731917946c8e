//! Extractor error types

use thiserror::Error;

/// Errors that can occur while extracting members from a payload
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The payload is neither an object nor a string
    #[error("Query payload must be an object or a string, found {found}")]
    InvalidPayload { found: &'static str },
    /// An element has the wrong shape for its position (strict mode, or a
    /// filter node handed directly to the filter walker)
    #[error("Expected {expected} at '{path}', found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    /// A member name with no '.' between cube and field (strict mode)
    #[error("Member '{member}' has no '.' separating cube and field")]
    MissingSeparator { member: String },
}
