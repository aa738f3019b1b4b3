//! Error types for parsing and for checked value access.

use thiserror::Error;

/// Errors that can occur while parsing JSON text.
///
/// Every variant carries the absolute byte offset (into the text handed to the
/// entry point) at which the problem was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended where a value was expected.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// The character at `offset` cannot start a value.
    #[error("unexpected token {found:?} at offset {offset}")]
    UnexpectedToken { offset: usize, found: char },

    /// A literal starting with a sign or digit is not a valid number.
    #[error("invalid number {literal:?} at offset {offset}")]
    InvalidNumber { offset: usize, literal: String },

    /// No closing quote before end of input. `offset` is the opening quote.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// A list or object is structurally broken (unbalanced or missing a value).
    #[error("invalid container at offset {offset}: {message}")]
    InvalidContainer { offset: usize, message: String },

    /// An object key parsed to something other than a string.
    #[error("object key at offset {offset} is {found}, expected string")]
    NonStringKey { offset: usize, found: &'static str },

    /// Containers nested deeper than `ParseOptions::max_depth`.
    #[error("nesting depth exceeds limit of {limit} at offset {offset}")]
    DepthLimitExceeded { offset: usize, limit: usize },

    /// Non-whitespace content after a complete document.
    #[error("trailing characters at offset {offset}")]
    TrailingCharacters { offset: usize },
}

impl ParseError {
    /// Byte offset at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedEnd { offset }
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::InvalidNumber { offset, .. }
            | ParseError::UnterminatedString { offset }
            | ParseError::InvalidContainer { offset, .. }
            | ParseError::NonStringKey { offset, .. }
            | ParseError::DepthLimitExceeded { offset, .. }
            | ParseError::TrailingCharacters { offset } => *offset,
        }
    }

    /// Rebase an error produced on a suffix view onto its parent view.
    pub(crate) fn shifted(mut self, by: usize) -> Self {
        match &mut self {
            ParseError::UnexpectedEnd { offset }
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::InvalidNumber { offset, .. }
            | ParseError::UnterminatedString { offset }
            | ParseError::InvalidContainer { offset, .. }
            | ParseError::NonStringKey { offset, .. }
            | ParseError::DepthLimitExceeded { offset, .. }
            | ParseError::TrailingCharacters { offset } => *offset += by,
        }
        self
    }
}

/// Errors from the checked (non-panicking) accessors on `Value`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The active variant is not the one the operation needs.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("key not found: {0:?}")]
    KeyNotFound(String),
}

/// Convenience alias used throughout json-object.
pub type Result<T> = std::result::Result<T, ParseError>;
