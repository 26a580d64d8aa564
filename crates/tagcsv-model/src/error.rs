//! Error type reported by custom text codecs.

use std::error::Error as StdError;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure raised by a type's own text encoder or decoder.
///
/// The row codec wraps it with the value and field name before it reaches
/// the caller, so the message only needs to describe the cause.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CodecError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl CodecError {
    /// Creates an error from a plain message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an underlying error, reusing its message.
    pub fn from_source(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for custom codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
