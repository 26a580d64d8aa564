//! Per-row error types.

use tagcsv_model::CodecError;
use thiserror::Error;

/// Errors from decoding one row. The row is consumed either way; fields
/// decoded before the failing cell keep their new values.
#[derive(Debug, Error)]
pub enum DecodeError {
    // === Row Shape ===
    /// Row has a different cell count than the header.
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    // === Missing Values ===
    /// Required field with an empty cell.
    #[error("column {field} required but no value found")]
    MissingValue { field: String },

    // === Coercion Failures ===
    /// Custom decoder rejected the value.
    #[error("failed to coerce value '{value}' using custom marshaler for field {field}: {source}")]
    Custom {
        value: String,
        field: String,
        #[source]
        source: CodecError,
    },

    /// Value is not a base-10 integer that fits the field.
    #[error("failed to coerce value '{value}' into integer for field {field}")]
    Integer { value: String, field: String },

    /// Value is not a boolean literal.
    #[error("failed to coerce value '{value}' into boolean for field {field}")]
    Boolean { value: String, field: String },

    /// One element of an integer list failed to parse or does not fit the
    /// element type.
    #[error("failed to coerce value '{value}' (indexed {index}) into integer for field {field}: {source}")]
    IntegerElement {
        value: String,
        index: usize,
        field: String,
        #[source]
        source: CodecError,
    },

    /// Cell for a built-in kind is not UTF-8.
    #[error("value for field {field} is not valid UTF-8")]
    InvalidUtf8 { field: String },

    /// Opaque field without a decoder; the constructor audit prevents this.
    #[error("field {field} has no text decoder")]
    Unsupported { field: String },
}

impl DecodeError {
    /// Name of the field the error concerns, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ColumnCount { .. } => None,
            Self::MissingValue { field }
            | Self::Custom { field, .. }
            | Self::Integer { field, .. }
            | Self::Boolean { field, .. }
            | Self::IntegerElement { field, .. }
            | Self::InvalidUtf8 { field }
            | Self::Unsupported { field } => Some(field),
        }
    }
}

/// Errors from encoding one record.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Custom encoder failed.
    #[error("failed to encode value using custom marshaler for field {field}: {source}")]
    Custom {
        field: String,
        #[source]
        source: CodecError,
    },

    /// Custom encoder produced bytes that are not UTF-8.
    #[error("custom marshaler for field {field} produced invalid UTF-8")]
    InvalidUtf8 { field: String },

    /// Opaque field without an encoder; the constructor audit prevents this.
    #[error("field {field} has no text encoder")]
    Unsupported { field: String },
}
