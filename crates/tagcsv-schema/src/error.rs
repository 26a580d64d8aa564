//! Error types for schema derivation and header reconciliation.

use thiserror::Error;

/// Errors raised while deriving or auditing a record schema.
///
/// All of them are fatal to decoder/encoder construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    // === Tag Errors ===
    /// Tag has more than a name and one option.
    #[error("malformed tag on field '{field}': expected 'name' or 'name,required', found {count} values")]
    TooManyTagValues { field: String, count: usize },

    /// Tag option other than `required`.
    #[error("malformed tag on field '{field}': unknown option '{option}'")]
    UnknownTagOption { field: String, option: String },

    /// Tagged field is not visible outside its module.
    #[error("cannot access field '{field}'")]
    InaccessibleField { field: String },

    // === Type Errors ===
    /// Field type reported the "no type" placeholder.
    #[error("invalid type for field '{field}'")]
    InvalidType { field: String },

    /// List whose element is neither text nor integer.
    #[error("only string & int slices allowed (field '{field}')")]
    UnsupportedElement { field: String },

    // === Schema Shape Errors ===
    /// Two fields declare the same column name.
    #[error("two attributes w/ csv field name: '{name}'")]
    DuplicateColumn { name: String },

    /// No field carries a column name.
    #[error("no fields found for CSV marshaling")]
    NoFields,

    // === Capability Audit Errors ===
    /// Opaque field without a text decoder, found while building a decoder.
    #[error("unsupported field type found that does not implement text-decode: {name}")]
    MissingDecoder { name: String },

    /// Opaque field without a text encoder, found while building an encoder.
    #[error("unsupported field type found that does not implement text-encode: {name}")]
    MissingEncoder { name: String },
}

/// Errors raised while reconciling a header row with a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// Two header cells normalize to the same name.
    #[error("saw header column '{header}' twice, headers must be unique")]
    DuplicateHeader { header: String },

    /// A required field has no matching header cell.
    #[error("column '{name}' required but not found")]
    MissingRequired { name: String },
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
