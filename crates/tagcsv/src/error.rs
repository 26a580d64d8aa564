//! Error type for decoder and encoder operations.

use std::io;

use tagcsv_codec::{DecodeError, EncodeError};
use tagcsv_schema::{HeaderError, SchemaError};
use thiserror::Error;

/// Errors from constructing or using a [`Decoder`](crate::Decoder) or
/// [`Encoder`](crate::Encoder).
///
/// Schema, capability and header errors are only returned by constructors.
/// Decode and encode errors affect a single row.
#[derive(Debug, Error)]
pub enum Error {
    // === Construction ===
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Header(#[from] HeaderError),

    /// Input had no header row.
    #[error("failed to find headers")]
    MissingHeaders,

    // === Rows ===
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    // === I/O ===
    /// Underlying CSV reader failed.
    #[error("failed to read CSV row: {0}")]
    Read(#[source] csv::Error),

    /// Underlying CSV writer failed.
    #[error("failed to write CSV row: {0}")]
    Write(#[source] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A writer panicked while holding the encoder lock.
    #[error("encoder lock poisoned")]
    Poisoned,
}

impl Error {
    /// Whether the error concerns one row only, leaving the stream usable.
    pub fn is_row_error(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Encode(_))
    }
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;
