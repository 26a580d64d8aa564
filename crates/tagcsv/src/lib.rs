//! Tag-driven CSV decoding and encoding of Rust structs.
//!
//! Each field of a record carries an optional tag, `"name"` or
//! `"name,required"`, naming the CSV column it maps to. Untagged fields are
//! left alone. The [`Decoder`] matches the header row of its input against
//! those names, ignoring case and surrounding whitespace, and then fills one
//! record per data row. The [`Encoder`] writes a header row in field order
//! followed by one row per record.
//!
//! Text, integer, boolean and list fields are converted directly. Any other
//! field type needs a custom text codec, see [`TextDecode`], [`TextEncode`]
//! and [`text_value!`].
//!
//! # Example
//!
//! ```
//! use tagcsv::{Decoder, Encoder, ReadOutcome, csv_record};
//!
//! csv_record! {
//!     #[derive(Debug, Default, PartialEq)]
//!     pub struct Visit {
//!         pub subject: String => "subject,required",
//!         pub day: i64 => "day",
//!         pub tags: Vec<String> => "tags",
//!         pub note: String,
//!     }
//! }
//!
//! let input = "Day, SUBJECT ,tags\n3,S-01,\"a,b\"\n";
//! let mut decoder = Decoder::<_, Visit>::new(input.as_bytes()).unwrap();
//! assert_eq!(decoder.matched_headers(), vec!["day", "subject", "tags"]);
//!
//! let mut visit = Visit::default();
//! assert_eq!(decoder.read(&mut visit).unwrap(), ReadOutcome::Record);
//! assert_eq!(visit.subject, "S-01");
//! assert_eq!(visit.tags, vec!["a", "b"]);
//! assert!(decoder.read(&mut visit).unwrap().is_end());
//!
//! let encoder = Encoder::<_, Visit>::new(Vec::new()).unwrap();
//! encoder.write(&visit).unwrap();
//! let output = String::from_utf8(encoder.into_inner().unwrap()).unwrap();
//! assert_eq!(output, "subject,day,tags\nS-01,3,\"a,b\"\n");
//! ```
//!
//! # Concurrency
//!
//! [`Encoder::write`] takes `&self` and serializes rows internally.
//! [`Decoder::read`] takes `&mut self`; sharing a decoder between threads
//! needs external locking.

#![deny(unsafe_code)]

mod decoder;
mod encoder;
mod error;
pub mod logging;
mod macros;
mod options;

pub use decoder::{Decoder, ReadOutcome, Records};
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use options::CsvOptions;

pub use tagcsv_codec::{DecodeError, EncodeError};
pub use tagcsv_model::{
    CodecError, CodecResult, CsvValue, DecodeFn, EncodeFn, FieldKind, Kind, TextDecode,
    TextEncode, Value,
};
pub use tagcsv_schema::{
    FieldDef, FieldDescriptor, HeaderError, ReconciledMapping, Record, Schema, SchemaError,
};
