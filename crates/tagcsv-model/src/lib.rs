//! Core data model for tagcsv.
//!
//! This crate defines the vocabulary shared by the schema deriver and the
//! row codec:
//!
//! - [`Kind`] and [`FieldKind`]: the shape a field type reports and the
//!   validated kind a schema keeps
//! - [`Value`]: a coerced cell for the built-in kinds
//! - [`CsvValue`]: the capability set every field type implements
//! - [`TextDecode`] / [`TextEncode`]: custom text codec capabilities
//! - [`CodecError`]: failures reported by custom codecs

#![deny(unsafe_code)]

pub mod codec;
mod error;
pub mod kind;
pub mod value;

pub use codec::{DecodeFn, EncodeFn, TextDecode, TextEncode};
pub use error::{CodecError, CodecResult};
pub use kind::{FieldKind, Kind};
pub use value::{CsvValue, Value};
