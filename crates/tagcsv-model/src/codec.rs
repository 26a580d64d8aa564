//! Custom text codec capabilities.
//!
//! A field type opts into custom text handling by implementing
//! [`TextDecode`] and/or [`TextEncode`] and exposing them through
//! [`CsvValue::text_decoder`](crate::CsvValue::text_decoder) and
//! [`CsvValue::text_encoder`](crate::CsvValue::text_encoder). The two
//! capabilities are probed independently: a type may only decode, only
//! encode, or do both.

use crate::error::CodecResult;

/// Populates a value in place from the raw (trimmed) cell bytes.
pub type DecodeFn<T> = fn(&mut T, &[u8]) -> CodecResult<()>;

/// Renders a value as the raw cell bytes.
pub type EncodeFn<T> = fn(&T) -> CodecResult<Vec<u8>>;

/// Text-decode capability.
pub trait TextDecode {
    fn decode_text(&mut self, raw: &[u8]) -> CodecResult<()>;
}

/// Text-encode capability.
pub trait TextEncode {
    fn encode_text(&self) -> CodecResult<Vec<u8>>;
}
