//! Row codec for tagcsv.
//!
//! [`decode_row`] coerces one row of cells into a record through a
//! [`ReconciledMapping`](tagcsv_schema::ReconciledMapping);
//! [`encode_row`] renders a record as one row in field declaration order.

#![deny(unsafe_code)]

mod decode;
mod encode;
mod error;

pub use decode::{decode_row, parse_bool, trim_cell};
pub use encode::{encode_row, render};
pub use error::{DecodeError, EncodeError};
