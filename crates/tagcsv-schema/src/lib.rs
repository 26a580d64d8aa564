//! Schema derivation and header reconciliation.
//!
//! A record type describes its fields once through [`Record::fields`];
//! [`Schema::derive`] validates the tags and field types and produces the
//! ordered [`FieldDescriptor`] list. On the decode path, [`reconcile`] then
//! aligns a CSV header row with those descriptors, producing the
//! [`ReconciledMapping`] reused for every data row.
//!
//! # Example
//!
//! ```
//! use tagcsv_schema::{FieldDef, Record, Schema, reconcile};
//!
//! struct Person {
//!     name: String,
//!     age: i64,
//! }
//!
//! impl Record for Person {
//!     fn fields() -> Vec<FieldDef<Self>> {
//!         vec![
//!             FieldDef::new("name", Some("name,required"), |p: &Person| &p.name, |p: &mut Person| &mut p.name),
//!             FieldDef::new("age", Some("age"), |p: &Person| &p.age, |p: &mut Person| &mut p.age),
//!         ]
//!     }
//! }
//!
//! let schema = Schema::<Person>::derive().unwrap();
//! assert_eq!(schema.column_names(), vec!["name", "age"]);
//!
//! let mapping = reconcile(&[" AGE ", "Name", "notes"], schema.fields()).unwrap();
//! assert_eq!(mapping.matched_headers(), vec!["age", "name"]);
//! ```

#![deny(unsafe_code)]

mod derive;
mod error;
mod reconcile;
mod record;
pub mod tag;

pub use derive::{FieldDescriptor, Schema, derive_fields};
pub use error::{HeaderError, Result, SchemaError};
pub use reconcile::{ReconciledMapping, normalize_header, reconcile};
pub use record::{FieldDef, Record, Shape};
