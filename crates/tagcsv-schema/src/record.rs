//! Record types and their field tables.

use std::fmt;

use tagcsv_model::{CodecResult, CsvValue, Kind, Value};

/// A struct that can be read from or written to CSV rows.
///
/// `fields` lists every field of the struct in declaration order, tagged or
/// not. The `csv_record!` macro of the `tagcsv` crate generates this impl;
/// writing it by hand is equally supported.
pub trait Record: Sized + 'static {
    fn fields() -> Vec<FieldDef<Self>>;
}

/// Static shape of a field, probed from its type once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: Kind,
    pub element: Option<Kind>,
    pub decodes_text: bool,
    pub encodes_text: bool,
    /// Bounds of the integer type, or of its list elements.
    pub integer_range: Option<(i64, i64)>,
}

impl Shape {
    /// Probes the shape and capabilities of `T`.
    pub fn of<T: CsvValue>() -> Self {
        Self {
            kind: T::kind(),
            element: T::element_kind(),
            decodes_text: T::text_decoder().is_some(),
            encodes_text: T::text_encoder().is_some(),
            integer_range: T::integer_range(),
        }
    }
}

/// One field of a record: its identity, tag and type-erased accessors.
pub struct FieldDef<R> {
    ident: &'static str,
    tag: Option<&'static str>,
    accessible: bool,
    shape: Shape,
    slot: Box<dyn Slot<R> + Send + Sync>,
}

impl<R: 'static> FieldDef<R> {
    /// Describes a field through a pair of accessors.
    ///
    /// The field is accessible by default; see [`FieldDef::accessible`].
    pub fn new<T: CsvValue>(
        ident: &'static str,
        tag: Option<&'static str>,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> Self {
        Self {
            ident,
            tag,
            accessible: true,
            shape: Shape::of::<T>(),
            slot: Box::new(Projection { get, get_mut }),
        }
    }
}

impl<R> FieldDef<R> {
    /// Marks whether the field is part of the record's public surface.
    #[must_use]
    pub fn accessible(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }

    pub fn ident(&self) -> &'static str {
        self.ident
    }

    pub fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Stores a coerced value. Returns `false` if it does not fit the type.
    pub fn store(&self, record: &mut R, value: Value) -> bool {
        self.slot.store(record, value)
    }

    /// Reads the value for rendering. `None` renders as an empty cell.
    pub fn load(&self, record: &R) -> Option<Value> {
        self.slot.load(record)
    }

    /// Resets the field to its default value.
    pub fn reset(&self, record: &mut R) {
        self.slot.reset(record);
    }

    /// Runs the type's text decoder, if it has one.
    pub fn decode_text(&self, record: &mut R, raw: &[u8]) -> Option<CodecResult<()>> {
        self.slot.decode_text(record, raw)
    }

    /// Runs the type's text encoder, if it has one.
    pub fn encode_text(&self, record: &R) -> Option<CodecResult<Vec<u8>>> {
        self.slot.encode_text(record)
    }
}

impl<R> fmt::Debug for FieldDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("ident", &self.ident)
            .field("tag", &self.tag)
            .field("accessible", &self.accessible)
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

trait Slot<R> {
    fn store(&self, record: &mut R, value: Value) -> bool;
    fn load(&self, record: &R) -> Option<Value>;
    fn reset(&self, record: &mut R);
    fn decode_text(&self, record: &mut R, raw: &[u8]) -> Option<CodecResult<()>>;
    fn encode_text(&self, record: &R) -> Option<CodecResult<Vec<u8>>>;
}

struct Projection<R, T> {
    get: fn(&R) -> &T,
    get_mut: fn(&mut R) -> &mut T,
}

impl<R, T: CsvValue> Slot<R> for Projection<R, T> {
    fn store(&self, record: &mut R, value: Value) -> bool {
        match T::from_value(value) {
            Some(value) => {
                *(self.get_mut)(record) = value;
                true
            }
            None => false,
        }
    }

    fn load(&self, record: &R) -> Option<Value> {
        (self.get)(record).to_value()
    }

    fn reset(&self, record: &mut R) {
        *(self.get_mut)(record) = T::default();
    }

    fn decode_text(&self, record: &mut R, raw: &[u8]) -> Option<CodecResult<()>> {
        T::text_decoder().map(|decode| decode((self.get_mut)(record), raw))
    }

    fn encode_text(&self, record: &R) -> Option<CodecResult<Vec<u8>>> {
        T::text_encoder().map(|encode| encode((self.get)(record)))
    }
}
