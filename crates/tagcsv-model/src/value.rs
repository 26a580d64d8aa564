//! Cell values and the field type capability trait.

use crate::codec::{DecodeFn, EncodeFn};
use crate::error::{CodecError, CodecResult};
use crate::kind::Kind;

/// A coerced cell value for one of the built-in kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Boolean(bool),
    TextList(Vec<String>),
    IntegerList(Vec<i64>),
}

/// Capability set of a type that can sit in a record field.
///
/// Every method has a default matching an opaque type with no codecs, so
/// a custom type only overrides the capabilities it actually has.
///
/// `Default` supplies the zero value an optional field is reset to when its
/// cell is empty.
pub trait CsvValue: Default + 'static {
    /// Declared shape of the type.
    fn kind() -> Kind {
        Kind::Opaque
    }

    /// Element shape, for [`Kind::List`] types.
    fn element_kind() -> Option<Kind> {
        None
    }

    /// Whether a value of the type may be absent.
    fn optional() -> bool {
        false
    }

    /// Inclusive bounds of an integer type, or of the elements of an
    /// integer list.
    fn integer_range() -> Option<(i64, i64)> {
        None
    }

    /// Custom text-decode capability.
    fn text_decoder() -> Option<DecodeFn<Self>> {
        None
    }

    /// Custom text-encode capability.
    fn text_encoder() -> Option<EncodeFn<Self>> {
        None
    }

    /// Builds the value from a coerced cell. `None` when the value does
    /// not fit the type.
    fn from_value(value: Value) -> Option<Self> {
        let _ = value;
        None
    }

    /// Converts the value for rendering. `None` renders as an empty cell.
    fn to_value(&self) -> Option<Value> {
        None
    }
}

impl CsvValue for String {
    fn kind() -> Kind {
        Kind::Text
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Text(self.clone()))
    }
}

impl CsvValue for bool {
    fn kind() -> Kind {
        Kind::Boolean
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Boolean(flag) => Some(flag),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Boolean(*self))
    }
}

macro_rules! integer_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CsvValue for $ty {
                fn kind() -> Kind {
                    Kind::Integer
                }

                fn integer_range() -> Option<(i64, i64)> {
                    Some((
                        i64::try_from(<$ty>::MIN).unwrap_or(i64::MIN),
                        i64::try_from(<$ty>::MAX).unwrap_or(i64::MAX),
                    ))
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::Integer(number) => Self::try_from(number).ok(),
                        _ => None,
                    }
                }

                fn to_value(&self) -> Option<Value> {
                    i64::try_from(*self).ok().map(Value::Integer)
                }
            }
        )*
    };
}

integer_value!(i8, i16, i32, i64, isize);

/// The "no type" placeholder.
impl CsvValue for () {
    fn kind() -> Kind {
        Kind::Invalid
    }
}

impl<T: CsvValue> CsvValue for Vec<T> {
    fn kind() -> Kind {
        Kind::List
    }

    /// Absent elements cannot be written as a list cell, so a list of
    /// optional values has no supported element kind.
    fn element_kind() -> Option<Kind> {
        if T::optional() { None } else { Some(T::kind()) }
    }

    fn integer_range() -> Option<(i64, i64)> {
        T::integer_range()
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::TextList(items) => items
                .into_iter()
                .map(|item| T::from_value(Value::Text(item)))
                .collect(),
            Value::IntegerList(items) => items
                .into_iter()
                .map(|item| T::from_value(Value::Integer(item)))
                .collect(),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        match T::kind() {
            Kind::Text => self
                .iter()
                .map(|item| match item.to_value()? {
                    Value::Text(text) => Some(text),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Value::TextList),
            Kind::Integer => self
                .iter()
                .map(|item| match item.to_value()? {
                    Value::Integer(number) => Some(number),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Value::IntegerList),
            _ => None,
        }
    }
}

// Optional and boxed fields take the inner type's shape and capabilities.
// Their decoder allocates the inner value before handing it to the inner
// decoder.

impl<T: CsvValue> CsvValue for Option<T> {
    fn kind() -> Kind {
        T::kind()
    }

    fn element_kind() -> Option<Kind> {
        T::element_kind()
    }

    fn optional() -> bool {
        true
    }

    fn integer_range() -> Option<(i64, i64)> {
        T::integer_range()
    }

    fn text_decoder() -> Option<DecodeFn<Self>> {
        T::text_decoder().map(|_| decode_optional::<T> as DecodeFn<Self>)
    }

    fn text_encoder() -> Option<EncodeFn<Self>> {
        T::text_encoder().map(|_| encode_optional::<T> as EncodeFn<Self>)
    }

    fn from_value(value: Value) -> Option<Self> {
        T::from_value(value).map(Some)
    }

    fn to_value(&self) -> Option<Value> {
        self.as_ref().and_then(T::to_value)
    }
}

impl<T: CsvValue> CsvValue for Box<T> {
    fn kind() -> Kind {
        T::kind()
    }

    fn element_kind() -> Option<Kind> {
        T::element_kind()
    }

    fn optional() -> bool {
        T::optional()
    }

    fn integer_range() -> Option<(i64, i64)> {
        T::integer_range()
    }

    fn text_decoder() -> Option<DecodeFn<Self>> {
        T::text_decoder().map(|_| decode_boxed::<T> as DecodeFn<Self>)
    }

    fn text_encoder() -> Option<EncodeFn<Self>> {
        T::text_encoder().map(|_| encode_boxed::<T> as EncodeFn<Self>)
    }

    fn from_value(value: Value) -> Option<Self> {
        T::from_value(value).map(Box::new)
    }

    fn to_value(&self) -> Option<Value> {
        T::to_value(self)
    }
}

fn decode_optional<T: CsvValue>(slot: &mut Option<T>, raw: &[u8]) -> CodecResult<()> {
    let decode = T::text_decoder().ok_or_else(missing_decoder)?;
    decode(slot.get_or_insert_with(T::default), raw)
}

fn encode_optional<T: CsvValue>(slot: &Option<T>) -> CodecResult<Vec<u8>> {
    let encode = T::text_encoder().ok_or_else(missing_encoder)?;
    match slot {
        Some(value) => encode(value),
        None => Ok(Vec::new()),
    }
}

fn decode_boxed<T: CsvValue>(slot: &mut Box<T>, raw: &[u8]) -> CodecResult<()> {
    let decode = T::text_decoder().ok_or_else(missing_decoder)?;
    decode(slot, raw)
}

#[allow(clippy::borrowed_box)]
fn encode_boxed<T: CsvValue>(slot: &Box<T>) -> CodecResult<Vec<u8>> {
    let encode = T::text_encoder().ok_or_else(missing_encoder)?;
    encode(slot)
}

fn missing_decoder() -> CodecError {
    CodecError::new("type has no text decoder")
}

fn missing_encoder() -> CodecError {
    CodecError::new("type has no text encoder")
}
