//! Declarative macros for record and value definitions.

/// Defines a struct together with its [`Record`](crate::Record) impl.
///
/// A field maps to a CSV column when its type is followed by
/// `=> "name"` or `=> "name,required"`. Only fields declared plain `pub`
/// are accessible; tagging any other field fails schema derivation.
///
/// ```
/// tagcsv::csv_record! {
///     #[derive(Debug, Default)]
///     pub struct Reading {
///         pub sensor: String => "sensor,required",
///         pub value: i32 => "value",
///         pub seen: bool,
///     }
/// }
///
/// let schema = tagcsv::Schema::<Reading>::derive().unwrap();
/// assert_eq!(schema.column_names(), vec!["sensor", "value"]);
/// ```
#[macro_export]
macro_rules! csv_record {
    (@tag) => {
        ::core::option::Option::None
    };
    (@tag $tag:literal) => {
        ::core::option::Option::Some($tag)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty $(=> $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $fty,
            )*
        }

        impl $crate::Record for $name {
            fn fields() -> ::std::vec::Vec<$crate::FieldDef<Self>> {
                ::std::vec![
                    $(
                        $crate::FieldDef::new(
                            ::core::stringify!($field),
                            $crate::csv_record!(@tag $($tag)?),
                            |record: &$name| &record.$field,
                            |record: &mut $name| &mut record.$field,
                        )
                        .accessible(::core::stringify!($fvis) == "pub")
                    ),*
                ]
            }
        }
    };
}

/// Implements [`CsvValue`](crate::CsvValue) for an opaque type through its
/// [`TextDecode`](crate::TextDecode) and/or [`TextEncode`](crate::TextEncode)
/// impls.
///
/// ```
/// use tagcsv::{CodecError, CodecResult, TextDecode, TextEncode, text_value};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Celsius(f64);
///
/// impl TextDecode for Celsius {
///     fn decode_text(&mut self, raw: &[u8]) -> CodecResult<()> {
///         let text = std::str::from_utf8(raw).map_err(CodecError::from_source)?;
///         self.0 = text.trim_end_matches('C').parse::<f64>().map_err(CodecError::from_source)?;
///         Ok(())
///     }
/// }
///
/// impl TextEncode for Celsius {
///     fn encode_text(&self) -> CodecResult<Vec<u8>> {
///         Ok(format!("{}C", self.0).into_bytes())
///     }
/// }
///
/// text_value!(Celsius: decode, encode);
/// ```
#[macro_export]
macro_rules! text_value {
    (@decode) => {
        fn text_decoder() -> ::core::option::Option<$crate::DecodeFn<Self>> {
            ::core::option::Option::Some(<Self as $crate::TextDecode>::decode_text)
        }
    };
    (@encode) => {
        fn text_encoder() -> ::core::option::Option<$crate::EncodeFn<Self>> {
            ::core::option::Option::Some(<Self as $crate::TextEncode>::encode_text)
        }
    };
    ($ty:ty : decode, encode) => {
        impl $crate::CsvValue for $ty {
            $crate::text_value!(@decode);
            $crate::text_value!(@encode);
        }
    };
    ($ty:ty : decode) => {
        impl $crate::CsvValue for $ty {
            $crate::text_value!(@decode);
        }
    };
    ($ty:ty : encode) => {
        impl $crate::CsvValue for $ty {
            $crate::text_value!(@encode);
        }
    };
}
