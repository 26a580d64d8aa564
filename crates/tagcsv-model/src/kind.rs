//! Static shape of a field type.

use std::fmt;

/// Shape a field type reports about itself.
///
/// This is what a type says it is; [`FieldKind`] is what the schema keeps
/// after validating the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Placeholder for "no type". Never valid in a schema.
    Invalid,
    /// UTF-8 text.
    Text,
    /// Base-10 signed integer.
    Integer,
    /// Boolean literal.
    Boolean,
    /// Homogeneous list, encoded as one comma-joined cell.
    List,
    /// Any other type. Usable only through a custom text codec.
    Opaque,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Invalid => "invalid",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::List => "list",
            Self::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

/// Declared kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
    TextList,
    IntegerList,
    /// Handled exclusively by the type's custom text codec.
    Opaque,
}

impl FieldKind {
    /// Element kind for list fields.
    #[must_use]
    pub const fn element_kind(self) -> Option<Kind> {
        match self {
            Self::TextList => Some(Kind::Text),
            Self::IntegerList => Some(Kind::Integer),
            _ => None,
        }
    }

    /// Whether the kind is one of the list kinds.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::TextList | Self::IntegerList)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::TextList => "list of text",
            Self::IntegerList => "list of integer",
            Self::Opaque => "opaque",
        };
        f.write_str(name)
    }
}
