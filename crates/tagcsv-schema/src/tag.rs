//! Field tag grammar: `name` or `name,required`.

use crate::error::{Result, SchemaError};

/// Parsed field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: &'a str,
    pub required: bool,
}

/// Parses the tag of field `field`.
///
/// Returns `Ok(None)` when the tag names no column, which excludes the
/// field from the schema.
pub fn parse_tag<'a>(field: &str, tag: &'a str) -> Result<Option<Tag<'a>>> {
    let parts: Vec<&str> = tag.split(',').collect();
    if parts.len() > 2 {
        return Err(SchemaError::TooManyTagValues {
            field: field.to_string(),
            count: parts.len(),
        });
    }

    let name = parts[0];
    if name.is_empty() {
        return Ok(None);
    }

    let required = match parts.get(1) {
        None => false,
        Some(&"required") => true,
        Some(option) => {
            return Err(SchemaError::UnknownTagOption {
                field: field.to_string(),
                option: (*option).to_string(),
            });
        }
    };

    Ok(Some(Tag { name, required }))
}
