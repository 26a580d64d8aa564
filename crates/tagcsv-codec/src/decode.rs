//! Row decoding: coercing CSV cells into record fields.

use tagcsv_model::{CodecError, FieldKind, Value};
use tagcsv_schema::{FieldDef, FieldDescriptor, ReconciledMapping, Schema};

use crate::error::DecodeError;

/// Decodes one data row into `dest`.
///
/// `cells` must hold exactly one entry per header column. Unmapped columns
/// are ignored. An empty cell fails a required field and resets an optional
/// one to its default. On error, fields decoded from earlier cells keep
/// their new values.
pub fn decode_row<R>(
    schema: &Schema<R>,
    mapping: &ReconciledMapping,
    cells: &[&[u8]],
    dest: &mut R,
) -> Result<(), DecodeError> {
    if cells.len() != mapping.len() {
        return Err(DecodeError::ColumnCount {
            expected: mapping.len(),
            found: cells.len(),
        });
    }

    for (column, cell) in cells.iter().enumerate() {
        let Some(field) = mapping.slot(column) else {
            continue;
        };
        let def = schema.def(field);
        let value = trim_cell(cell);

        if value.is_empty() {
            if field.required {
                return Err(DecodeError::MissingValue {
                    field: field.name.clone(),
                });
            }
            def.reset(dest);
            continue;
        }

        decode_cell(def, field, value, dest)?;
    }
    Ok(())
}

/// Trims surrounding whitespace. Non-UTF-8 cells are trimmed of ASCII
/// whitespace only.
pub fn trim_cell(raw: &[u8]) -> &[u8] {
    match std::str::from_utf8(raw) {
        Ok(text) => text.trim().as_bytes(),
        Err(_) => raw.trim_ascii(),
    }
}

fn decode_cell<R>(
    def: &FieldDef<R>,
    field: &FieldDescriptor,
    raw: &[u8],
    dest: &mut R,
) -> Result<(), DecodeError> {
    if let Some(result) = def.decode_text(dest, raw) {
        return result.map_err(|source| DecodeError::Custom {
            value: String::from_utf8_lossy(raw).into_owned(),
            field: field.name.clone(),
            source,
        });
    }

    let text = std::str::from_utf8(raw).map_err(|_| DecodeError::InvalidUtf8 {
        field: field.name.clone(),
    })?;

    let value = match field.kind {
        FieldKind::Text => Value::Text(text.to_string()),
        FieldKind::Integer => {
            let number = text
                .parse::<i64>()
                .map_err(|_| integer_error(field, text))?;
            Value::Integer(number)
        }
        FieldKind::Boolean => {
            let flag = parse_bool(text).ok_or_else(|| DecodeError::Boolean {
                value: text.to_string(),
                field: field.name.clone(),
            })?;
            Value::Boolean(flag)
        }
        FieldKind::TextList => Value::TextList(text.split(',').map(str::to_string).collect()),
        FieldKind::IntegerList => {
            Value::IntegerList(parse_integer_list(field, text, def.shape().integer_range)?)
        }
        FieldKind::Opaque => {
            return Err(DecodeError::Unsupported {
                field: field.name.clone(),
            });
        }
    };

    if def.store(dest, value) {
        Ok(())
    } else {
        // Only integers can fail to store: the value did not fit the width.
        Err(integer_error(field, text))
    }
}

fn integer_error(field: &FieldDescriptor, text: &str) -> DecodeError {
    DecodeError::Integer {
        value: text.to_string(),
        field: field.name.clone(),
    }
}

/// Elements are parsed as they appear between commas, without trimming,
/// and must each fit within `range`.
fn parse_integer_list(
    field: &FieldDescriptor,
    text: &str,
    range: Option<(i64, i64)>,
) -> Result<Vec<i64>, DecodeError> {
    text.split(',')
        .enumerate()
        .map(|(index, item)| {
            parse_element(item, range).map_err(|source| DecodeError::IntegerElement {
                value: item.to_string(),
                index,
                field: field.name.clone(),
                source,
            })
        })
        .collect()
}

fn parse_element(item: &str, range: Option<(i64, i64)>) -> Result<i64, CodecError> {
    let number = item.parse::<i64>().map_err(CodecError::from_source)?;
    match range {
        Some((min, max)) if number < min || number > max => Err(CodecError::new(format!(
            "number out of range [{min}, {max}]"
        ))),
        _ => Ok(number),
    }
}

/// Accepts `1`, `t`, `T`, `true`, `TRUE` and `True`, and the matching
/// false spellings. Other letter cases are rejected.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
