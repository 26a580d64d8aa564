//! Row encoding: rendering record fields as CSV cells.

use tagcsv_model::{FieldKind, Value};
use tagcsv_schema::{FieldDef, FieldDescriptor, Schema};

use crate::error::EncodeError;

/// Renders `src` as one row, one cell per field in declaration order.
pub fn encode_row<R>(schema: &Schema<R>, src: &R) -> Result<Vec<String>, EncodeError> {
    schema
        .fields()
        .iter()
        .map(|field| encode_cell(schema.def(field), field, src))
        .collect()
}

fn encode_cell<R>(
    def: &FieldDef<R>,
    field: &FieldDescriptor,
    src: &R,
) -> Result<String, EncodeError> {
    if let Some(result) = def.encode_text(src) {
        let bytes = result.map_err(|source| EncodeError::Custom {
            field: field.name.clone(),
            source,
        })?;
        return String::from_utf8(bytes).map_err(|_| EncodeError::InvalidUtf8 {
            field: field.name.clone(),
        });
    }

    if field.kind == FieldKind::Opaque {
        return Err(EncodeError::Unsupported {
            field: field.name.clone(),
        });
    }

    // An absent optional renders as an empty cell.
    Ok(def.load(src).map(render).unwrap_or_default())
}

/// Renders a built-in value as cell text.
pub fn render(value: Value) -> String {
    match value {
        Value::Text(text) => text,
        Value::Integer(number) => number.to_string(),
        Value::Boolean(flag) => flag.to_string(),
        Value::TextList(items) => items.join(","),
        Value::IntegerList(items) => items
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}
