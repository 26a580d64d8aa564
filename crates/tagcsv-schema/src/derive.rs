//! Schema derivation: from a record's field table to ordered descriptors.

use std::fmt;

use tagcsv_model::{FieldKind, Kind};

use crate::error::{Result, SchemaError};
use crate::reconcile::normalize_header;
use crate::record::{FieldDef, Record, Shape};
use crate::tag::parse_tag;

/// Mapping metadata for one participating field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Logical column name from the tag.
    pub name: String,
    /// Rust identifier of the field.
    pub ident: &'static str,
    pub required: bool,
    /// Position of the field in the record's field table.
    pub index: usize,
    pub kind: FieldKind,
    pub decodes_text: bool,
    pub encodes_text: bool,
}

impl FieldDescriptor {
    /// Element kind for list fields.
    pub fn element_kind(&self) -> Option<Kind> {
        self.kind.element_kind()
    }

    /// Name used for header matching.
    pub fn normalized_name(&self) -> String {
        normalize_header(self.name.as_bytes())
    }
}

/// Derived schema of a record type: its field table plus the descriptors
/// of the fields that participate in CSV mapping, in declaration order.
pub struct Schema<R> {
    defs: Vec<FieldDef<R>>,
    fields: Vec<FieldDescriptor>,
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("defs", &self.defs)
            .field("fields", &self.fields)
            .finish()
    }
}

impl<R: Record> Schema<R> {
    /// Derives the schema of `R`.
    pub fn derive() -> Result<Self> {
        let defs = R::fields();
        let fields = derive_fields(&defs)?;
        tracing::debug!(
            record = std::any::type_name::<R>(),
            fields = fields.len(),
            "derived record schema"
        );
        Ok(Self { defs, fields })
    }
}

impl<R> Schema<R> {
    /// Participating fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Field table entry a descriptor points at.
    pub fn def(&self, field: &FieldDescriptor) -> &FieldDef<R> {
        &self.defs[field.index]
    }

    /// Column names in declaration order, as written in a header row.
    pub fn column_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Ensures every opaque field can be decoded from text.
    pub fn require_decoders(&self) -> Result<()> {
        match self
            .fields
            .iter()
            .find(|f| f.kind == FieldKind::Opaque && !f.decodes_text)
        {
            Some(field) => Err(SchemaError::MissingDecoder {
                name: field.name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Ensures every opaque field can be encoded to text.
    pub fn require_encoders(&self) -> Result<()> {
        match self
            .fields
            .iter()
            .find(|f| f.kind == FieldKind::Opaque && !f.encodes_text)
        {
            Some(field) => Err(SchemaError::MissingEncoder {
                name: field.name.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Builds descriptors for the tagged fields of a field table.
///
/// Untagged fields and fields whose tag has an empty name are skipped.
pub fn derive_fields<R>(defs: &[FieldDef<R>]) -> Result<Vec<FieldDescriptor>> {
    let mut fields: Vec<FieldDescriptor> = Vec::new();

    for (index, def) in defs.iter().enumerate() {
        let Some(raw_tag) = def.tag() else {
            continue;
        };
        let Some(tag) = parse_tag(def.ident(), raw_tag)? else {
            continue;
        };
        if !def.is_accessible() {
            return Err(SchemaError::InaccessibleField {
                field: def.ident().to_string(),
            });
        }

        let shape = def.shape();
        let kind = field_kind(def.ident(), shape)?;

        if fields.iter().any(|f| f.name == tag.name) {
            return Err(SchemaError::DuplicateColumn {
                name: tag.name.to_string(),
            });
        }

        fields.push(FieldDescriptor {
            name: tag.name.to_string(),
            ident: def.ident(),
            required: tag.required,
            index,
            kind,
            decodes_text: shape.decodes_text,
            encodes_text: shape.encodes_text,
        });
    }

    if fields.is_empty() {
        return Err(SchemaError::NoFields);
    }
    Ok(fields)
}

fn field_kind(ident: &str, shape: Shape) -> Result<FieldKind> {
    match shape.kind {
        Kind::Invalid => Err(SchemaError::InvalidType {
            field: ident.to_string(),
        }),
        Kind::Text => Ok(FieldKind::Text),
        Kind::Integer => Ok(FieldKind::Integer),
        Kind::Boolean => Ok(FieldKind::Boolean),
        Kind::List => match shape.element {
            Some(Kind::Text) => Ok(FieldKind::TextList),
            Some(Kind::Integer) => Ok(FieldKind::IntegerList),
            _ => Err(SchemaError::UnsupportedElement {
                field: ident.to_string(),
            }),
        },
        // Codec availability is audited by the decoder/encoder constructors.
        Kind::Opaque => Ok(FieldKind::Opaque),
    }
}
