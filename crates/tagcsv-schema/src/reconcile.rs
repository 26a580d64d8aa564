//! Header reconciliation: aligning physical CSV columns to schema fields.

use std::collections::HashSet;

use crate::derive::FieldDescriptor;
use crate::error::HeaderError;

/// Normalizes a header cell for matching.
///
/// Bytes that are not valid UTF-8 and byte-order marks are dropped, then the
/// value is trimmed and lowercased.
pub fn normalize_header(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let cleaned: String = text
        .chars()
        .filter(|c| *c != char::REPLACEMENT_CHARACTER && *c != '\u{feff}')
        .collect();
    cleaned.trim().to_lowercase()
}

/// Column-indexed mapping built from one header row.
///
/// Slot `i` holds the field decoded from physical column `i`, or `None`
/// for a column no field claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledMapping {
    headers: Vec<String>,
    slots: Vec<Option<FieldDescriptor>>,
}

impl ReconciledMapping {
    /// Number of physical columns.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Field mapped to column `index`.
    pub fn slot(&self, index: usize) -> Option<&FieldDescriptor> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// All slots in column order.
    pub fn slots(&self) -> &[Option<FieldDescriptor>] {
        &self.slots
    }

    /// Header cells as read, lossily decoded.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Logical names of the matched fields, in column order.
    pub fn matched_headers(&self) -> Vec<&str> {
        self.slots
            .iter()
            .flatten()
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Header cells no field claimed.
    pub fn extra_headers(&self) -> Vec<&str> {
        self.headers
            .iter()
            .zip(&self.slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(header, _)| header.as_str())
            .collect()
    }
}

/// Matches a header row against schema fields.
///
/// Matching is case- and whitespace-insensitive. Each column takes the first
/// field whose normalized name matches; unmatched columns are kept as empty
/// slots. Fails on a repeated header or a required field without a column.
pub fn reconcile<H: AsRef<[u8]>>(
    headers: &[H],
    fields: &[FieldDescriptor],
) -> Result<ReconciledMapping, HeaderError> {
    let field_names: Vec<String> = fields.iter().map(FieldDescriptor::normalized_name).collect();

    let mut seen: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut raw_headers = Vec::with_capacity(headers.len());
    let mut slots = Vec::with_capacity(headers.len());

    for header in headers {
        let raw = String::from_utf8_lossy(header.as_ref()).into_owned();
        let normalized = normalize_header(header.as_ref());

        let slot = field_names
            .iter()
            .position(|name| *name == normalized)
            .map(|idx| fields[idx].clone());

        if !seen.insert(normalized) {
            return Err(HeaderError::DuplicateHeader { header: raw });
        }

        raw_headers.push(raw);
        slots.push(slot);
    }

    for (field, name) in fields.iter().zip(&field_names) {
        if field.required && !seen.contains(name) {
            return Err(HeaderError::MissingRequired {
                name: field.name.clone(),
            });
        }
    }

    Ok(ReconciledMapping {
        headers: raw_headers,
        slots,
    })
}
