//! Fixed-column record layouts
//!
//! A layout is an ordered list of field descriptors. Extraction slices each
//! field's column range out of a decoded line, trims it and casts it to the
//! declared type. Blank fields decode to `None`, never to zero or "".

use crate::constants::{admin_fields, coordinate_fields};
use crate::{Error, Result};
use std::collections::HashMap;

/// Declared type of a fixed-column field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
}

/// A decoded field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Position and type of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// 1-based first column
    pub start: usize,
    pub width: usize,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, start: usize, width: usize, kind: FieldKind) -> Self {
        Self {
            name,
            start,
            width,
            kind,
        }
    }

    /// 0-based half-open character range
    pub fn range(&self) -> std::ops::Range<usize> {
        let begin = self.start - 1;
        begin..begin + self.width
    }
}

/// Ordered set of field descriptors for one record kind
#[derive(Debug, Clone)]
pub struct RecordLayout {
    fields: Vec<FieldSpec>,
}

impl RecordLayout {
    /// Build a layout; fields are sorted by start column
    pub fn new(mut fields: Vec<FieldSpec>) -> Self {
        fields.sort_by_key(|field| field.start);
        Self { fields }
    }

    /// Administrative block (` 01 `) layout
    pub fn administrative() -> Self {
        use FieldKind::{Integer, Text};
        Self::new(vec![
            FieldSpec::new(admin_fields::PROJECT, 5, 12, Text),
            FieldSpec::new(admin_fields::DATE, 18, 8, Text),
            FieldSpec::new(admin_fields::VERSION, 27, 3, Integer),
            FieldSpec::new(admin_fields::COORDINATE_SYSTEM, 31, 7, Integer),
            FieldSpec::new(admin_fields::MUNICIPALITY, 39, 4, Text),
            FieldSpec::new(admin_fields::UNITS, 44, 12, Text),
            FieldSpec::new(admin_fields::OBSERVER, 57, 12, Text),
        ])
    }

    /// Coordinate block (` 05 `) layout
    pub fn coordinate() -> Self {
        use FieldKind::{Float, Text};
        Self::new(vec![
            FieldSpec::new(coordinate_fields::POINT_ID, 5, 10, Text),
            FieldSpec::new(coordinate_fields::TEMA_CODE, 16, 8, Text),
            FieldSpec::new(coordinate_fields::FIRST_COORDINATE, 25, 12, Float),
            FieldSpec::new(coordinate_fields::SECOND_COORDINATE, 38, 11, Float),
            FieldSpec::new(coordinate_fields::ELEVATION, 50, 8, Float),
        ])
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Extract and decode every field of `line`
    ///
    /// Columns are counted in characters of the decoded line. Columns past
    /// the end of a short line read as blank.
    pub fn extract(&self, line: &str) -> Result<ExtractedRecord> {
        let chars: Vec<char> = line.chars().collect();
        let mut values = HashMap::with_capacity(self.fields.len());

        for field in &self.fields {
            let range = field.range();
            let begin = range.start.min(chars.len());
            let end = range.end.min(chars.len());
            let raw: String = chars[begin..end].iter().collect();

            if let Some(value) = decode_field(field, raw.trim())? {
                values.insert(field.name, value);
            }
        }

        Ok(ExtractedRecord { values })
    }
}

/// Cast a trimmed field to its declared type; blank means absent
fn decode_field(field: &FieldSpec, trimmed: &str) -> Result<Option<FieldValue>> {
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value = match field.kind {
        FieldKind::Text => FieldValue::Text(trimmed.to_string()),
        FieldKind::Integer => FieldValue::Integer(trimmed.parse::<i64>().map_err(|e| {
            Error::field_decode(field.name, trimmed, format!("invalid integer ({})", e))
        })?),
        FieldKind::Float => {
            let value = trimmed.parse::<f64>().map_err(|e| {
                Error::field_decode(field.name, trimmed, format!("invalid number ({})", e))
            })?;
            if !value.is_finite() {
                return Err(Error::field_decode(field.name, trimmed, "number is not finite"));
            }
            FieldValue::Float(value)
        }
    };

    Ok(Some(value))
}

/// Decoded values of one record, keyed by field name
#[derive(Debug, Clone, Default)]
pub struct ExtractedRecord {
    values: HashMap<&'static str, FieldValue>,
}

impl ExtractedRecord {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> Option<String> {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(FieldValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(FieldValue::Float(value)) => Some(*value),
            _ => None,
        }
    }
}
