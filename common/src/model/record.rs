use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::attachment::Attachment;

/// System-assigned record identifier, unrelated to any user-entered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RecordId(u64);

impl RecordId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rec-{}", self.0)
    }
}

/// Monotonic identifier source owned by one editor instance.
///
/// Every id it hands out is strictly greater than the previous one, so two
/// records minted by the same sequence can never collide.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> RecordId {
        self.last += 1;
        RecordId(self.last)
    }
}

/// The value held by one field of a draft or record.
#[derive(Debug)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Attachment(Attachment),
}

impl FieldValue {
    /// Whitespace-only text and empty lists count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Attachment(_) => false,
        }
    }
}

/// A committed item of a widget's collection. Never mutated in place.
#[derive(Debug)]
pub struct Record {
    id: RecordId,
    created_at: NaiveDateTime,
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub(crate) fn new(
        id: RecordId,
        created_at: NaiveDateTime,
        fields: BTreeMap<String, FieldValue>,
    ) -> Self {
        Self {
            id,
            created_at,
            fields,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Text of a field, or `""` when absent or not text.
    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Text of a field when it holds something other than whitespace.
    pub fn optional_text(&self, name: &str) -> Option<&str> {
        Some(self.text(name)).filter(|t| !t.trim().is_empty())
    }

    pub fn list(&self, name: &str) -> &[String] {
        match self.fields.get(name) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    pub fn attachment(&self, name: &str) -> Option<&Attachment> {
        match self.fields.get(name) {
            Some(FieldValue::Attachment(att)) => Some(att),
            _ => None,
        }
    }

    /// Consumes the record, yielding the attachments it owned.
    pub fn into_attachments(self) -> Vec<Attachment> {
        self.fields
            .into_values()
            .filter_map(|value| match value {
                FieldValue::Attachment(att) => Some(att),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_strictly_increasing() {
        let mut seq = IdSequence::new();
        let a = seq.next_id();
        let b = seq.next_id();
        assert!(b > a);
        assert_eq!(a.to_string(), "rec-1");
    }

    #[test]
    fn whitespace_text_is_empty() {
        assert!(FieldValue::Text("  \t".into()).is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::Text(" x ".into()).is_empty());
    }
}
