//! The in-progress record bound to a widget's form.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};

use crate::error::EditorError;
use crate::model::attachment::Attachment;
use crate::model::record::{FieldValue, IdSequence, Record};
use crate::model::schema::{FieldKind, Schema};

pub type Values = BTreeMap<String, FieldValue>;

/// Holds one draft keyed by the schema and turns it into a `Record` on a
/// successful submit.
#[derive(Debug)]
pub struct DraftForm {
    schema: Schema,
    values: Values,
    ids: IdSequence,
}

impl DraftForm {
    pub fn new(schema: Schema) -> Self {
        let values = empty_values(&schema);
        Self {
            schema,
            values,
            ids: IdSequence::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Current text of a field (empty for unknown or non-text fields).
    pub fn value(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    pub fn items(&self, name: &str) -> &[String] {
        match self.values.get(name) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    pub fn attachment(&self, name: &str) -> Option<&Attachment> {
        match self.values.get(name) {
            Some(FieldValue::Attachment(att)) => Some(att),
            _ => None,
        }
    }

    /// True when nothing has been entered yet.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(FieldValue::is_empty)
            && !self
                .values
                .values()
                .any(|v| matches!(v, FieldValue::Attachment(_)))
    }

    /// Sets one text field. No validation happens here.
    pub fn update(&mut self, name: &str, value: impl Into<String>) -> Result<(), EditorError> {
        match self.schema.require(name)?.kind {
            FieldKind::Text | FieldKind::Url | FieldKind::MultiLine => {
                self.values
                    .insert(name.to_string(), FieldValue::Text(value.into()));
                Ok(())
            }
            FieldKind::List | FieldKind::File => Err(EditorError::KindMismatch(name.to_string())),
        }
    }

    /// Appends an item to a list field. Blank items are ignored and `false`
    /// is returned.
    pub fn push_item(&mut self, name: &str, item: impl Into<String>) -> Result<bool, EditorError> {
        let item = item.into();
        let items = self.list_mut(name)?;
        if item.trim().is_empty() {
            return Ok(false);
        }
        items.push(item);
        Ok(true)
    }

    pub fn remove_item(&mut self, name: &str, index: usize) -> Result<Option<String>, EditorError> {
        let items = self.list_mut(name)?;
        Ok((index < items.len()).then(|| items.remove(index)))
    }

    fn list_mut(&mut self, name: &str) -> Result<&mut Vec<String>, EditorError> {
        if self.schema.require(name)?.kind != FieldKind::List {
            return Err(EditorError::KindMismatch(name.to_string()));
        }
        match self
            .values
            .entry(name.to_string())
            .or_insert_with(|| FieldValue::List(Vec::new()))
        {
            FieldValue::List(items) => Ok(items),
            _ => Err(EditorError::KindMismatch(name.to_string())),
        }
    }

    /// Places an attachment in a file field. The attachment it replaces, if
    /// any, is handed back so the caller can release it.
    pub fn attach(
        &mut self,
        name: &str,
        attachment: Attachment,
    ) -> Result<Option<Attachment>, EditorError> {
        if self.schema.require(name)?.kind != FieldKind::File {
            return Err(EditorError::KindMismatch(name.to_string()));
        }
        let previous = self
            .values
            .insert(name.to_string(), FieldValue::Attachment(attachment));
        Ok(match previous {
            Some(FieldValue::Attachment(att)) => Some(att),
            _ => None,
        })
    }

    pub fn take_attachment(&mut self, name: &str) -> Option<Attachment> {
        match self.values.remove(name) {
            Some(FieldValue::Attachment(att)) => Some(att),
            Some(other) => {
                self.values.insert(name.to_string(), other);
                None
            }
            None => None,
        }
    }

    /// Resets the draft to all-empty, returning any attachments it held.
    pub fn clear(&mut self) -> Vec<Attachment> {
        let old = std::mem::replace(&mut self.values, empty_values(&self.schema));
        old.into_values()
            .filter_map(|v| match v {
                FieldValue::Attachment(att) => Some(att),
                _ => None,
            })
            .collect()
    }

    pub fn submit(&mut self) -> Result<Record, EditorError> {
        self.submit_at(Local::now().naive_local())
    }

    /// Validates the draft and, on success, returns it as a record stamped
    /// with `now` and resets the draft. On failure the draft is untouched.
    pub fn submit_at(&mut self, now: NaiveDateTime) -> Result<Record, EditorError> {
        validate(&self.schema, &self.values)?;
        let values = std::mem::replace(&mut self.values, empty_values(&self.schema));
        Ok(self.finalize(values, now))
    }

    /// Builds a record from literal values, passing them through the same
    /// gate as user input. Used for the page's starting records.
    pub fn commit_values(
        &mut self,
        values: Values,
        created_at: NaiveDateTime,
    ) -> Result<Record, EditorError> {
        if let Some(unknown) = values.keys().find(|k| self.schema.field(k).is_none()) {
            return Err(EditorError::UnknownField(unknown.clone()));
        }
        validate(&self.schema, &values)?;
        Ok(self.finalize(values, created_at))
    }

    fn finalize(&mut self, mut values: Values, created_at: NaiveDateTime) -> Record {
        for spec in self.schema.fields() {
            if let Some(default) = spec.default {
                let empty = values.get(spec.name).is_none_or(FieldValue::is_empty);
                if empty {
                    values.insert(spec.name.to_string(), FieldValue::Text(default.to_string()));
                }
            }
        }
        Record::new(self.ids.next_id(), created_at, values)
    }
}

fn empty_values(schema: &Schema) -> Values {
    schema
        .fields()
        .iter()
        .filter_map(|spec| {
            let value = match spec.kind {
                FieldKind::Text | FieldKind::Url | FieldKind::MultiLine => {
                    FieldValue::Text(String::new())
                }
                FieldKind::List => FieldValue::List(Vec::new()),
                FieldKind::File => return None,
            };
            Some((spec.name.to_string(), value))
        })
        .collect()
}

fn validate(schema: &Schema, values: &Values) -> Result<(), EditorError> {
    let missing: Vec<String> = schema
        .fields()
        .iter()
        .filter(|spec| spec.required)
        .filter(|spec| values.get(spec.name).is_none_or(FieldValue::is_empty))
        .map(|spec| spec.name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(EditorError::Validation { missing });
    }

    for spec in schema.fields() {
        if let Some(FieldValue::Text(text)) = values.get(spec.name) {
            spec.check_length(text)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::FieldSpec;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .and_then(|d| d.and_hms_opt(9, 45, 0))
            .unwrap()
    }

    fn experience() -> DraftForm {
        DraftForm::new(Schema::new(vec![
            FieldSpec::new("startDate", "Start Date", FieldKind::Text).required(),
            FieldSpec::new("endDate", "End Date", FieldKind::Text),
            FieldSpec::new("title", "Title", FieldKind::Text).required(),
            FieldSpec::new("bullets", "Bullet Points", FieldKind::List),
        ]))
    }

    #[test]
    fn submit_reports_missing_fields_in_schema_order() {
        let mut draft = experience();
        draft.update("endDate", "Present").unwrap();
        let err = draft.submit_at(now()).unwrap_err();
        assert_eq!(
            err,
            EditorError::Validation {
                missing: vec!["startDate".into(), "title".into()]
            }
        );
        // left as-is for correction
        assert_eq!(draft.value("endDate"), "Present");
    }

    #[test]
    fn submit_resets_draft_and_assigns_fresh_ids() {
        let mut draft = experience();
        draft.update("startDate", "Jan 2020").unwrap();
        draft.update("title", "PM").unwrap();
        draft.push_item("bullets", "Shipped things").unwrap();
        let first = draft.submit_at(now()).unwrap();
        assert_eq!(first.text("title"), "PM");
        assert_eq!(first.list("bullets"), ["Shipped things"]);
        assert!(draft.is_blank());

        draft.update("startDate", "Feb 2021").unwrap();
        draft.update("title", "Lead").unwrap();
        let second = draft.submit_at(now()).unwrap();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut draft = experience();
        draft.update("startDate", "   ").unwrap();
        draft.update("title", "PM").unwrap();
        assert!(matches!(
            draft.submit_at(now()),
            Err(EditorError::Validation { .. })
        ));
    }

    #[test]
    fn blank_bullets_are_ignored_and_removal_is_by_index() {
        let mut draft = experience();
        assert!(!draft.push_item("bullets", "  ").unwrap());
        draft.push_item("bullets", "a").unwrap();
        draft.push_item("bullets", "b").unwrap();
        assert_eq!(draft.remove_item("bullets", 0).unwrap(), Some("a".into()));
        assert_eq!(draft.remove_item("bullets", 7).unwrap(), None);
        assert_eq!(draft.items("bullets"), ["b"]);
    }

    #[test]
    fn wrong_kind_and_unknown_fields_are_rejected() {
        let mut draft = experience();
        assert_eq!(
            draft.update("bullets", "x"),
            Err(EditorError::KindMismatch("bullets".into()))
        );
        assert_eq!(
            draft.update("salary", "x"),
            Err(EditorError::UnknownField("salary".into()))
        );
    }

    #[test]
    fn defaults_fill_empty_optional_fields() {
        let mut draft = DraftForm::new(Schema::new(vec![
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("endYear", "End Year", FieldKind::Text).default_value("Present"),
        ]));
        draft.update("name", "Rex").unwrap();
        let record = draft.submit_at(now()).unwrap();
        assert_eq!(record.text("endYear"), "Present");
    }

    #[test]
    fn length_budget_is_checked_on_submit() {
        let mut draft = DraftForm::new(Schema::new(vec![
            FieldSpec::new("comment", "Comment", FieldKind::MultiLine)
                .required()
                .max_chars(3),
        ]));
        draft.update("comment", "abcd").unwrap();
        assert!(matches!(
            draft.submit_at(now()),
            Err(EditorError::LengthExceeded { limit: 3, actual: 4, .. })
        ));
    }

    #[test]
    fn commit_values_rejects_unknown_keys() {
        let mut draft = experience();
        let mut values = Values::new();
        values.insert("nickname".into(), FieldValue::Text("x".into()));
        assert_eq!(
            draft.commit_values(values, now()).unwrap_err(),
            EditorError::UnknownField("nickname".into())
        );
    }

    proptest! {
        #[test]
        fn any_empty_required_field_fails_validation(
            required in proptest::collection::vec(any::<bool>(), 1..6),
            filled in proptest::collection::vec(any::<bool>(), 6),
        ) {
            const NAMES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];
            let specs = required
                .iter()
                .enumerate()
                .map(|(i, req)| {
                    let spec = FieldSpec::new(NAMES[i], NAMES[i], FieldKind::Text);
                    if *req { spec.required() } else { spec }
                })
                .collect();
            let mut draft = DraftForm::new(Schema::new(specs));
            for i in 0..required.len() {
                if filled[i] {
                    draft.update(NAMES[i], "value").unwrap();
                }
            }
            let expect_missing: Vec<String> = (0..required.len())
                .filter(|&i| required[i] && !filled[i])
                .map(|i| NAMES[i].to_string())
                .collect();
            match draft.submit_at(now()) {
                Ok(_) => prop_assert!(expect_missing.is_empty()),
                Err(EditorError::Validation { missing }) => prop_assert_eq!(missing, expect_missing),
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
        }
    }
}
