//! Generic editable-collection engine: one draft form feeding one ordered
//! collection, with attachment lifecycle handled on removal.

pub mod collection;
pub mod draft;
pub mod panel;
pub mod rows;
pub mod upload;

use chrono::NaiveDateTime;

use crate::error::EditorError;
use crate::model::attachment::Attachment;
use crate::model::record::{Record, RecordId};
use crate::model::schema::Schema;
use collection::{Collection, OrderingPolicy};
use draft::{DraftForm, Values};
use rows::{Formatter, Row};
use upload::{release, TransientStore};

/// Starting record of a widget, before an identifier is assigned.
#[derive(Debug)]
pub struct SeedRecord {
    pub created_at: NaiveDateTime,
    pub values: Values,
}

/// Owns the draft and the collection of exactly one widget instance.
#[derive(Debug)]
pub struct RecordEditor {
    draft: DraftForm,
    collection: Collection,
}

impl RecordEditor {
    pub fn new(schema: Schema, policy: OrderingPolicy) -> Self {
        Self {
            draft: DraftForm::new(schema),
            collection: Collection::new(policy),
        }
    }

    /// Builds an editor whose collection starts with `seeds`, in the order
    /// given (regardless of the ordering policy).
    pub fn with_seeds(
        schema: Schema,
        policy: OrderingPolicy,
        seeds: Vec<SeedRecord>,
    ) -> Result<Self, EditorError> {
        let mut editor = Self::new(schema, policy);
        let records = seeds
            .into_iter()
            .map(|seed| editor.draft.commit_values(seed.values, seed.created_at))
            .collect::<Result<Vec<_>, _>>()?;
        let ordered: Box<dyn Iterator<Item = Record>> = match policy {
            OrderingPolicy::Append => Box::new(records.into_iter()),
            OrderingPolicy::Prepend => Box::new(records.into_iter().rev()),
        };
        for record in ordered {
            editor.collection.append(record)?;
        }
        Ok(editor)
    }

    pub fn schema(&self) -> &Schema {
        self.draft.schema()
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftForm {
        &mut self.draft
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn list(&self) -> impl ExactSizeIterator<Item = &Record> {
        self.collection.list()
    }

    pub fn rows(&self, formatter: Formatter) -> Vec<Row> {
        rows::render_rows(&self.collection, formatter)
    }

    pub fn update(&mut self, name: &str, value: impl Into<String>) -> Result<(), EditorError> {
        self.draft.update(name, value)
    }

    /// Commits the draft. On failure neither the draft nor the collection
    /// changes.
    pub fn submit(&mut self) -> Result<RecordId, EditorError> {
        let record = self.draft.submit()?;
        self.commit(record)
    }

    pub fn submit_at(&mut self, now: NaiveDateTime) -> Result<RecordId, EditorError> {
        let record = self.draft.submit_at(now)?;
        self.commit(record)
    }

    fn commit(&mut self, record: Record) -> Result<RecordId, EditorError> {
        let id = record.id();
        self.collection.append(record)?;
        Ok(id)
    }

    /// Puts an attachment in the draft, releasing whatever it replaces.
    pub fn attach(
        &mut self,
        field: &str,
        attachment: Attachment,
        store: &mut impl TransientStore,
    ) -> Result<(), EditorError> {
        match self.draft.attach(field, attachment) {
            Ok(Some(previous)) => {
                release(previous, store);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Drops a pending draft attachment, e.g. after a failed submit.
    pub fn discard_attachment(&mut self, field: &str, store: &mut impl TransientStore) {
        if let Some(att) = self.draft.take_attachment(field) {
            release(att, store);
        }
    }

    /// Removes a record and releases its transient attachments. Returns
    /// `false` when `id` is not in the collection.
    pub fn remove(&mut self, id: RecordId, store: &mut impl TransientStore) -> bool {
        match self.collection.remove(id) {
            Some(record) => {
                for att in record.into_attachments() {
                    release(att, store);
                }
                true
            }
            None => false,
        }
    }

    /// Releases everything the editor still holds, for teardown.
    pub fn release_all(&mut self, store: &mut impl TransientStore) {
        for att in self.draft.clear() {
            release(att, store);
        }
        let ids: Vec<RecordId> = self.collection.list().map(Record::id).collect();
        for id in ids {
            self.remove(id, store);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::upload::{MemoryStore, SelectedFile, JPEG_ONLY};
    use super::*;
    use crate::model::record::FieldValue;
    use crate::model::schema::{FieldKind, FieldSpec};

    fn gallery() -> RecordEditor {
        let schema = Schema::new(vec![
            FieldSpec::new("startYear", "Start Year", FieldKind::Text).default_value("Unknown"),
            FieldSpec::new("photo", "Photo", FieldKind::File).required(),
        ]);
        let mut values = Values::new();
        values.insert(
            "photo".into(),
            FieldValue::Attachment(Attachment::built_in("/images/a.jpeg", "Atax")),
        );
        RecordEditor::with_seeds(
            schema,
            OrderingPolicy::Append,
            vec![SeedRecord {
                created_at: NaiveDateTime::default(),
                values,
            }],
        )
        .unwrap()
    }

    fn jpeg(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.into(),
            mime: "image/jpeg".into(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn removing_an_uploaded_record_revokes_its_reference_once() {
        let mut store = MemoryStore::new();
        let mut editor = gallery();
        let att = JPEG_ONLY.accept(&jpeg("rex.jpeg"), &mut store).unwrap();
        let url = att.url().to_string();
        editor.attach("photo", att, &mut store).unwrap();
        let id = editor.submit().unwrap();

        assert_eq!(editor.list().len(), 2);
        assert!(editor.remove(id, &mut store));
        assert!(!editor.remove(id, &mut store));
        assert_eq!(store.revoked(), [url]);
    }

    #[test]
    fn removing_a_seed_photo_revokes_nothing() {
        let mut store = MemoryStore::new();
        let mut editor = gallery();
        let seed = editor.list().next().unwrap().id();
        assert!(editor.remove(seed, &mut store));
        assert!(store.revoked().is_empty());
    }

    #[test]
    fn replacing_a_pending_attachment_releases_the_old_one() {
        let mut store = MemoryStore::new();
        let mut editor = gallery();
        let first = JPEG_ONLY.accept(&jpeg("a.jpeg"), &mut store).unwrap();
        let first_url = first.url().to_string();
        editor.attach("photo", first, &mut store).unwrap();
        let second = JPEG_ONLY.accept(&jpeg("b.jpeg"), &mut store).unwrap();
        editor.attach("photo", second, &mut store).unwrap();
        assert_eq!(store.revoked(), [first_url]);

        editor.discard_attachment("photo", &mut store);
        assert!(store.live().is_empty());
    }

    #[test]
    fn failed_submit_leaves_collection_unchanged() {
        let mut editor = gallery();
        editor.update("startYear", "2015").unwrap();
        assert!(matches!(
            editor.submit(),
            Err(EditorError::Validation { .. })
        ));
        assert_eq!(editor.list().len(), 1);
        assert_eq!(editor.draft().value("startYear"), "2015");
    }

    #[test]
    fn release_all_empties_the_store() {
        let mut store = MemoryStore::new();
        let mut editor = gallery();
        let att = JPEG_ONLY.accept(&jpeg("rex.jpeg"), &mut store).unwrap();
        editor.attach("photo", att, &mut store).unwrap();
        editor.submit().unwrap();
        let pending = JPEG_ONLY.accept(&jpeg("bo.jpeg"), &mut store).unwrap();
        editor.attach("photo", pending, &mut store).unwrap();

        editor.release_all(&mut store);
        assert!(store.live().is_empty());
        assert_eq!(editor.list().len(), 0);
    }
}
