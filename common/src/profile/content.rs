//! Page content embedded at compile time: header text, static widgets and the
//! starting records of every editable widget.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::WidgetKind;
use crate::editor::draft::Values;
use crate::editor::{RecordEditor, SeedRecord};
use crate::error::EditorError;
use crate::model::attachment::Attachment;
use crate::model::record::FieldValue;

const EMBEDDED: &str = include_str!("../../data/profile.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageHeader {
    pub title: String,
    pub quote_intro: String,
    pub quote: String,
    pub quote_outro: String,
    pub link: ExternalLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: String,
    pub percentage: u8,
    /// CSS class of the bar.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageColumns {
    pub left: Vec<Language>,
    pub right: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Learned {
    pub question: String,
    pub intro: String,
    pub word: String,
    pub meaning: String,
    pub notes: Vec<String>,
}

/// Literal field value as written in the content file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    Text(String),
    List(Vec<String>),
    Asset { asset: String, name: String },
}

impl SeedValue {
    fn into_field(self) -> FieldValue {
        match self {
            SeedValue::Text(text) => FieldValue::Text(text),
            SeedValue::List(items) => FieldValue::List(items),
            SeedValue::Asset { asset, name } => {
                FieldValue::Attachment(Attachment::built_in(asset, name))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedEntry {
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    pub fields: BTreeMap<String, SeedValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileContent {
    pub header: PageHeader,
    pub languages: LanguageColumns,
    pub learned: Learned,
    records: BTreeMap<String, Vec<SeedEntry>>,
}

impl ProfileContent {
    /// Parses the content bundled with the page.
    pub fn embedded() -> Result<Self, EditorError> {
        Self::parse(EMBEDDED)
    }

    pub fn parse(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn seeds(&self, kind: WidgetKind) -> Vec<SeedRecord> {
        self.records
            .get(kind.key())
            .map(|entries| {
                entries
                    .iter()
                    .cloned()
                    .map(|entry| SeedRecord {
                        created_at: entry.created_at.unwrap_or_default(),
                        values: entry
                            .fields
                            .into_iter()
                            .map(|(name, value)| (name, value.into_field()))
                            .collect::<Values>(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A fresh editor for `kind`, pre-filled with its starting records.
    pub fn editor(&self, kind: WidgetKind) -> Result<RecordEditor, EditorError> {
        let config = kind.config();
        RecordEditor::with_seeds(config.schema, config.ordering, self.seeds(kind)).map_err(
            |err| EditorError::Content(format!("{} seed records: {err}", kind.key())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_seeds_every_widget() {
        let content = ProfileContent::embedded().unwrap();
        for kind in WidgetKind::ALL {
            let editor = content.editor(kind).unwrap();
            assert_eq!(editor.list().len(), 2, "{}", kind.key());
        }
        assert_eq!(content.languages.left.len(), 3);
        assert_eq!(content.languages.right.len(), 2);
        assert_eq!(content.learned.word, "Verschlimmbessern");
    }

    #[test]
    fn seed_missing_a_required_field_is_a_content_error() {
        let json = EMBEDDED.replace("\"company\": \"Digital Solutions Corp.\",", "");
        let content = ProfileContent::parse(&json).unwrap();
        assert!(matches!(
            content.editor(WidgetKind::Experience),
            Err(EditorError::Content(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_content_error() {
        assert!(matches!(
            ProfileContent::parse("{"),
            Err(EditorError::Content(_))
        ));
    }

    #[test]
    fn unknown_widget_key_yields_no_seeds() {
        let content = ProfileContent::parse(
            &EMBEDDED.replace("\"guestbook\": [", "\"visitors\": ["),
        )
        .unwrap();
        assert!(content.seeds(WidgetKind::Guestbook).is_empty());
    }
}
