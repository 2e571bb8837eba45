//! Display rows for a collection, produced by a per-widget formatter.

use serde::Serialize;

use super::collection::Collection;
use crate::model::record::{Record, RecordId};

/// Pure, deterministic mapping from a record to what the list shows.
pub type Formatter = fn(&Record) -> RowView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    Text(String),
    /// Opens in a new tab.
    Link { href: String, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

/// Widget-agnostic description of one row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub heading: Vec<Segment>,
    pub lines: Vec<String>,
    pub bullets: Vec<String>,
    pub image: Option<ImageView>,
    /// Small print under the row, e.g. a timestamp.
    pub footnote: Option<String>,
}

impl RowView {
    pub fn heading_text(&self) -> String {
        self.heading
            .iter()
            .map(|s| match s {
                Segment::Text(t) => t.as_str(),
                Segment::Link { text, .. } => text.as_str(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RecordId,
    pub view: RowView,
}

/// One row per record, in collection order.
pub fn render_rows(collection: &Collection, formatter: Formatter) -> Vec<Row> {
    collection
        .list()
        .map(|record| Row {
            id: record.id(),
            view: formatter(record),
        })
        .collect()
}
