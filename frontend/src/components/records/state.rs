//! Runtime state of one record editor widget.

use std::collections::BTreeMap;

use common::editor::RecordEditor;
use common::model::record::RecordId;
use common::profile::WidgetConfig;
use yew::prelude::*;

use super::helpers::BlobUrls;

pub struct RecordEditorComponent {
    /// Presentation and schema of this widget; fixed for its lifetime.
    pub config: WidgetConfig,

    /// Draft plus committed records.
    pub editor: RecordEditor,

    /// Inline message under the form, cleared by the next successful edit.
    pub error: Option<String>,

    /// Not-yet-added text of each list field's item input.
    pub pending_items: BTreeMap<&'static str, String>,

    /// Object URLs backing uploaded attachments.
    pub blob_urls: BlobUrls,

    /// Hidden `<input type="file">`.
    pub file_input_ref: NodeRef,

    pub viewer_ref: NodeRef,

    /// Record shown in the photo viewer, if open.
    pub viewing: Option<RecordId>,

    /// A file is being read; further selections are ignored until it lands.
    pub reading_file: bool,
}

impl RecordEditorComponent {
    pub fn new(config: WidgetConfig, editor: RecordEditor, error: Option<String>) -> Self {
        Self {
            config,
            editor,
            error,
            pending_items: BTreeMap::new(),
            blob_urls: BlobUrls::default(),
            file_input_ref: NodeRef::default(),
            viewer_ref: NodeRef::default(),
            viewing: None,
            reading_file: false,
        }
    }

    pub fn pending_item(&self, field: &str) -> &str {
        self.pending_items.get(field).map(String::as_str).unwrap_or("")
    }
}
