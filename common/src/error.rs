use thiserror::Error;

use crate::model::record::RecordId;

/// Every failure the editing engine can report.
///
/// None of these are fatal: each one is surfaced inline next to the widget
/// that produced it and the user corrects the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Required fields were empty when the draft was submitted. Names are in
    /// schema order and unique.
    #[error("missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<String> },

    /// An uploaded file declared a media type outside the allow-list.
    #[error("unsupported file type: {declared:?}")]
    UnsupportedFileType { declared: String },

    /// A text field is longer than its character budget.
    #[error("field {field} has {actual} characters, limit is {limit}")]
    LengthExceeded {
        field: String,
        limit: usize,
        actual: usize,
    },

    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A value of the wrong shape was written to a field (e.g. text into a list).
    #[error("field {0} does not accept this kind of value")]
    KindMismatch(String),

    #[error("duplicate record id: {0}")]
    DuplicateId(RecordId),

    /// The platform refused to create a transient resource (e.g. an object URL).
    #[error("resource error: {0}")]
    Resource(String),

    /// The embedded profile document is malformed.
    #[error("profile content error: {0}")]
    Content(String),
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        EditorError::Content(err.to_string())
    }
}
