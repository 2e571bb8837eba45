use chrono::NaiveDateTime;

use super::{ListLayout, WidgetConfig, WidgetKind};
use crate::editor::collection::OrderingPolicy;
use crate::editor::rows::RowView;
use crate::model::record::Record;
use crate::model::schema::{FieldKind, FieldSpec, Schema};

pub const COMMENT: &str = "comment";
pub const MAX_CHARS: usize = 200;

pub fn schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new(COMMENT, "Comment", FieldKind::MultiLine)
            .required()
            .placeholder("Share your thoughts (max 200 characters)")
            .max_chars(MAX_CHARS),
    ])
}

/// `12/15/2023 - 14:30hrs`
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%m/%d/%Y - %H:%Mhrs").to_string()
}

pub fn format(record: &Record) -> RowView {
    RowView {
        lines: vec![record.text(COMMENT).to_string()],
        footnote: Some(format_timestamp(record.created_at())),
        ..RowView::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTone {
    Normal,
    /// Past 80% of the budget.
    Warning,
    Over,
}

/// Tone of the `n/200` counter for a text of `chars` characters.
pub fn counter_tone(chars: usize, limit: usize) -> CounterTone {
    if chars > limit {
        CounterTone::Over
    } else if chars * 5 > limit * 4 {
        CounterTone::Warning
    } else {
        CounterTone::Normal
    }
}

pub fn config() -> WidgetConfig {
    WidgetConfig {
        kind: WidgetKind::Guestbook,
        title: "Guestbook",
        icon: "📖",
        description: Some("Leave a comment for future visitors"),
        initially_expanded: true,
        list_heading: Some("Recent Comments"),
        form_heading: None,
        submit_label: "Sign Guestbook",
        empty_message: Some("No comments yet. Be the first to sign the guestbook!"),
        remove_label: "Remove comment",
        layout: ListLayout::Stack,
        schema: schema(),
        ordering: OrderingPolicy::Prepend,
        formatter: format,
        upload: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::RecordEditor;
    use crate::error::EditorError;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    }

    #[test]
    fn timestamp_is_zero_padded() {
        assert_eq!(format_timestamp(at(2024, 1, 5, 9, 45)), "01/05/2024 - 09:45hrs");
    }

    #[test]
    fn exactly_the_budget_is_accepted() {
        let mut editor = RecordEditor::new(schema(), OrderingPolicy::Prepend);
        editor.update(COMMENT, "a".repeat(MAX_CHARS)).unwrap();
        assert!(editor.submit_at(at(2024, 1, 5, 9, 45)).is_ok());
        assert_eq!(editor.list().len(), 1);
    }

    #[test]
    fn one_over_the_budget_is_rejected() {
        let mut editor = RecordEditor::new(schema(), OrderingPolicy::Prepend);
        editor.update(COMMENT, "a".repeat(MAX_CHARS + 1)).unwrap();
        let err = editor.submit_at(at(2024, 1, 5, 9, 45)).unwrap_err();
        assert_eq!(
            err,
            EditorError::LengthExceeded {
                field: COMMENT.into(),
                limit: MAX_CHARS,
                actual: MAX_CHARS + 1
            }
        );
        assert_eq!(editor.list().len(), 0);
        assert_eq!(
            editor.schema().describe(&err),
            "Comment must be 200 characters or less"
        );
    }

    #[test]
    fn blank_comment_message() {
        let mut editor = RecordEditor::new(schema(), OrderingPolicy::Prepend);
        editor.update(COMMENT, "   ").unwrap();
        let err = editor.submit_at(at(2024, 1, 5, 9, 45)).unwrap_err();
        assert_eq!(editor.schema().describe(&err), "Comment cannot be empty");
    }

    #[test]
    fn newest_entry_is_listed_first_with_timestamp() {
        let mut editor = RecordEditor::new(schema(), OrderingPolicy::Prepend);
        editor.update(COMMENT, "first").unwrap();
        editor.submit_at(at(2023, 12, 15, 14, 30)).unwrap();
        editor.update(COMMENT, "second").unwrap();
        editor.submit_at(at(2024, 1, 5, 9, 45)).unwrap();

        let rows = editor.rows(format);
        assert_eq!(rows[0].view.lines, ["second"]);
        assert_eq!(rows[1].view.footnote.as_deref(), Some("12/15/2023 - 14:30hrs"));
    }

    #[test]
    fn counter_warns_past_eighty_percent() {
        assert_eq!(counter_tone(160, 200), CounterTone::Normal);
        assert_eq!(counter_tone(161, 200), CounterTone::Warning);
        assert_eq!(counter_tone(200, 200), CounterTone::Warning);
        assert_eq!(counter_tone(201, 200), CounterTone::Over);
    }
}
