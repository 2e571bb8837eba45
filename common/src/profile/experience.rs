use super::{ListLayout, WidgetConfig, WidgetKind};
use crate::editor::collection::OrderingPolicy;
use crate::editor::rows::{RowView, Segment};
use crate::model::record::Record;
use crate::model::schema::{FieldKind, FieldSpec, Schema};

pub const BULLETS: &str = "bullets";

pub fn schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new("startDate", "Start Date", FieldKind::Text)
            .required()
            .placeholder("e.g., Jan 2020"),
        FieldSpec::new("endDate", "End Date", FieldKind::Text).placeholder("e.g., Present"),
        FieldSpec::new("title", "Title", FieldKind::Text)
            .required()
            .placeholder("e.g., Senior Product Manager"),
        FieldSpec::new("company", "Company", FieldKind::Text)
            .required()
            .placeholder("e.g., Tech Innovations Inc."),
        FieldSpec::new(BULLETS, "Bullet Points", FieldKind::List).placeholder("Add a bullet point"),
    ])
}

/// `Jan 2020 - Present [Senior Product Manager] Tech Innovations Inc.`
pub fn format(record: &Record) -> RowView {
    RowView {
        heading: vec![Segment::Text(format!(
            "{} - {} [{}] {}",
            record.text("startDate"),
            record.text("endDate"),
            record.text("title"),
            record.text("company"),
        ))],
        bullets: record.list(BULLETS).to_vec(),
        ..RowView::default()
    }
}

pub fn config() -> WidgetConfig {
    WidgetConfig {
        kind: WidgetKind::Experience,
        title: "Work Experience",
        icon: "💼",
        description: Some("Professional work history and achievements"),
        initially_expanded: true,
        list_heading: None,
        form_heading: Some("Add New Work Experience"),
        submit_label: "Add Experience",
        empty_message: None,
        remove_label: "Remove experience",
        layout: ListLayout::Stack,
        schema: schema(),
        ordering: OrderingPolicy::Append,
        formatter: format,
        upload: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::RecordEditor;
    use chrono::NaiveDateTime;

    #[test]
    fn heading_and_bullets() {
        let mut editor = RecordEditor::new(schema(), OrderingPolicy::Append);
        editor.update("startDate", "Jan 2020").unwrap();
        editor.update("endDate", "Present").unwrap();
        editor.update("title", "Senior Product Manager").unwrap();
        editor.update("company", "Tech Innovations Inc.").unwrap();
        editor.draft_mut().push_item(BULLETS, "Led strategy").unwrap();
        editor.submit_at(NaiveDateTime::default()).unwrap();

        let rows = editor.rows(format);
        assert_eq!(
            rows[0].view.heading_text(),
            "Jan 2020 - Present [Senior Product Manager] Tech Innovations Inc."
        );
        assert_eq!(rows[0].view.bullets, ["Led strategy"]);
    }
}
