use super::{ListLayout, WidgetConfig, WidgetKind};
use crate::editor::collection::OrderingPolicy;
use crate::editor::rows::{RowView, Segment};
use crate::model::record::Record;
use crate::model::schema::{FieldKind, FieldSpec, Schema};

pub fn schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new("firstName", "First Name", FieldKind::Text)
            .required()
            .placeholder("Enter first name"),
        FieldSpec::new("lastName", "Last Name", FieldKind::Text)
            .required()
            .placeholder("Enter last name"),
        FieldSpec::new("title", "Title", FieldKind::Text)
            .placeholder("e.g., Former VP Customer Success at Company"),
        FieldSpec::new("mobile", "Mobile Number", FieldKind::Text)
            .placeholder("Enter mobile number"),
        FieldSpec::new("email", "Email Address", FieldKind::Text)
            .required()
            .placeholder("Enter email address"),
        FieldSpec::new("linkedinUrl", "LinkedIn URL", FieldKind::Url)
            .placeholder("e.g., https://www.linkedin.com/in/username/"),
    ])
}

pub fn format(record: &Record) -> RowView {
    let full_name = format!("{} {}", record.text("firstName"), record.text("lastName"));
    let mut heading = vec![match record.optional_text("linkedinUrl") {
        Some(href) => Segment::Link {
            href: href.to_string(),
            text: full_name,
        },
        None => Segment::Text(full_name),
    }];
    if let Some(title) = record.optional_text("title") {
        heading.push(Segment::Text(format!(" [{title}]")));
    }

    RowView {
        heading,
        lines: vec![
            record.text("mobile").to_string(),
            record.text("email").to_string(),
        ],
        ..RowView::default()
    }
}

pub fn config() -> WidgetConfig {
    WidgetConfig {
        kind: WidgetKind::References,
        title: "References",
        icon: "🤝",
        description: Some("You can ask my former bosses"),
        initially_expanded: true,
        list_heading: Some("My References"),
        form_heading: Some("Add New Reference"),
        submit_label: "Add Reference",
        empty_message: None,
        remove_label: "Remove reference",
        layout: ListLayout::Grid,
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

    fn row(linkedin: &str, title: &str) -> RowView {
        let mut editor = RecordEditor::new(schema(), OrderingPolicy::Append);
        editor.update("firstName", "Jeff").unwrap();
        editor.update("lastName", "Saenger").unwrap();
        editor.update("email", "j@example.com").unwrap();
        editor.update("mobile", "+1 555").unwrap();
        editor.update("linkedinUrl", linkedin).unwrap();
        editor.update("title", title).unwrap();
        editor.submit_at(NaiveDateTime::default()).unwrap();
        editor.rows(format).remove(0).view
    }

    #[test]
    fn name_links_to_linkedin_when_present() {
        let view = row("https://www.linkedin.com/in/jeff/", "VP");
        assert_eq!(
            view.heading,
            vec![
                Segment::Link {
                    href: "https://www.linkedin.com/in/jeff/".into(),
                    text: "Jeff Saenger".into()
                },
                Segment::Text(" [VP]".into()),
            ]
        );
        assert_eq!(view.lines, ["+1 555", "j@example.com"]);
    }

    #[test]
    fn plain_name_without_link_or_title() {
        let view = row("", "");
        assert_eq!(view.heading, vec![Segment::Text("Jeff Saenger".into())]);
    }
}
