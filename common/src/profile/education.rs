use super::{ListLayout, WidgetConfig, WidgetKind};
use crate::editor::collection::OrderingPolicy;
use crate::editor::rows::{RowView, Segment};
use crate::model::record::Record;
use crate::model::schema::{FieldKind, FieldSpec, Schema};

const COUNTRY_FLAGS: &[(&str, &str)] = &[
    ("USA", "🇺🇸"),
    ("UK", "🇬🇧"),
    ("Canada", "🇨🇦"),
    ("Australia", "🇦🇺"),
    ("Germany", "🇩🇪"),
    ("France", "🇫🇷"),
    ("Spain", "🇪🇸"),
    ("Italy", "🇮🇹"),
    ("Japan", "🇯🇵"),
    ("China", "🇨🇳"),
    ("India", "🇮🇳"),
    ("Brazil", "🇧🇷"),
    ("Mexico", "🇲🇽"),
    ("Netherlands", "🇳🇱"),
    ("Switzerland", "🇨🇭"),
    ("Sweden", "🇸🇪"),
    ("Norway", "🇳🇴"),
    ("Denmark", "🇩🇰"),
    ("Finland", "🇫🇮"),
    ("Ireland", "🇮🇪"),
    ("Portugal", "🇵🇹"),
    ("Greece", "🇬🇷"),
    ("Russia", "🇷🇺"),
    ("South Korea", "🇰🇷"),
    ("Singapore", "🇸🇬"),
];

const UNKNOWN_FLAG: &str = "🏳️";

/// Exact, case-sensitive lookup.
pub fn country_flag(country: &str) -> &'static str {
    COUNTRY_FLAGS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, flag)| *flag)
        .unwrap_or(UNKNOWN_FLAG)
}

pub fn schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new("startDate", "Start Date", FieldKind::Text)
            .required()
            .placeholder("e.g., Sep 2016"),
        FieldSpec::new("endDate", "End Date", FieldKind::Text).placeholder("e.g., May 2020"),
        FieldSpec::new("degree", "Degree", FieldKind::Text)
            .required()
            .placeholder("e.g., Master of Business Administration"),
        FieldSpec::new("university", "University", FieldKind::Text)
            .required()
            .placeholder("e.g., Harvard Business School"),
        FieldSpec::new("universityUrl", "University URL", FieldKind::Url)
            .placeholder("e.g., https://www.harvard.edu"),
        FieldSpec::new("city", "City", FieldKind::Text).placeholder("e.g., Boston"),
        FieldSpec::new("country", "Country", FieldKind::Text).placeholder("e.g., USA"),
    ])
}

pub fn format(record: &Record) -> RowView {
    let university = record.text("university").to_string();
    let heading = vec![
        Segment::Text(format!(
            "{} - {} [{}] ",
            record.text("startDate"),
            record.text("endDate"),
            record.text("degree"),
        )),
        match record.optional_text("universityUrl") {
            Some(href) => Segment::Link {
                href: href.to_string(),
                text: university,
            },
            None => Segment::Text(university),
        },
    ];
    let country = record.text("country");

    RowView {
        heading,
        lines: vec![format!(
            "{}, {} {}",
            record.text("city"),
            country,
            country_flag(country)
        )],
        ..RowView::default()
    }
}

pub fn config() -> WidgetConfig {
    WidgetConfig {
        kind: WidgetKind::Education,
        title: "Education",
        icon: "🎓",
        description: None,
        initially_expanded: false,
        list_heading: None,
        form_heading: Some("Add New Education"),
        submit_label: "Add Education",
        empty_message: None,
        remove_label: "Remove education",
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
    fn flags_fall_back_to_white_flag() {
        assert_eq!(country_flag("France"), "🇫🇷");
        assert_eq!(country_flag("france"), UNKNOWN_FLAG);
        assert_eq!(country_flag("Atlantis"), UNKNOWN_FLAG);
    }

    #[test]
    fn university_is_linked_only_with_url() {
        let mut editor = RecordEditor::new(schema(), OrderingPolicy::Append);
        editor.update("startDate", "09/2021").unwrap();
        editor.update("endDate", "09/2022").unwrap();
        editor.update("degree", "MBA").unwrap();
        editor.update("university", "EGADE").unwrap();
        editor.update("city", "Mexico City").unwrap();
        editor.update("country", "Mexico").unwrap();
        editor.submit_at(NaiveDateTime::default()).unwrap();

        let view = editor.rows(format).remove(0).view;
        assert_eq!(view.heading_text(), "09/2021 - 09/2022 [MBA] EGADE");
        assert_eq!(view.heading[1], Segment::Text("EGADE".into()));
        assert_eq!(view.lines, ["Mexico City, Mexico 🇲🇽"]);
    }
}
