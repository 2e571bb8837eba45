use super::{ListLayout, UploadSlot, WidgetConfig, WidgetKind};
use crate::editor::collection::OrderingPolicy;
use crate::editor::rows::{ImageView, RowView};
use crate::editor::upload::JPEG_ONLY;
use crate::model::record::Record;
use crate::model::schema::{FieldKind, FieldSpec, Schema};

pub const PHOTO: &str = "photo";

pub fn schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new("startYear", "Start Year", FieldKind::Text)
            .placeholder("e.g., 2015")
            .default_value("Unknown"),
        FieldSpec::new("endYear", "End Year", FieldKind::Text)
            .placeholder("e.g., Present")
            .default_value("Present"),
        FieldSpec::new(PHOTO, "Photo", FieldKind::File).required(),
    ])
}

/// Photo tile captioned `Atax | Airdale [2000 - 2013]`.
pub fn format(record: &Record) -> RowView {
    let (src, name) = record
        .attachment(PHOTO)
        .map(|att| (att.url().to_string(), att.name().to_string()))
        .unwrap_or_default();
    RowView {
        lines: vec![format!(
            "{} [{} - {}]",
            name,
            record.text("startYear"),
            record.text("endYear")
        )],
        image: Some(ImageView { src, alt: name }),
        ..RowView::default()
    }
}

pub fn config() -> WidgetConfig {
    WidgetConfig {
        kind: WidgetKind::Dogs,
        title: "Friends on Four Paws",
        icon: "🐾",
        description: None,
        initially_expanded: false,
        list_heading: None,
        form_heading: None,
        submit_label: "Upload",
        empty_message: None,
        remove_label: "Remove photo",
        layout: ListLayout::Gallery,
        schema: schema(),
        ordering: OrderingPolicy::Append,
        formatter: format,
        upload: Some(UploadSlot {
            field: PHOTO,
            policy: JPEG_ONLY,
            prompt: "Click to upload a photo",
            hint: "JPG files only",
            commit_on_select: true,
        }),
    }
}
