//! The concrete widgets of the profile page, each one a schema, a formatter
//! and a little presentation metadata on top of the generic editor.

pub mod comment;
pub mod content;
pub mod dogs;
pub mod education;
pub mod experience;
pub mod guestbook;
pub mod references;

use crate::editor::collection::OrderingPolicy;
use crate::editor::rows::Formatter;
use crate::editor::upload::UploadPolicy;
use crate::model::schema::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Experience,
    References,
    Education,
    Dogs,
    Guestbook,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 5] = [
        WidgetKind::Experience,
        WidgetKind::References,
        WidgetKind::Education,
        WidgetKind::Dogs,
        WidgetKind::Guestbook,
    ];

    /// Key of the widget's records in the content file.
    pub fn key(self) -> &'static str {
        match self {
            WidgetKind::Experience => "experience",
            WidgetKind::References => "references",
            WidgetKind::Education => "education",
            WidgetKind::Dogs => "dogs",
            WidgetKind::Guestbook => "guestbook",
        }
    }

    pub fn config(self) -> WidgetConfig {
        match self {
            WidgetKind::Experience => experience::config(),
            WidgetKind::References => references::config(),
            WidgetKind::Education => education::config(),
            WidgetKind::Dogs => dogs::config(),
            WidgetKind::Guestbook => guestbook::config(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLayout {
    Stack,
    /// Two columns on wide screens.
    Grid,
    /// Square image tiles with a caption.
    Gallery,
}

/// File field fed by a file input instead of the typed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadSlot {
    pub field: &'static str,
    pub policy: UploadPolicy,
    pub prompt: &'static str,
    pub hint: &'static str,
    /// Commit the draft as soon as a valid file has been attached.
    pub commit_on_select: bool,
}

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub kind: WidgetKind,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: Option<&'static str>,
    pub initially_expanded: bool,
    pub list_heading: Option<&'static str>,
    pub form_heading: Option<&'static str>,
    pub submit_label: &'static str,
    pub empty_message: Option<&'static str>,
    pub remove_label: &'static str,
    pub layout: ListLayout,
    pub schema: Schema,
    pub ordering: OrderingPolicy,
    pub formatter: Formatter,
    pub upload: Option<UploadSlot>,
}
