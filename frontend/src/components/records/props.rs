//! Properties of the generic record editor.

use std::rc::Rc;

use common::profile::content::ProfileContent;
use common::profile::WidgetKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RecordEditorProps {
    /// Which widget this instance is. Selects the schema, formatter,
    /// ordering and presentation text.
    pub kind: WidgetKind,

    /// Parsed page content; the instance takes its starting records from it
    /// once, in `create`. Later changes to this prop are ignored.
    pub content: Rc<ProfileContent>,
}
