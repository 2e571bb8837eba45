//! Generic editable-collection widget.
//!
//! One component type serves every list widget on the page; the `kind` prop
//! picks the schema, formatter and wording from `common::profile`. Structure
//! follows an Elm-style split: `state` holds the data, `update` applies
//! messages, `view` renders.

use common::editor::RecordEditor;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RecordEditorProps;
pub use state::RecordEditorComponent;

impl Component for RecordEditorComponent {
    type Message = Msg;
    type Properties = RecordEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = props.kind.config();
        match props.content.editor(props.kind) {
            Ok(editor) => RecordEditorComponent::new(config, editor, None),
            Err(err) => {
                gloo_console::error!(format!("{}: {err}", config.title));
                let editor = RecordEditor::new(config.schema.clone(), config.ordering);
                RecordEditorComponent::new(config, editor, Some(err.to_string()))
            }
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.editor.release_all(&mut self.blob_urls);
    }
}
