use yew::html::Scope;
use yew::prelude::*;

use crate::components::records::{Msg, RecordEditorComponent};
use crate::tops_sheet::top_sheet::TopSheet;

/// Full-screen view of the selected record's image with a remove button.
pub fn viewer_dialog(
    component: &RecordEditorComponent,
    link: &Scope<RecordEditorComponent>,
) -> Html {
    let formatter = component.config.formatter;
    let selected = component
        .viewing
        .and_then(|id| component.editor.collection().get(id))
        .map(|record| (record.id(), formatter(record)));

    let body = match selected {
        Some((id, view)) => match view.image {
            Some(image) => html! {
                <>
                    <img class="viewer-image" src={image.src} alt={image.alt} />
                    <p class="viewer-caption">{ view.lines.join(" ") }</p>
                    <button
                        class="btn btn-destructive"
                        onclick={link.callback(move |_| Msg::Remove(id))}
                    >
                        { component.config.remove_label }
                    </button>
                </>
            },
            None => html! { <span class="viewer-empty">{"No image for this entry"}</span> },
        },
        None => html! { <span class="viewer-empty">{"Nothing selected"}</span> },
    };

    html! {
        <TopSheet node_ref={component.viewer_ref.clone()}>
            <div class="viewer-backdrop">
                <button
                    class="viewer-close"
                    aria-label="Close"
                    onclick={link.callback(|_| Msg::CloseViewer)}
                >
                    { "✕" }
                </button>
                { body }
            </div>
        </TopSheet>
    }
}
