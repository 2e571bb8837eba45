//! Browser-facing utilities for the record editor.
//!
//! - **Object URLs**: `BlobUrls` implements the engine's `TransientStore` with
//!   `gloo_file::ObjectUrl`, so an uploaded photo can be shown with a plain
//!   `<img src>` and its URL revoked when the record goes away.
//! - **User feedback**: a transient toast for rejections that happen outside
//!   the form (e.g. an unsupported file).
//! - **CSS helpers**: small pure functions choosing classes from engine state.

use std::collections::HashMap;

use common::editor::upload::TransientStore;
use common::error::EditorError;
use common::profile::guestbook::CounterTone;
use common::profile::ListLayout;
use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Live object URLs keyed by their string form. Dropping an `ObjectUrl`
/// revokes it.
#[derive(Default)]
pub struct BlobUrls {
    live: HashMap<String, ObjectUrl>,
}

impl TransientStore for BlobUrls {
    fn create(&mut self, bytes: &[u8], mime: &str) -> Result<String, EditorError> {
        let url = ObjectUrl::from(Blob::new_with_options(bytes, Some(mime)));
        let key = String::from(&*url);
        if key.is_empty() {
            return Err(EditorError::Resource("browser returned an empty object URL".into()));
        }
        gloo_console::log!(format!("object url created: {key}"));
        self.live.insert(key.clone(), url);
        Ok(key)
    }

    fn revoke(&mut self, reference: &str) {
        match self.live.remove(reference) {
            Some(_) => gloo_console::log!(format!("object url revoked: {reference}")),
            None => gloo_console::warn!(format!("object url not live: {reference}")),
        }
    }
}

/// Displays a temporary notification at the bottom of the screen. It
/// removes itself after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    toast.set_class_name("toast");

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

pub fn counter_class(tone: CounterTone) -> &'static str {
    match tone {
        CounterTone::Normal => "text-xs text-muted-foreground",
        CounterTone::Warning => "text-xs text-amber-500",
        CounterTone::Over => "text-xs text-red-500",
    }
}

pub fn list_class(layout: ListLayout) -> &'static str {
    match layout {
        ListLayout::Stack => "space-y-4",
        ListLayout::Grid => "grid grid-cols-1 md:grid-cols-2 gap-4",
        ListLayout::Gallery => "grid grid-cols-1 sm:grid-cols-2 gap-6",
    }
}
