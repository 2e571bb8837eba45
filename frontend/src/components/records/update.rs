//! Update function for the record editor.
//!
//! Receives the component state and a `Msg`, mutates the state and returns
//! whether the view should re-render. File reading is the only asynchronous
//! step: the bytes come back as `Msg::FileRead` and are validated there.

use common::editor::upload::{SelectedFile, UploadPolicy};
use common::error::EditorError;
use gloo_file::futures::read_as_bytes;
use yew::prelude::*;

use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::RecordEditorComponent;

pub fn update(
    component: &mut RecordEditorComponent,
    ctx: &Context<RecordEditorComponent>,
    msg: Msg,
) -> bool {
    let title = component.config.title;
    match msg {
        Msg::UpdateField(name, value) => {
            let checked = component
                .editor
                .schema()
                .require(name)
                .and_then(|spec| spec.check_length(&value));
            // Over-budget keystrokes are rejected; the input snaps back on
            // re-render and the error stays visible.
            match checked.and_then(|_| component.editor.update(name, value)) {
                Ok(()) => component.error = None,
                Err(err) => set_error(component, &err),
            }
            true
        }
        Msg::UpdatePendingItem(name, value) => {
            component.pending_items.insert(name, value);
            true
        }
        Msg::AddItem(name) => {
            let item = component.pending_items.remove(name).unwrap_or_default();
            if let Err(err) = component.editor.draft_mut().push_item(name, item) {
                set_error(component, &err);
            }
            true
        }
        Msg::RemoveItem(name, index) => {
            if let Err(err) = component.editor.draft_mut().remove_item(name, index) {
                set_error(component, &err);
            }
            true
        }
        Msg::Submit => {
            submit(component);
            true
        }
        Msg::Remove(id) => {
            if component.editor.remove(id, &mut component.blob_urls) {
                gloo_console::log!(format!("{title}: removed {id}"));
            } else {
                gloo_console::warn!(format!("{title}: {id} already gone"));
            }
            if component.viewing == Some(id) {
                component.viewing = None;
                close_top_sheet(component.viewer_ref.clone());
            }
            true
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileSelected(file) => {
            let Some(slot) = component.config.upload else {
                return false;
            };
            if component.reading_file {
                return false;
            }
            // Check the declared type before reading anything.
            let probe = SelectedFile {
                name: file.name(),
                mime: file.type_(),
                bytes: Vec::new(),
            };
            if !slot.policy.allows(&probe) {
                reject_upload(component, &slot.policy, probe.mime);
                return true;
            }

            component.reading_file = true;
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let file = gloo_file::File::from(file);
                match read_as_bytes(&file).await {
                    Ok(bytes) => link.send_message(Msg::FileRead(SelectedFile {
                        bytes,
                        ..probe
                    })),
                    Err(err) => link.send_message(Msg::FileReadFailed(err.to_string())),
                }
            });
            true
        }
        Msg::FileRead(file) => {
            component.reading_file = false;
            let Some(slot) = component.config.upload else {
                return false;
            };
            let attachment = match slot.policy.accept(&file, &mut component.blob_urls) {
                Ok(attachment) => attachment,
                Err(EditorError::UnsupportedFileType { declared }) => {
                    reject_upload(component, &slot.policy, declared);
                    return true;
                }
                Err(err) => {
                    set_error(component, &err);
                    return true;
                }
            };
            gloo_console::log!(format!("{title}: accepted {}", file.name));

            if let Err(err) = component
                .editor
                .attach(slot.field, attachment, &mut component.blob_urls)
            {
                set_error(component, &err);
                return true;
            }
            if slot.commit_on_select && !submit(component) {
                component
                    .editor
                    .discard_attachment(slot.field, &mut component.blob_urls);
            }
            true
        }
        Msg::FileReadFailed(reason) => {
            component.reading_file = false;
            gloo_console::error!(format!("{title}: could not read file: {reason}"));
            component.error = Some("Could not read the selected file".to_string());
            true
        }
        Msg::OpenViewer(id) => {
            component.viewing = Some(id);
            open_top_sheet(component.viewer_ref.clone());
            true
        }
        Msg::CloseViewer => {
            component.viewing = None;
            close_top_sheet(component.viewer_ref.clone());
            true
        }
    }
}

/// Commits the draft; returns whether a record was added.
fn submit(component: &mut RecordEditorComponent) -> bool {
    match component.editor.submit() {
        Ok(id) => {
            gloo_console::log!(format!("{}: added {id}", component.config.title));
            component.error = None;
            true
        }
        Err(err) => {
            set_error(component, &err);
            false
        }
    }
}

fn set_error(component: &mut RecordEditorComponent, err: &EditorError) {
    gloo_console::warn!(format!("{}: {err}", component.config.title));
    component.error = Some(component.editor.schema().describe(err));
}

fn reject_upload(component: &mut RecordEditorComponent, policy: &UploadPolicy, declared: String) {
    gloo_console::warn!(format!(
        "{}: rejected upload of type {declared:?}",
        component.config.title
    ));
    let message = policy.rejection();
    show_toast(&message);
    component.error = Some(message);
}
