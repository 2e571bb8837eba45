//! View rendering for the record editor.
//!
//! Layout inside the collapsible card: optional list heading, one row per
//! record (via the widget's formatter), then the add form. Widgets with an
//! upload slot get a drop zone instead of a submit button when they commit on
//! file selection.

use common::editor::rows::{Row, RowView, Segment};
use common::model::schema::{FieldKind, FieldSpec};
use common::profile::guestbook::counter_tone;
use common::profile::{ListLayout, UploadSlot};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::viewer::viewer_dialog;
use super::helpers::{counter_class, list_class};
use super::messages::Msg;
use super::state::RecordEditorComponent;
use crate::components::panel::CollapsibleSection;

pub fn view(component: &RecordEditorComponent, ctx: &Context<RecordEditorComponent>) -> Html {
    let link = ctx.link();
    let config = &component.config;

    html! {
        <CollapsibleSection
            title={config.title}
            icon={config.icon}
            description={config.description.map(AttrValue::from)}
            initially_expanded={config.initially_expanded}
        >
            <div class="space-y-6">
                { build_list(component, link) }
                { build_form(component, link) }
            </div>
            {
                if config.layout == ListLayout::Gallery {
                    viewer_dialog(component, link)
                } else {
                    html! {}
                }
            }
        </CollapsibleSection>
    }
}

fn build_list(component: &RecordEditorComponent, link: &Scope<RecordEditorComponent>) -> Html {
    let config = &component.config;
    let rows = component.editor.rows(config.formatter);

    if rows.is_empty() {
        return match config.empty_message {
            Some(message) => html! { <p class="text-sm text-muted-foreground">{ message }</p> },
            None => html! {},
        };
    }

    html! {
        <div class="space-y-4">
            {
                match config.list_heading {
                    Some(heading) => html! { <h3 class="font-medium">{ heading }</h3> },
                    None => html! {},
                }
            }
            <div class={list_class(config.layout)}>
                { for rows.into_iter().map(|row| build_row(component, row, link)) }
            </div>
        </div>
    }
}

fn build_row(
    component: &RecordEditorComponent,
    row: Row,
    link: &Scope<RecordEditorComponent>,
) -> Html {
    let id = row.id;
    let remove_label = component.config.remove_label;
    let view = row.view;

    html! {
        <div key={id.to_string()} class="record-row p-4 border rounded-lg relative group">
            <button
                class="icon-btn remove-btn"
                title={remove_label}
                onclick={link.callback(move |_| Msg::Remove(id))}
            >
                <i class="material-icons">{"delete"}</i>
                <span class="sr-only">{ remove_label }</span>
            </button>
            {
                match &view.image {
                    Some(image) => html! {
                        <div class="aspect-square relative overflow-hidden rounded-lg border">
                            <img
                                class="object-cover cursor-pointer"
                                src={image.src.clone()}
                                alt={image.alt.clone()}
                                onclick={link.callback(move |_| Msg::OpenViewer(id))}
                            />
                        </div>
                    },
                    None => html! {},
                }
            }
            { build_heading(&view) }
            { build_lines(&view) }
            {
                if view.bullets.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="mt-2 space-y-1 list-disc list-inside text-sm text-muted-foreground">
                            { for view.bullets.iter().map(|b| html! { <li>{ b.clone() }</li> }) }
                        </ul>
                    }
                }
            }
            {
                match &view.footnote {
                    Some(note) => html! {
                        <p class="text-xs text-muted-foreground mt-2 font-mono">{ note.clone() }</p>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

fn build_heading(view: &RowView) -> Html {
    if view.heading.is_empty() {
        return html! {};
    }
    html! {
        <h3 class="font-medium">
            { for view.heading.iter().map(segment) }
        </h3>
    }
}

fn segment(segment: &Segment) -> Html {
    match segment {
        Segment::Text(text) => html! { { text.clone() } },
        Segment::Link { href, text } => html! {
            <a
                href={href.clone()}
                target="_blank"
                rel="noopener noreferrer"
                class="text-blue-700 hover:underline"
            >
                { text.clone() }
            </a>
        },
    }
}

fn build_lines(view: &RowView) -> Html {
    // Image rows use their single line as a centred caption.
    let class = if view.image.is_some() {
        "mt-2 text-center font-medium"
    } else if view.heading.is_empty() {
        "text-sm"
    } else {
        "text-sm text-muted-foreground mt-1"
    };
    html! {
        { for view.lines.iter().map(|line| html! { <p class={class}>{ line.clone() }</p> }) }
    }
}

fn build_form(component: &RecordEditorComponent, link: &Scope<RecordEditorComponent>) -> Html {
    let config = &component.config;
    let schema = component.editor.schema();

    html! {
        <div class="space-y-4 border-t pt-4">
            {
                match config.form_heading {
                    Some(heading) => html! { <h3 class="font-medium">{ heading }</h3> },
                    None => html! {},
                }
            }
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                { for schema.inputs().filter(|f| f.kind != FieldKind::List).map(|f| build_input(component, f, link)) }
            </div>
            { for schema.inputs().filter(|f| f.kind == FieldKind::List).map(|f| build_list_input(component, f, link)) }
            {
                match &component.error {
                    Some(error) => html! {
                        <div class="alert alert-destructive py-2" role="alert">{ error.clone() }</div>
                    },
                    None => html! {},
                }
            }
            {
                match config.upload {
                    Some(slot) if slot.commit_on_select => build_upload(component, &slot, link),
                    _ => html! {
                        <button class="btn w-full sm:w-auto mt-2" onclick={link.callback(|_| Msg::Submit)}>
                            <i class="material-icons">{"add_circle_outline"}</i>
                            { config.submit_label }
                        </button>
                    },
                }
            }
        </div>
    }
}

fn build_input(
    component: &RecordEditorComponent,
    spec: &FieldSpec,
    link: &Scope<RecordEditorComponent>,
) -> Html {
    let name = spec.name;
    let value = component.editor.draft().value(name).to_string();

    match spec.kind {
        FieldKind::MultiLine => {
            let counter = spec.max_chars.map(|limit| {
                let chars = value.chars().count();
                html! {
                    <span class={counter_class(counter_tone(chars, limit))}>
                        { format!("{chars}/{limit}") }
                    </span>
                }
            });
            html! {
                <div class="space-y-2 sm:col-span-2">
                    <div class="flex justify-between items-center">
                        <label for={name} class="text-sm font-medium">{ spec.label }</label>
                        { counter.unwrap_or_default() }
                    </div>
                    <textarea
                        id={name}
                        class="textarea resize-none"
                        rows="3"
                        placeholder={spec.placeholder}
                        value={value}
                        oninput={link.callback(move |e: InputEvent| {
                            Msg::UpdateField(name, e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })}
                    />
                </div>
            }
        }
        _ => {
            let input_type = match spec.kind {
                FieldKind::Url => "url",
                _ if name.contains("email") => "email",
                _ => "text",
            };
            html! {
                <div class="space-y-2">
                    <label for={name} class="text-sm font-medium">{ spec.label }</label>
                    <input
                        id={name}
                        name={name}
                        type={input_type}
                        class="input"
                        placeholder={spec.placeholder}
                        value={value}
                        oninput={link.callback(move |e: InputEvent| {
                            Msg::UpdateField(name, e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
            }
        }
    }
}

/// Items collected so far plus an input to add one more.
fn build_list_input(
    component: &RecordEditorComponent,
    spec: &FieldSpec,
    link: &Scope<RecordEditorComponent>,
) -> Html {
    let name = spec.name;
    let items = component.editor.draft().items(name);

    html! {
        <div class="space-y-3">
            <label class="text-sm font-medium">{ spec.label }</label>
            if !items.is_empty() {
                <ul class="space-y-2">
                    { for items.iter().enumerate().map(|(index, item)| html! {
                        <li class="flex items-center gap-2">
                            <div class="flex-1 p-2 bg-muted rounded-md text-sm">{ item.clone() }</div>
                            <button
                                class="icon-btn ghost"
                                onclick={link.callback(move |_| Msg::RemoveItem(name, index))}
                            >
                                <i class="material-icons">{"delete"}</i>
                            </button>
                        </li>
                    }) }
                </ul>
            }
            <div class="flex gap-2">
                <input
                    class="input flex-1"
                    placeholder={spec.placeholder}
                    value={component.pending_item(name).to_string()}
                    oninput={link.callback(move |e: InputEvent| {
                        Msg::UpdatePendingItem(name, e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <button class="btn" type="button" onclick={link.callback(move |_| Msg::AddItem(name))}>
                    {"Add"}
                </button>
            </div>
        </div>
    }
}

fn build_upload(
    component: &RecordEditorComponent,
    slot: &UploadSlot,
    link: &Scope<RecordEditorComponent>,
) -> Html {
    let onchange = link.batch_callback(|e: Event| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        let file = input.files().and_then(|files| files.get(0));
        input.set_value("");
        file.map(Msg::FileSelected)
    });

    html! {
        <div
            class="upload-zone border-2 border-dashed rounded-lg p-6 text-center cursor-pointer"
            onclick={link.callback(|_| Msg::OpenFileDialog)}
        >
            <div class="flex flex-col items-center gap-2">
                <i class="material-icons text-muted-foreground">{"upload"}</i>
                <p class="font-medium">{ slot.prompt }</p>
                <p class="text-xs text-muted-foreground">{ slot.hint }</p>
            </div>
            <input
                ref={component.file_input_ref.clone()}
                type="file"
                accept={slot.policy.accept_attr}
                class="hidden"
                {onchange}
            />
        </div>
    }
}
