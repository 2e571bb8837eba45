//! Page shell: header, then every widget in fixed order.

use std::rc::Rc;

use common::profile::content::{PageHeader, ProfileContent};
use common::profile::WidgetKind;
use yew::{html, Component, Context, Html};

use crate::components::comment::CommentSection;
use crate::components::records::RecordEditorComponent;
use crate::components::statics::languages::LanguageExperience;
use crate::components::statics::learned::LearnedRecently;

pub struct App {
    content: Result<Rc<ProfileContent>, String>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let content = ProfileContent::embedded().map(Rc::new).map_err(|err| {
            gloo_console::error!(format!("failed to load profile content: {err}"));
            err.to_string()
        });
        Self { content }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let content = match &self.content {
            Ok(content) => content,
            Err(err) => {
                return html! {
                    <div class="container mx-auto py-8 px-4">
                        <div class="alert alert-destructive">{ err.clone() }</div>
                    </div>
                }
            }
        };

        let editor = |kind: WidgetKind| {
            html! { <RecordEditorComponent {kind} content={content.clone()} /> }
        };

        html! {
            <div class="container mx-auto py-8 px-4">
                { header(&content.header) }
                <div class="space-y-8">
                    <LanguageExperience columns={content.languages.clone()} />
                    { editor(WidgetKind::Experience) }
                    { editor(WidgetKind::References) }
                    <LearnedRecently learned={content.learned.clone()} />
                    { editor(WidgetKind::Education) }
                    { editor(WidgetKind::Dogs) }
                    { editor(WidgetKind::Guestbook) }
                    <CommentSection />
                </div>
            </div>
        }
    }
}

fn header(header: &PageHeader) -> Html {
    html! {
        <header class="mb-8 text-center">
            <h1 class="text-3xl font-bold mb-2">{ header.title.clone() }</h1>
            <p class="text-muted-foreground">
                <span>{ header.quote_intro.clone() }</span>
                <span class="italic">{ header.quote.clone() }</span>
                <span>{ header.quote_outro.clone() }</span>
                <span>{" | "}</span>
                <a
                    href={header.link.href.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-blue-700 hover:underline"
                >
                    { header.link.text.clone() }
                </a>
            </p>
        </header>
    }
}
