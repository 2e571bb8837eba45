//! Full-screen overlay that slides in when its `show` class is added.

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

const SHOW_CLASS: &str = "show";
/// Lets a freshly mounted sheet paint once before the transition starts.
const TRANSITION_DELAY_MS: u32 = 50;

pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div
                class="top-sheet"
                id={self.id.clone()}
                role="dialog"
                aria-modal="true"
                ref={ctx.props().node_ref.clone()}
            >
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    set_shown_later(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    set_shown_later(top_sheet_ref, false);
}

fn set_shown_later(top_sheet_ref: NodeRef, shown: bool) {
    Timeout::new(TRANSITION_DELAY_MS, move || {
        let Some(sheet) = top_sheet_ref.cast::<web_sys::Element>() else {
            return;
        };
        let classes = sheet.class_list();
        let result = if shown {
            classes.add_1(SHOW_CLASS)
        } else {
            classes.remove_1(SHOW_CLASS)
        };
        if result.is_err() {
            gloo_console::warn!(format!("top sheet {}: class update failed", sheet.id()));
        }
    })
    .forget();
}
