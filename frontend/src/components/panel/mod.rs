//! Titled card whose body can be collapsed. The body is only rendered while
//! expanded.

use common::editor::panel::Panel;
use yew::prelude::*;

pub enum Msg {
    Toggle,
}

#[derive(Properties, PartialEq)]
pub struct CollapsibleProps {
    pub title: AttrValue,
    /// Emoji shown on the right of the header.
    pub icon: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub initially_expanded: bool,
    #[prop_or_default]
    pub children: Html,
}

pub struct CollapsibleSection {
    panel: Panel,
}

impl Component for CollapsibleSection {
    type Message = Msg;
    type Properties = CollapsibleProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            panel: Panel::new(ctx.props().initially_expanded),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => {
                self.panel.toggle();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let expanded = self.panel.is_expanded();
        let (toggle_icon, toggle_label) = if expanded {
            ("remove", "Collapse section")
        } else {
            ("add", "Expand section")
        };

        html! {
            <div class="card bg-white bg-opacity-90">
                <div class="card-header pb-3">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center gap-2">
                            <button
                                class="icon-btn ghost"
                                aria-label={toggle_label}
                                aria-expanded={expanded.to_string()}
                                onclick={ctx.link().callback(|_| Msg::Toggle)}
                            >
                                <i class="material-icons">{ toggle_icon }</i>
                            </button>
                            <h2 class="card-title">{ props.title.clone() }</h2>
                        </div>
                        <span class="text-xl" aria-hidden="true">{ props.icon.clone() }</span>
                    </div>
                    {
                        match &props.description {
                            Some(description) => html! {
                                <p class="card-description">{ description.clone() }</p>
                            },
                            None => html! {},
                        }
                    }
                </div>
                {
                    self.panel
                        .content(|| html! { <div class="card-content">{ props.children.clone() }</div> })
                        .unwrap_or_default()
                }
            </div>
        }
    }
}
