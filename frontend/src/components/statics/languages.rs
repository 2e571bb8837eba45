use common::profile::content::{Language, LanguageColumns};
use yew::prelude::*;

use crate::layout::ColumnGrid;

#[derive(Properties, PartialEq)]
pub struct LanguageProps {
    pub columns: LanguageColumns,
}

pub struct LanguageExperience;

impl Component for LanguageExperience {
    type Message = ();
    type Properties = LanguageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LanguageExperience
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let columns = &ctx.props().columns;
        html! {
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Language Experience"}</h2>
                </div>
                <div class="card-content">
                    <ColumnGrid columns={2}>
                        <div>{ for columns.left.iter().map(language_bar) }</div>
                        <div>{ for columns.right.iter().map(language_bar) }</div>
                    </ColumnGrid>
                </div>
            </div>
        }
    }
}

fn language_bar(language: &Language) -> Html {
    html! {
        <div key={language.name.clone()} class="mb-4">
            <div class="flex justify-between mb-1">
                <span class="font-medium">
                    { language.name.clone() }{" "}
                    <span class="text-muted-foreground">{ format!("[{}]", language.level) }</span>
                </span>
            </div>
            <div class="w-full bg-gray-200 rounded-full h-2.5">
                <div
                    class={classes!("h-2.5", "rounded-full", language.color.clone())}
                    style={bar_width(language.percentage)}
                />
            </div>
        </div>
    }
}

pub fn bar_width(percentage: u8) -> String {
    format!("width: {}%", percentage.min(100))
}
