use common::profile::content::Learned;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LearnedProps {
    pub learned: Learned,
}

pub struct LearnedRecently;

impl Component for LearnedRecently {
    type Message = ();
    type Properties = LearnedProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LearnedRecently
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let learned = &ctx.props().learned;
        html! {
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{ learned.question.clone() }</h2>
                </div>
                <div class="card-content">
                    <div class="bg-muted/30 p-6 rounded-lg">
                        <p class="mb-2">
                            { learned.intro.clone() }{" "}
                            <span class="font-bold italic text-xl">{ learned.word.clone() }</span>
                        </p>
                        <p class="mb-2">{ learned.meaning.clone() }</p>
                        { for learned.notes.iter().map(|note| html! {
                            <p class="text-sm text-muted-foreground">{ note.clone() }</p>
                        }) }
                    </div>
                </div>
            </div>
        }
    }
}
