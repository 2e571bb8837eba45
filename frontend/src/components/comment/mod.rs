use common::profile::comment::CommentBox;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::panel::CollapsibleSection;

pub enum Msg {
    Update(String),
    Submit,
    Reset,
}

/// Free-form comment that is acknowledged but not kept in any list.
pub struct CommentSection {
    comment: CommentBox,
}

impl Component for CommentSection {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            comment: CommentBox::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Update(text) => {
                self.comment.update(text);
                true
            }
            Msg::Submit => {
                if !self.comment.submit() {
                    gloo_console::warn!("comment box: nothing to submit");
                }
                true
            }
            Msg::Reset => {
                self.comment.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let body = if self.comment.is_submitted() {
            html! {
                <div class="bg-green-50 p-4 rounded-md">
                    <p class="text-green-800 font-medium">{"Thank you for your comment!"}</p>
                    <p class="mt-2 italic">{ self.comment.text().to_string() }</p>
                    <button class="btn btn-outline mt-4" onclick={link.callback(|_| Msg::Reset)}>
                        {"Leave another comment"}
                    </button>
                </div>
            }
        } else {
            html! {
                <>
                    <textarea
                        class="textarea min-h-[150px] resize-none"
                        placeholder="Share your thoughts..."
                        value={self.comment.text().to_string()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::Update(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })}
                    />
                    <div class="flex justify-end">
                        <button class="btn" onclick={link.callback(|_| Msg::Submit)}>
                            {"Submit Comment"}
                        </button>
                    </div>
                </>
            }
        };

        html! {
            <CollapsibleSection title="This is where I leave my comment" icon="💬">
                <div class="space-y-4">{ body }</div>
            </CollapsibleSection>
        }
    }
}
