use crate::app::App;

mod app;
mod components;
mod layout;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
