use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ColumnGridProps {
    pub columns: usize,
    #[prop_or_default]
    pub gap_rem: Option<f32>,
    pub children: Children,
}

/// Equal-width CSS grid; each child is one column cell.
pub struct ColumnGrid;

impl Component for ColumnGrid {
    type Message = ();
    type Properties = ColumnGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ColumnGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div style={grid_style(props.columns, props.gap_rem.unwrap_or(1.5))}>
                { for props.children.iter() }
            </div>
        }
    }
}

pub fn grid_style(columns: usize, gap_rem: f32) -> String {
    format!(
        "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); gap: {}rem;",
        columns.max(1),
        gap_rem
    )
}
