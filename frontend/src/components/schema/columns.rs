use common::model::schema::ColumnItem;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ColumnsListProps {
    pub columns: Vec<ColumnItem>,
    /// Emits `(index, checked)` for the toggled column.
    pub on_toggle: Callback<(usize, bool)>,
}

/// Column checklist. Items come in checked; the selection is read from the
/// workflow only when a transfer starts.
pub struct ColumnsList;

impl Component for ColumnsList {
    type Message = ();
    type Properties = ColumnsListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ColumnsList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.columns.is_empty() {
            return html! { <div id="columns-list"></div> };
        }
        html! {
            <div id="columns-list">
                <h3>{"Columns"}</h3>
                { for props.columns.iter().enumerate().map(|(index, column)| {
                    let on_toggle = props.on_toggle.clone();
                    html! {
                        <div key={index}>
                            <label>
                                <input
                                    type="checkbox"
                                    value={column.name.clone()}
                                    checked={column.checked}
                                    onchange={move |e: Event| {
                                        let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
                                        on_toggle.emit((index, checked))
                                    }}
                                />
                                { column.name.clone() }
                            </label>
                        </div>
                    }
                }) }
            </div>
        }
    }
}
