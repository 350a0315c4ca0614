use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

#[derive(Properties, PartialEq)]
pub struct TablesListProps {
    /// Backend order, not re-sorted.
    pub tables: Vec<String>,
    /// Table whose columns are shown. Clicking any radio, this one included,
    /// requests columns again.
    pub selected: Option<String>,
    pub disabled: bool,
    pub on_select: Callback<String>,
}

pub struct TablesList;

impl Component for TablesList {
    type Message = ();
    type Properties = TablesListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TablesList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div id="tables-list">
                <h3>{"Tables"}</h3>
                { for props.tables.iter().map(|table| {
                    let on_select = props.on_select.clone();
                    let name = table.clone();
                    html! {
                        <div key={table.clone()}>
                            <label>
                                <input
                                    type="radio"
                                    name="table"
                                    value={table.clone()}
                                    disabled={props.disabled}
                                    checked={props.selected.as_deref() == Some(table.as_str())}
                                    onclick={move |_: MouseEvent| on_select.emit(name.clone())}
                                />
                                { table.clone() }
                            </label>
                        </div>
                    }
                }) }
            </div>
        }
    }
}
