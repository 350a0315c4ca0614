use common::model::source::SourceKind;
use yew::{html, Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct SourceSelectorProps {
    /// Panel currently shown, if any.
    pub active: Option<SourceKind>,
    pub on_select: Callback<SourceKind>,
}

/// Radio pair switching between the database and file panels.
pub struct SourceSelectorComponent;

impl Component for SourceSelectorComponent {
    type Message = ();
    type Properties = SourceSelectorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SourceSelectorComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <fieldset class="source-selector">
                <legend>{"Source"}</legend>
                { source_option(props, SourceKind::Database, "clickhouse", "Database") }
                { source_option(props, SourceKind::File, "file", "Flat file") }
            </fieldset>
        }
    }
}

fn source_option(props: &SourceSelectorProps, kind: SourceKind, value: &str, label: &str) -> Html {
    let on_select = props.on_select.clone();
    html! {
        <label>
            <input
                type="radio"
                name="source"
                value={value.to_string()}
                checked={props.active == Some(kind)}
                onchange={move |_| on_select.emit(kind)}
            />
            { label }
        </label>
    }
}
