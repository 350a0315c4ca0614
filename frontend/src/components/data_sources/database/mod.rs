use common::model::source::{DatabaseConfig, DatabaseField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DatabasePanelProps {
    pub config: DatabaseConfig,
    /// Disables the connect button; the form stays editable.
    pub disabled: bool,
    pub on_edit: Callback<(DatabaseField, String)>,
    pub on_secure: Callback<bool>,
    pub on_connect: Callback<()>,
}

/// Connection form for a database source.
pub struct DatabasePanel;

impl Component for DatabasePanel {
    type Message = ();
    type Properties = DatabasePanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DatabasePanel
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let config = &props.config;
        let on_secure = props.on_secure.clone();
        let on_connect = props.on_connect.clone();

        html! {
            <div id="clickhouse-config" class="source-config">
                { text_input(props, "ch-host", "Host", "text", DatabaseField::Host, &config.host) }
                { text_input(props, "ch-port", "Port", "text", DatabaseField::Port, &config.port) }
                { text_input(props, "ch-database", "Database", "text", DatabaseField::Database, &config.database) }
                { text_input(props, "ch-user", "User", "text", DatabaseField::User, &config.user) }
                { text_input(props, "ch-token", "JWT token", "password", DatabaseField::Token, &config.token) }
                <label for="ch-secure">
                    <input
                        id="ch-secure"
                        type="checkbox"
                        checked={config.secure}
                        onchange={move |e: Event| {
                            on_secure.emit(e.target_unchecked_into::<HtmlInputElement>().checked())
                        }}
                    />
                    {"Use TLS"}
                </label>
                <button
                    id="ch-connect"
                    class="icon-btn wide"
                    disabled={props.disabled}
                    onclick={move |_: MouseEvent| on_connect.emit(())}
                >
                    <i class="material-icons">{"storage"}</i>
                    <span class="icon-label">{"Connect"}</span>
                </button>
            </div>
        }
    }
}

fn text_input(
    props: &DatabasePanelProps,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    field: DatabaseField,
    value: &str,
) -> Html {
    let on_edit = props.on_edit.clone();
    html! {
        <label for={id}>
            { label }
            <input
                id={id}
                type={input_type}
                value={value.to_string()}
                oninput={move |e: InputEvent| {
                    on_edit.emit((field, e.target_unchecked_into::<HtmlInputElement>().value()))
                }}
            />
        </label>
    }
}
