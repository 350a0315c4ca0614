use common::model::source::{FileConfig, FileField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilePanelProps {
    pub config: FileConfig,
    pub disabled: bool,
    pub on_edit: Callback<(FileField, String)>,
    pub on_load: Callback<()>,
}

/// File path and delimiter form for a delimited-file source.
///
/// The path is resolved by the backend, not uploaded from the browser.
pub struct FilePanel;

impl Component for FilePanel {
    type Message = ();
    type Properties = FilePanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FilePanel
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_path = props.on_edit.clone();
        let on_delimiter = props.on_edit.clone();
        let on_load = props.on_load.clone();

        html! {
            <div id="file-config" class="source-config">
                <label for="file-path">
                    {"File path"}
                    <input
                        id="file-path"
                        type="text"
                        value={props.config.file_path.clone()}
                        oninput={move |e: InputEvent| {
                            on_path.emit((FileField::Path, e.target_unchecked_into::<HtmlInputElement>().value()))
                        }}
                    />
                </label>
                <label for="file-delimiter">
                    {"Delimiter"}
                    <input
                        id="file-delimiter"
                        type="text"
                        maxlength="1"
                        value={props.config.delimiter.clone()}
                        oninput={move |e: InputEvent| {
                            on_delimiter.emit((FileField::Delimiter, e.target_unchecked_into::<HtmlInputElement>().value()))
                        }}
                    />
                </label>
                <button
                    id="file-load"
                    class="icon-btn wide"
                    title="Load file schema"
                    disabled={props.disabled}
                    onclick={move |_: MouseEvent| on_load.emit(())}
                >
                    <i class="material-icons">{"table_chart"}</i>
                    <span class="icon-label">{"Load"}</span>
                </button>
            </div>
        }
    }
}
