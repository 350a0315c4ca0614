use yew::{classes, html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct StatusPanelProps {
    pub status: String,
    pub result: String,
    #[prop_or_default]
    pub busy: bool,
}

/// Last status line and last transfer result. No history is kept.
pub struct StatusPanel;

impl Component for StatusPanel {
    type Message = ();
    type Properties = StatusPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StatusPanel
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let error = props.status.starts_with("Error:");
        html! {
            <section class={classes!("status", props.busy.then_some("busy"), error.then_some("error"))}>
                <p id="status-message">{ props.status.clone() }</p>
                <p id="result-message">{ props.result.clone() }</p>
            </section>
        }
    }
}
