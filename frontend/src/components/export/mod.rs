//! Export workflow screen: root module wiring the Yew `Component`
//! implementation with its message, state, update and view submodules.
//!
//! The screen hosts the source switch, the two configuration panels, the
//! table and column lists, the transfer button and the status area. All
//! sequencing lives in `common::workflow`; this component only renders it
//! and runs the commands it emits.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ExportComponent;

impl Component for ExportComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ExportComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
