//! Update function for the export component.
//!
//! Each message is forwarded to the workflow core. When the core hands back a
//! command, it is run in its own task and its response comes back as
//! `Msg::Completed`, which may in turn yield the next chained command.

use common::workflow::{execute, Command};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ExportComponent;

/// Returns `true` when the view must re-render.
pub fn update(component: &mut ExportComponent, ctx: &Context<ExportComponent>, msg: Msg) -> bool {
    let workflow = &mut component.workflow;
    let command = match msg {
        Msg::SelectSource(kind) => return workflow.select_source(kind),
        Msg::EditDatabase(field, value) => {
            return match workflow.source_mut().database_mut() {
                Some(db) => {
                    db.set(field, value);
                    true
                }
                None => false,
            };
        }
        Msg::SetSecure(secure) => {
            return match workflow.source_mut().database_mut() {
                Some(db) => {
                    db.secure = secure;
                    true
                }
                None => false,
            };
        }
        Msg::EditFile(field, value) => {
            return match workflow.source_mut().file_mut() {
                Some(file) => {
                    file.set(field, value);
                    true
                }
                None => false,
            };
        }
        Msg::ToggleColumn(index, checked) => return workflow.set_column_checked(index, checked),
        Msg::Connect => workflow.connect(),
        Msg::LoadFile => workflow.load_file(),
        Msg::SelectTable(table) => workflow.select_table(&table),
        Msg::Transfer => workflow.transfer(),
        Msg::Completed(response) => workflow.apply(response),
    };

    if let Some(command) = command {
        dispatch(component, ctx, command);
    }
    true
}

fn dispatch(component: &ExportComponent, ctx: &Context<ExportComponent>, command: Command) {
    let api = component.api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let response = execute(&api, command).await;
        link.send_message(Msg::Completed(response));
    });
}
