use common::model::source::{DatabaseField, FileField, SourceKind};
use common::workflow::Action;
use yew::prelude::*;

use crate::components::data_sources::database::DatabasePanel;
use crate::components::data_sources::file::FilePanel;
use crate::components::schema::{ColumnsList, TablesList};
use crate::components::source_selector::SourceSelectorComponent;
use crate::components::status::StatusPanel;

use super::messages::Msg;
use super::state::ExportComponent;

pub fn view(component: &ExportComponent, ctx: &Context<ExportComponent>) -> Html {
    let link = ctx.link();
    let workflow = &component.workflow;
    let source = workflow.source();
    let busy = workflow.is_busy();

    let database_panel = match source.database() {
        Some(config) => html! {
            <DatabasePanel
                config={config.clone()}
                disabled={!workflow.allows(Action::Connect)}
                on_edit={link.callback(|(field, value): (DatabaseField, String)| Msg::EditDatabase(field, value))}
                on_secure={link.callback(Msg::SetSecure)}
                on_connect={link.callback(|_: ()| Msg::Connect)}
            />
        },
        None => html! {},
    };

    let file_panel = match source.file() {
        Some(config) => html! {
            <FilePanel
                config={config.clone()}
                disabled={!workflow.allows(Action::LoadFile)}
                on_edit={link.callback(|(field, value): (FileField, String)| Msg::EditFile(field, value))}
                on_load={link.callback(|_: ()| Msg::LoadFile)}
            />
        },
        None => html! {},
    };

    let tables = workflow.tables();
    let schema_section = if source.is_visible(SourceKind::Database)
        && (workflow.session().is_some() || !tables.is_empty())
    {
        html! {
            <section id="schema-section">
                <TablesList
                    tables={tables.tables().to_vec()}
                    selected={tables.selected().map(str::to_string)}
                    disabled={!workflow.allows(Action::DiscoverColumns)}
                    on_select={link.callback(Msg::SelectTable)}
                />
            </section>
        }
    } else {
        html! {}
    };

    html! {
        <main class="export-workflow">
            <SourceSelectorComponent
                active={source.active()}
                on_select={link.callback(Msg::SelectSource)}
            />
            { database_panel }
            { file_panel }
            { schema_section }
            <ColumnsList
                columns={workflow.columns().items().to_vec()}
                on_toggle={link.callback(|(index, checked): (usize, bool)| Msg::ToggleColumn(index, checked))}
            />
            <button
                id="start-transfer"
                class="icon-btn wide"
                disabled={!workflow.allows(Action::Transfer)}
                onclick={link.callback(|_: MouseEvent| Msg::Transfer)}
            >
                <i class="material-icons">{"cloud_upload"}</i>
                <span class="icon-label">{"Start transfer"}</span>
            </button>
            <StatusPanel
                status={workflow.status().status().to_string()}
                result={workflow.status().result().to_string()}
                busy={busy}
            />
        </main>
    }
}
