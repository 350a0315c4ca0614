//! The export workflow: source selection, connect, discovery and transfer.
//!
//! `Workflow` follows an update-style architecture. User actions and network
//! replies mutate the state synchronously and may return the next `Command`
//! to run. Running it is the host's job (see [`command::execute`]), which
//! keeps the state machine free of any runtime and lets tests drive it with
//! a scripted API.
//!
//! Guarantees
//! - At most one command is outstanding: actions are refused while busy.
//! - A successful connect always chains exactly one table discovery.
//! - Table and column lists are replaced wholesale on successful discovery;
//!   a failed discovery leaves them as they were.
//! - Switching source invalidates the session, and any reply still in flight
//!   for it is dropped when it arrives.

pub mod command;
pub mod state;

use log::{debug, info, warn};

use crate::error::{DiscoveryKind, ExportError};
use crate::model::schema::{ColumnSelection, TableList};
use crate::model::source::{SourceKind, SourceSelector};
use crate::requests::TransferRequest;
use crate::status::StatusReporter;

pub use command::{Command, ExportApi, Reply, Request, Response, execute};
pub use state::{Action, Phase, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    source: SourceSelector,
    tables: TableList,
    columns: ColumnSelection,
    status: StatusReporter,
    phase: Phase,
    session: Option<Session>,
    generation: u64,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

impl Workflow {
    pub fn new() -> Self {
        Self {
            source: SourceSelector::new(),
            tables: TableList::default(),
            columns: ColumnSelection::default(),
            status: StatusReporter::default(),
            phase: Phase::Idle,
            session: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> Option<Session> {
        self.session
    }

    pub fn source(&self) -> &SourceSelector {
        &self.source
    }

    /// Form access for the active panel. Editing never touches the network.
    pub fn source_mut(&mut self) -> &mut SourceSelector {
        &mut self.source
    }

    pub fn tables(&self) -> &TableList {
        &self.tables
    }

    pub fn columns(&self) -> &ColumnSelection {
        &self.columns
    }

    pub fn status(&self) -> &StatusReporter {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    /// Whether `action` may be started right now.
    pub fn allows(&self, action: Action) -> bool {
        if !self.phase.admits(action) {
            return false;
        }
        match action.source() {
            Some(kind) if self.source.active() != Some(kind) => false,
            _ => match action {
                Action::DiscoverTables | Action::DiscoverColumns | Action::Transfer => {
                    self.session.is_some()
                }
                Action::Connect | Action::LoadFile => true,
            },
        }
    }

    /// Switches the visible source panel.
    ///
    /// Re-selecting the active kind changes nothing. Selecting the other kind
    /// starts over: blank form, no session, empty lists, cleared status.
    pub fn select_source(&mut self, kind: SourceKind) -> bool {
        if !self.source.select(kind) {
            return false;
        }
        if self.phase.is_busy() {
            debug!("source switched to {:?}; dropping in-flight request", kind);
        }
        self.generation += 1;
        self.session = None;
        self.tables.clear();
        self.columns.clear();
        self.status.clear();
        self.phase = Phase::ConfiguringSource;
        true
    }

    /// Sends the database form to the backend.
    pub fn connect(&mut self) -> Option<Command> {
        if !self.begin(Action::Connect) {
            return None;
        }
        let request = self.source.database()?.to_request();
        self.generation += 1;
        self.session = None;
        self.phase = Phase::Connecting;
        self.status.set_status("Connecting to database...");
        info!("connecting to {}:{}", request.host, request.port);
        Some(self.command(Request::Connect(request)))
    }

    /// Asks the backend for the columns of a file source.
    pub fn load_file(&mut self) -> Option<Command> {
        if !self.begin(Action::LoadFile) {
            return None;
        }
        let request = self.source.file()?.to_request();
        self.generation += 1;
        self.session = None;
        self.phase = Phase::LoadingFile;
        self.status.set_status("Loading file schema...");
        info!("loading file schema from {:?}", request.file_path);
        Some(self.command(Request::DiscoverFile(request)))
    }

    /// Requests the columns of a listed table. The table only becomes the
    /// selected one once its columns arrive.
    pub fn select_table(&mut self, table: &str) -> Option<Command> {
        if !self.begin(Action::DiscoverColumns) {
            return None;
        }
        if !self.tables.contains(table) {
            debug!("ignoring unknown table {:?}", table);
            return None;
        }
        self.phase = Phase::LoadingColumns;
        self.status
            .set_status(format!("Loading columns for {}...", table));
        Some(self.command(Request::DiscoverColumns {
            table: table.to_string(),
        }))
    }

    pub fn set_column_checked(&mut self, index: usize, checked: bool) -> bool {
        self.columns.set_checked(index, checked)
    }

    /// Submits the currently checked columns. An empty selection is sent as is.
    pub fn transfer(&mut self) -> Option<Command> {
        if !self.begin(Action::Transfer) {
            return None;
        }
        let columns = self.columns.selected();
        self.phase = Phase::Transferring;
        self.status.set_status("Starting data transfer...");
        self.status.set_result("");
        info!("transferring {} columns", columns.len());
        Some(self.command(Request::Transfer(TransferRequest { columns })))
    }

    /// Folds a reply into the state. Returns the chained command, if any.
    pub fn apply(&mut self, response: Response) -> Option<Command> {
        if response.generation != self.generation {
            debug!(
                "dropping stale reply (generation {}, current {})",
                response.generation, self.generation
            );
            return None;
        }

        match response.reply {
            Reply::Connected(Ok(())) => {
                self.session = Some(Session::new(self.generation, SourceKind::Database));
                self.status
                    .set_status("Connected successfully! Discovering schema...");
                self.phase = Phase::DiscoveringTables;
                Some(self.command(Request::DiscoverTables))
            }
            Reply::Connected(Err(failure)) => {
                self.fail(Action::Connect, ExportError::Connection(failure));
                None
            }
            Reply::Tables(Ok(tables)) => {
                self.status
                    .set_status(format!("Discovered {} tables", tables.len()));
                self.tables.replace(tables);
                self.columns.clear();
                self.phase = Phase::SchemaReady;
                None
            }
            Reply::Tables(Err(failure)) => {
                self.fail(
                    Action::DiscoverTables,
                    ExportError::Discovery {
                        kind: DiscoveryKind::Tables,
                        failure,
                    },
                );
                None
            }
            Reply::Columns {
                table,
                result: Ok(columns),
            } => {
                self.status.set_status(format!(
                    "Loaded {} columns from {}",
                    columns.len(),
                    table
                ));
                self.tables.select(&table);
                self.columns.replace(columns);
                self.phase = Phase::ColumnsReady;
                None
            }
            Reply::Columns {
                result: Err(failure),
                ..
            } => {
                self.fail(
                    Action::DiscoverColumns,
                    ExportError::Discovery {
                        kind: DiscoveryKind::Columns,
                        failure,
                    },
                );
                None
            }
            Reply::FileColumns(Ok(columns)) => {
                self.session = Some(Session::new(self.generation, SourceKind::File));
                self.status.set_status("File loaded successfully!");
                self.columns.replace(columns);
                self.phase = Phase::ColumnsReady;
                None
            }
            Reply::FileColumns(Err(failure)) => {
                self.fail(
                    Action::LoadFile,
                    ExportError::Discovery {
                        kind: DiscoveryKind::File,
                        failure,
                    },
                );
                None
            }
            Reply::Transferred(Ok(record_count)) => {
                info!("transfer finished with {} records", record_count);
                self.status.set_status("Transfer completed successfully!");
                self.status
                    .set_result(format!("Records processed: {}", record_count));
                self.phase = Phase::Complete;
                None
            }
            Reply::Transferred(Err(failure)) => {
                self.fail(Action::Transfer, ExportError::Transfer(failure));
                None
            }
        }
    }

    fn begin(&self, action: Action) -> bool {
        let allowed = self.allows(action);
        if !allowed {
            debug!("{:?} refused in phase {:?}", action, self.phase);
        }
        allowed
    }

    fn command(&self, request: Request) -> Command {
        Command {
            generation: self.generation,
            request,
        }
    }

    fn fail(&mut self, action: Action, error: ExportError) {
        warn!("{:?} failed: {}", action, error.failure());
        self.status.report_error(&error);
        self.phase = Phase::Errored {
            last_action: action,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiFailure;

    fn connected_workflow() -> Workflow {
        let mut wf = Workflow::new();
        wf.select_source(SourceKind::Database);
        let connect = wf.connect().unwrap();
        let discover = wf
            .apply(Response {
                generation: connect.generation,
                reply: Reply::Connected(Ok(())),
            })
            .unwrap();
        wf.apply(Response {
            generation: discover.generation,
            reply: Reply::Tables(Ok(vec!["users".into(), "orders".into()])),
        });
        wf
    }

    #[test]
    fn nothing_is_allowed_before_a_source_is_chosen() {
        let mut wf = Workflow::new();
        assert_eq!(wf.phase(), Phase::Idle);
        assert!(wf.connect().is_none());
        assert!(wf.load_file().is_none());
        assert!(wf.transfer().is_none());
    }

    #[test]
    fn connect_is_refused_for_a_file_source() {
        let mut wf = Workflow::new();
        wf.select_source(SourceKind::File);
        assert!(wf.connect().is_none());
        assert!(wf.load_file().is_some());
    }

    #[test]
    fn second_click_while_connecting_is_ignored() {
        let mut wf = Workflow::new();
        wf.select_source(SourceKind::Database);
        assert!(wf.connect().is_some());
        assert!(wf.is_busy());
        assert!(wf.connect().is_none());
    }

    #[test]
    fn connect_success_chains_table_discovery_in_same_session() {
        let mut wf = Workflow::new();
        wf.select_source(SourceKind::Database);
        let connect = wf.connect().unwrap();
        let next = wf
            .apply(Response {
                generation: connect.generation,
                reply: Reply::Connected(Ok(())),
            })
            .unwrap();
        assert_eq!(next.request, Request::DiscoverTables);
        assert_eq!(next.generation, wf.session().unwrap().id());
        assert_eq!(wf.phase(), Phase::DiscoveringTables);
    }

    #[test]
    fn reply_after_source_switch_is_dropped() {
        let mut wf = Workflow::new();
        wf.select_source(SourceKind::Database);
        let connect = wf.connect().unwrap();
        wf.select_source(SourceKind::File);

        let next = wf.apply(Response {
            generation: connect.generation,
            reply: Reply::Connected(Ok(())),
        });
        assert!(next.is_none());
        assert!(wf.session().is_none());
        assert_eq!(wf.phase(), Phase::ConfiguringSource);
        assert_eq!(wf.status().status(), "");
    }

    #[test]
    fn failed_column_load_keeps_previous_columns() {
        let mut wf = connected_workflow();
        let load = wf.select_table("users").unwrap();
        wf.apply(Response {
            generation: load.generation,
            reply: Reply::Columns {
                table: "users".into(),
                result: Ok(vec!["id".into(), "email".into()]),
            },
        });

        let load = wf.select_table("orders").unwrap();
        wf.apply(Response {
            generation: load.generation,
            reply: Reply::Columns {
                table: "orders".into(),
                result: Err(ApiFailure::Rejected {
                    status: 500,
                    message: None,
                }),
            },
        });

        assert_eq!(wf.status().status(), "Error: Column loading failed");
        assert_eq!(wf.tables().selected(), Some("users"));
        assert_eq!(wf.columns().selected(), vec!["id", "email"]);
        assert_eq!(
            wf.phase(),
            Phase::Errored {
                last_action: Action::DiscoverColumns
            }
        );
        assert!(!wf.allows(Action::Transfer));
        assert!(wf.allows(Action::DiscoverColumns));
    }

    #[test]
    fn table_is_not_selected_while_its_columns_load() {
        let mut wf = connected_workflow();
        wf.select_table("orders").unwrap();
        assert_eq!(wf.phase(), Phase::LoadingColumns);
        assert_eq!(wf.tables().selected(), None);
    }

    #[test]
    fn same_table_can_be_retried_after_failed_load() {
        let mut wf = connected_workflow();
        let load = wf.select_table("orders").unwrap();
        wf.apply(Response {
            generation: load.generation,
            reply: Reply::Columns {
                table: "orders".into(),
                result: Err(ApiFailure::Transport("timeout".into())),
            },
        });
        assert_eq!(wf.tables().selected(), None);

        let retry = wf.select_table("orders").unwrap();
        assert_eq!(
            retry.request,
            Request::DiscoverColumns {
                table: "orders".into()
            }
        );
        wf.apply(Response {
            generation: retry.generation,
            reply: Reply::Columns {
                table: "orders".into(),
                result: Ok(vec!["id".into(), "total".into()]),
            },
        });
        assert_eq!(wf.tables().selected(), Some("orders"));
        assert_eq!(wf.phase(), Phase::ColumnsReady);
    }

    #[test]
    fn unknown_table_is_not_requested() {
        let mut wf = connected_workflow();
        assert!(wf.select_table("ghost").is_none());
        assert_eq!(wf.phase(), Phase::SchemaReady);
    }

    #[test]
    fn new_transfer_clears_previous_result() {
        let mut wf = connected_workflow();
        let load = wf.select_table("users").unwrap();
        wf.apply(Response {
            generation: load.generation,
            reply: Reply::Columns {
                table: "users".into(),
                result: Ok(vec!["id".into()]),
            },
        });
        let transfer = wf.transfer().unwrap();
        wf.apply(Response {
            generation: transfer.generation,
            reply: Reply::Transferred(Ok(7)),
        });
        assert_eq!(wf.status().result(), "Records processed: 7");

        wf.transfer().unwrap();
        assert_eq!(wf.status().result(), "");
        assert_eq!(wf.status().status(), "Starting data transfer...");
    }
}
