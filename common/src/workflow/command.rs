//! Requests the workflow asks its host to perform, and how they are run.
//!
//! The workflow never awaits anything itself. Each action yields a `Command`;
//! the host runs it with [`execute`] (in the browser inside `spawn_local`) and
//! feeds the resulting `Response` back through `Workflow::apply`.

use crate::error::ApiFailure;
use crate::requests::{
    ColumnsResponse, ConnectRequest, FileSchemaRequest, TablesResponse, TransferRequest,
    TransferResponse,
};

/// The export service as seen by the workflow. One method per endpoint.
#[allow(async_fn_in_trait)]
pub trait ExportApi {
    async fn connect(&self, request: &ConnectRequest) -> Result<(), ApiFailure>;

    async fn discover_tables(&self) -> Result<TablesResponse, ApiFailure>;

    async fn discover_columns(&self, table: &str) -> Result<ColumnsResponse, ApiFailure>;

    async fn discover_file_schema(
        &self,
        request: &FileSchemaRequest,
    ) -> Result<ColumnsResponse, ApiFailure>;

    async fn transfer(&self, request: &TransferRequest) -> Result<TransferResponse, ApiFailure>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Connect(ConnectRequest),
    DiscoverTables,
    DiscoverColumns { table: String },
    DiscoverFile(FileSchemaRequest),
    Transfer(TransferRequest),
}

/// A request tagged with the generation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub generation: u64,
    pub request: Request,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Connected(Result<(), ApiFailure>),
    Tables(Result<Vec<String>, ApiFailure>),
    Columns {
        table: String,
        result: Result<Vec<String>, ApiFailure>,
    },
    FileColumns(Result<Vec<String>, ApiFailure>),
    Transferred(Result<u64, ApiFailure>),
}

/// Outcome of a command, still tagged with the command's generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub generation: u64,
    pub reply: Reply,
}

/// Runs one command against `api`. Never fails: every error is folded into
/// the reply.
pub async fn execute<A: ExportApi>(api: &A, command: Command) -> Response {
    let reply = match command.request {
        Request::Connect(body) => Reply::Connected(api.connect(&body).await),
        Request::DiscoverTables => {
            Reply::Tables(api.discover_tables().await.map(|r| r.tables))
        }
        Request::DiscoverColumns { table } => {
            let result = api.discover_columns(&table).await.map(|r| r.columns);
            Reply::Columns { table, result }
        }
        Request::DiscoverFile(body) => {
            Reply::FileColumns(api.discover_file_schema(&body).await.map(|r| r.columns))
        }
        Request::Transfer(body) => {
            Reply::Transferred(api.transfer(&body).await.map(|r| r.record_count))
        }
    };
    Response {
        generation: command.generation,
        reply,
    }
}
