use thiserror::Error;

pub const CONNECTION_FAILED: &str = "Connection failed";
pub const SCHEMA_DISCOVERY_FAILED: &str = "Schema discovery failed";
pub const COLUMN_LOADING_FAILED: &str = "Column loading failed";
pub const FILE_LOADING_FAILED: &str = "File loading failed";
pub const TRANSFER_FAILED: &str = "Transfer failed";

/// Why a single call to the export service did not succeed.
///
/// A non-2xx answer and a transport error end up in the same status line, so
/// the only thing callers care about is whether a message came with it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiFailure {
    /// The service answered with a non-success status.
    #[error("{}", .message.as_deref().unwrap_or("request rejected"))]
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// The response body did not have the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl ApiFailure {
    /// The message to show the user, if the failure carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiFailure::Rejected { message, .. } => message.as_deref(),
            ApiFailure::Transport(message) | ApiFailure::Decode(message) => Some(message),
        }
    }
}

/// Which discovery call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryKind {
    Tables,
    Columns,
    File,
}

impl DiscoveryKind {
    pub fn default_message(&self) -> &'static str {
        match self {
            DiscoveryKind::Tables => SCHEMA_DISCOVERY_FAILED,
            DiscoveryKind::Columns => COLUMN_LOADING_FAILED,
            DiscoveryKind::File => FILE_LOADING_FAILED,
        }
    }
}

/// Failure of one workflow action. `Display` is the exact status line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Error: {}", describe(.0, CONNECTION_FAILED))]
    Connection(ApiFailure),
    #[error("Error: {}", describe(.failure, .kind.default_message()))]
    Discovery {
        kind: DiscoveryKind,
        failure: ApiFailure,
    },
    #[error("Error: {}", describe(.0, TRANSFER_FAILED))]
    Transfer(ApiFailure),
}

impl ExportError {
    pub fn failure(&self) -> &ApiFailure {
        match self {
            ExportError::Connection(failure)
            | ExportError::Discovery { failure, .. }
            | ExportError::Transfer(failure) => failure,
        }
    }
}

fn describe<'a>(failure: &'a ApiFailure, default: &'a str) -> &'a str {
    match failure.message() {
        Some(message) if !message.is_empty() => message,
        _ => default,
    }
}
