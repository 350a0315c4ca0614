//! JSON bodies exchanged with the export service.
//!
//! Field names follow the service's camelCase contract; the Rust side keeps
//! snake_case and renames at the serde boundary.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/connect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    pub host: String,
    pub port: String,
    pub database: String,
    pub user: String,
    pub jwt_token: String,
    pub secure: bool,
}

/// Body of `POST /api/discover-schema` for a file source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSchemaRequest {
    pub file_path: String,
    pub delimiter: String,
}

/// Body of `POST /api/transfer`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub columns: Vec<String>,
}

/// Successful `GET /api/discover-schema`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesResponse {
    pub tables: Vec<String>,
}

/// Successful column discovery, for a table or a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnsResponse {
    pub columns: Vec<String>,
}

/// Successful `POST /api/transfer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub record_count: u64,
}

/// Failure body shared by every endpoint. The message is optional; callers
/// fall back to a per-action default when it is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
