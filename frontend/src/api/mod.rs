//! `ExportApi` over the browser's fetch, through `gloo-net`.
//!
//! Paths are relative to `EXPORT_API_BASE` (set at build time), which is
//! empty by default so the client talks to the origin that served it.

use common::error::ApiFailure;
use common::requests::{
    ColumnsResponse, ConnectRequest, ErrorBody, FileSchemaRequest, TablesResponse,
    TransferRequest, TransferResponse,
};
use common::workflow::ExportApi;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const API_BASE: &str = match option_env!("EXPORT_API_BASE") {
    Some(base) => base,
    None => "",
};

#[derive(Clone, Debug, PartialEq)]
pub struct HttpExportApi {
    base: String,
}

impl Default for HttpExportApi {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl HttpExportApi {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl ExportApi for HttpExportApi {
    async fn connect(&self, request: &ConnectRequest) -> Result<(), ApiFailure> {
        let response = Request::post(&self.url("/api/connect"))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if response.ok() {
            Ok(())
        } else {
            Err(rejected(response).await)
        }
    }

    async fn discover_tables(&self) -> Result<TablesResponse, ApiFailure> {
        let response = Request::get(&self.url("/api/discover-schema"))
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    async fn discover_columns(&self, table: &str) -> Result<ColumnsResponse, ApiFailure> {
        let response = Request::get(&self.url("/api/discover-schema"))
            .query([("table", table)])
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    async fn discover_file_schema(
        &self,
        request: &FileSchemaRequest,
    ) -> Result<ColumnsResponse, ApiFailure> {
        let response = Request::post(&self.url("/api/discover-schema"))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    async fn transfer(&self, request: &TransferRequest) -> Result<TransferResponse, ApiFailure> {
        let response = Request::post(&self.url("/api/transfer"))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    if !response.ok() {
        return Err(rejected(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiFailure::Decode(err.to_string()))
}

/// A non-2xx answer. A body that is not JSON, or has no `error`, yields no
/// message so the caller's default applies.
async fn rejected(response: Response) -> ApiFailure {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error);
    ApiFailure::Rejected { status, message }
}

fn transport(err: gloo_net::Error) -> ApiFailure {
    match err {
        gloo_net::Error::JsError(js) => ApiFailure::Transport(js.message),
        other => ApiFailure::Transport(other.to_string()),
    }
}
