//! State of the export component: the workflow core plus the HTTP client
//! its commands run against.

use common::workflow::Workflow;

use crate::api::HttpExportApi;

pub struct ExportComponent {
    /// Source forms, discovered schema, status and the current phase.
    pub workflow: Workflow,

    /// Client used by every spawned request. Cloned into each task.
    pub api: HttpExportApi,
}

impl ExportComponent {
    pub fn new() -> Self {
        Self {
            workflow: Workflow::new(),
            api: HttpExportApi::default(),
        }
    }
}
