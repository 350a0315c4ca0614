use crate::error::ExportError;

/// Single-slot feedback shown to the user: one status line and one result
/// line. Every write replaces the previous value; nothing is queued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReporter {
    status: String,
    result: String,
}

impl StatusReporter {
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    pub fn set_result(&mut self, message: impl Into<String>) {
        self.result = message.into();
    }

    pub fn report_error(&mut self, error: &ExportError) {
        self.status = error.to_string();
    }

    pub fn clear(&mut self) {
        self.status.clear();
        self.result.clear();
    }
}
