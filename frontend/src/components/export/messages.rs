use common::model::source::{DatabaseField, FileField, SourceKind};
use common::workflow::Response;

#[derive(Clone)]
pub enum Msg {
    SelectSource(SourceKind),
    EditDatabase(DatabaseField, String),
    SetSecure(bool),
    EditFile(FileField, String),
    Connect,
    LoadFile,
    SelectTable(String),
    ToggleColumn(usize, bool),
    Transfer,
    Completed(Response),
}
