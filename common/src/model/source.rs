use serde::{Deserialize, Serialize};

use crate::requests::{ConnectRequest, FileSchemaRequest};

/// Which kind of source the user is exporting from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    /// A networked analytical database reached through the backend.
    Database,
    /// A delimited file readable by the backend.
    File,
}

/// Connection form for a database source.
///
/// Every field is forwarded verbatim; the backend decides what is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: String,
    pub database: String,
    pub user: String,
    pub token: String,
    pub secure: bool,
}

/// Form for a file source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub file_path: String,
    pub delimiter: String,
}

/// Text inputs of the database panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseField {
    Host,
    Port,
    Database,
    User,
    Token,
}

/// Text inputs of the file panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileField {
    Path,
    Delimiter,
}

impl DatabaseConfig {
    pub fn set(&mut self, field: DatabaseField, value: String) {
        match field {
            DatabaseField::Host => self.host = value,
            DatabaseField::Port => self.port = value,
            DatabaseField::Database => self.database = value,
            DatabaseField::User => self.user = value,
            DatabaseField::Token => self.token = value,
        }
    }

    pub fn to_request(&self) -> ConnectRequest {
        ConnectRequest {
            host: self.host.clone(),
            port: self.port.clone(),
            database: self.database.clone(),
            user: self.user.clone(),
            jwt_token: self.token.clone(),
            secure: self.secure,
        }
    }
}

impl FileConfig {
    pub fn set(&mut self, field: FileField, value: String) {
        match field {
            FileField::Path => self.file_path = value,
            FileField::Delimiter => self.delimiter = value,
        }
    }

    pub fn to_request(&self) -> FileSchemaRequest {
        FileSchemaRequest {
            file_path: self.file_path.clone(),
            delimiter: self.delimiter.clone(),
        }
    }
}

/// The live source configuration. Only one variant exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Database(DatabaseConfig),
    File(FileConfig),
}

impl SourceConfig {
    /// A blank form for `kind`.
    pub fn empty(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Database => SourceConfig::Database(DatabaseConfig::default()),
            SourceKind::File => SourceConfig::File(FileConfig::default()),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            SourceConfig::Database(_) => SourceKind::Database,
            SourceConfig::File(_) => SourceKind::File,
        }
    }
}

/// Two-way switch between the database and file panels.
///
/// Before the first selection no panel is shown. Afterwards exactly one is,
/// and switching to the other kind throws away whatever was typed into the
/// panel being left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSelector {
    config: Option<SourceConfig>,
}

impl SourceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the panel for `kind`. Returns `false` when it was already shown.
    pub fn select(&mut self, kind: SourceKind) -> bool {
        if self.active() == Some(kind) {
            return false;
        }
        self.config = Some(SourceConfig::empty(kind));
        true
    }

    pub fn active(&self) -> Option<SourceKind> {
        self.config.as_ref().map(SourceConfig::kind)
    }

    pub fn is_visible(&self, kind: SourceKind) -> bool {
        self.active() == Some(kind)
    }

    pub fn config(&self) -> Option<&SourceConfig> {
        self.config.as_ref()
    }

    pub fn database(&self) -> Option<&DatabaseConfig> {
        match &self.config {
            Some(SourceConfig::Database(db)) => Some(db),
            _ => None,
        }
    }

    pub fn database_mut(&mut self) -> Option<&mut DatabaseConfig> {
        match &mut self.config {
            Some(SourceConfig::Database(db)) => Some(db),
            _ => None,
        }
    }

    pub fn file(&self) -> Option<&FileConfig> {
        match &self.config {
            Some(SourceConfig::File(file)) => Some(file),
            _ => None,
        }
    }

    pub fn file_mut(&mut self) -> Option<&mut FileConfig> {
        match &mut self.config {
            Some(SourceConfig::File(file)) => Some(file),
            _ => None,
        }
    }
}
