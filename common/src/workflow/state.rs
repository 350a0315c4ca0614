use crate::model::source::SourceKind;

/// A user-visible step of the export workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Connect,
    DiscoverTables,
    DiscoverColumns,
    LoadFile,
    Transfer,
}

impl Action {
    /// Position of the action in the workflow. After a failure only actions
    /// at the same or an earlier stage may be retried.
    pub fn stage(&self) -> u8 {
        match self {
            Action::Connect | Action::DiscoverTables | Action::LoadFile => 1,
            Action::DiscoverColumns => 2,
            Action::Transfer => 3,
        }
    }

    /// The source kind the action belongs to, if it is source specific.
    pub fn source(&self) -> Option<SourceKind> {
        match self {
            Action::Connect | Action::DiscoverTables | Action::DiscoverColumns => {
                Some(SourceKind::Database)
            }
            Action::LoadFile => Some(SourceKind::File),
            Action::Transfer => None,
        }
    }
}

/// Where the workflow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected yet.
    Idle,
    /// A source panel is shown and being filled in.
    ConfiguringSource,
    Connecting,
    DiscoveringTables,
    /// Tables are listed; waiting for the user to pick one.
    SchemaReady,
    LoadingColumns,
    LoadingFile,
    /// Columns are listed and can be transferred.
    ColumnsReady,
    Transferring,
    Complete,
    Errored { last_action: Action },
}

impl Phase {
    /// Whether a request issued by this workflow is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Phase::Connecting
                | Phase::DiscoveringTables
                | Phase::LoadingColumns
                | Phase::LoadingFile
                | Phase::Transferring
        )
    }

    /// Whether `action` is reachable from this phase, ignoring which source
    /// is selected.
    pub fn admits(&self, action: Action) -> bool {
        match self {
            Phase::Idle => false,
            Phase::ConfiguringSource => action.stage() == 1,
            Phase::SchemaReady => action.stage() <= 2,
            Phase::ColumnsReady | Phase::Complete => true,
            Phase::Errored { last_action } => action.stage() <= last_action.stage(),
            _ => false,
        }
    }
}

/// Handle for the server-side context created by a successful connect or
/// file load.
///
/// The backend keeps the connection and the loaded file itself; this handle
/// is the client's record of which one later calls are made against. Every
/// command carries the generation it was issued under and replies from an
/// older generation are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    id: u64,
    source: SourceKind,
}

impl Session {
    pub(crate) fn new(id: u64, source: SourceKind) -> Self {
        Self { id, source }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }
}
