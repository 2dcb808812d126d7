//! Error types

/// Errors returned by [`DataGrid`](crate::DataGrid) operations.
///
/// Malformed per-column configuration never ends up here: it degrades to
/// error cells instead. Only API misuse and unreadable configuration do.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The column id is not part of the grid.
    #[error("Column '{0}' not found in grid")]
    UnknownColumn(String),

    /// The column cannot accept edits.
    #[error("Column '{0}' is read-only")]
    ReadOnlyColumn(String),

    /// The grid configuration could not be parsed.
    #[error("invalid grid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl GridError {
    /// Creates a new unknown column error.
    pub fn unknown_column(id: impl Into<String>) -> Self {
        Self::UnknownColumn(id.into())
    }

    /// Creates a new read-only column error.
    pub fn read_only(id: impl Into<String>) -> Self {
        Self::ReadOnlyColumn(id.into())
    }
}
