//! Active selection modes of a grid.

use serde::{Deserialize, Serialize};

/// Which of the six selection modes are active.
///
/// Derived once from the declared capability list when the grid is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionModes {
    pub single_row: bool,
    pub multi_row: bool,
    pub single_column: bool,
    pub multi_column: bool,
    pub single_cell: bool,
    pub multi_cell: bool,
}

impl SelectionModes {
    /// No selection allowed.
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse mode names such as `"multi-row"` or `"single-cell"`.
    ///
    /// Unknown names are logged and skipped.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Self {
        let mut modes = Self::default();
        for name in names {
            match name.as_ref() {
                "single-row" => modes.single_row = true,
                "multi-row" => modes.multi_row = true,
                "single-column" => modes.single_column = true,
                "multi-column" => modes.multi_column = true,
                "single-cell" => modes.single_cell = true,
                "multi-cell" => modes.multi_cell = true,
                other => log::warn!("Unknown selection mode '{}'", other),
            }
        }
        modes
    }

    pub fn row_mode(&self) -> bool {
        self.single_row || self.multi_row
    }

    pub fn column_mode(&self) -> bool {
        self.single_column || self.multi_column
    }

    pub fn cell_mode(&self) -> bool {
        self.single_cell || self.multi_cell
    }

    pub fn is_enabled(&self) -> bool {
        self.row_mode() || self.column_mode() || self.cell_mode()
    }
}
