//! Composite selection state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::column::ColumnDefinition;

/// The focused cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub column_id: String,
}

impl CellPosition {
    pub fn new(row: usize, column_id: impl Into<String>) -> Self {
        Self {
            row,
            column_id: column_id.into(),
        }
    }
}

/// Row, column and current-cell selection of one grid.
///
/// Rows and columns are positions, kept sorted. Replaced as a whole by the
/// reconciler, never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSelection {
    pub rows: BTreeSet<usize>,
    pub columns: BTreeSet<usize>,
    pub current: Option<CellPosition>,
}

impl GridSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = usize>) -> Self {
        self.rows = rows.into_iter().collect();
        self
    }

    pub fn with_columns(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }

    pub fn with_current(mut self, row: usize, column_id: impl Into<String>) -> Self {
        self.current = Some(CellPosition::new(row, column_id));
        self
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty() && self.current.is_none()
    }

    /// Persisted shape of the selection.
    ///
    /// Column positions are reported by column name; positions outside
    /// `columns` are skipped.
    ///
    /// ```json
    /// {"selection": {"rows": [1], "columns": ["a"], "cells": [[1, "a"]]}}
    /// ```
    pub fn to_widget_value(&self, columns: &[ColumnDefinition]) -> Value {
        let column_names: Vec<&str> = self
            .columns
            .iter()
            .filter_map(|&pos| columns.get(pos))
            .map(|c| c.name.as_str())
            .collect();

        let cells: Vec<Value> = self
            .current
            .iter()
            .filter_map(|cell| {
                columns
                    .iter()
                    .find(|c| c.id == cell.column_id)
                    .map(|c| json!([cell.row, c.name]))
            })
            .collect();

        json!({
            "selection": {
                "rows": self.rows,
                "columns": column_names,
                "cells": cells,
            }
        })
    }
}
