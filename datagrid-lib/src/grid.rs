//! Grid facade used by the rendering surface.

use std::sync::Arc;

use serde_json::Value;

use crate::bridge::WidgetStateBridge;
use crate::cell::{Cell, CellClickEvent, CellData, EventResult};
use crate::column::{ColumnDefinition, ColumnKind, LinkOpener};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::overlay::{self, ColumnOverride, ColumnOverrides};
use crate::selection::{GridSelection, Reconciliation, SelectionReconciler};

/// Outcome of a cell edit.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The value passed validation and was confirmed to the bridge.
    Committed(Cell),
    /// The value failed validation; the error cell is for display only.
    Rejected(Cell),
}

impl EditOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    pub fn cell(&self) -> &Cell {
        match self {
            Self::Committed(cell) | Self::Rejected(cell) => cell,
        }
    }
}

/// State of one grid widget session.
///
/// Owns the column kinds, the override map and the selection. All methods
/// run synchronously on the caller's thread.
pub struct DataGrid {
    definitions: Vec<ColumnDefinition>,
    kinds: Vec<ColumnKind>,
    overrides: ColumnOverrides,
    column_order: Vec<String>,
    reconciler: SelectionReconciler,
    bridge: Arc<dyn WidgetStateBridge>,
}

impl std::fmt::Debug for DataGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGrid")
            .field("definitions", &self.definitions)
            .field("overrides", &self.overrides)
            .field("column_order", &self.column_order)
            .field("reconciler", &self.reconciler)
            .finish_non_exhaustive()
    }
}

impl DataGrid {
    /// Build a grid from the data source's columns and the widget config.
    pub fn new(
        definitions: Vec<ColumnDefinition>,
        config: GridConfig,
        bridge: Arc<dyn WidgetStateBridge>,
    ) -> Self {
        let kinds = definitions
            .iter()
            .map(|d| ColumnKind::from_definition(d.clone(), config.column_config.get(&d.id)))
            .collect();

        // Declared hidden flags seed the overrides unless already overridden.
        let mut overrides = config.overrides.clone();
        for definition in definitions.iter().filter(|d| d.is_hidden) {
            let has_hidden = overrides
                .get(&definition.id)
                .is_some_and(|o| o.hidden.is_some());
            if !has_hidden {
                overrides = overlay::hide_column(&overrides, &definition.id);
            }
        }

        let reconciler = SelectionReconciler::new(config.selection_modes(), Arc::clone(&bridge));
        log::debug!(
            "Built grid with {} columns, modes {:?}",
            definitions.len(),
            reconciler.modes()
        );

        Self {
            definitions,
            kinds,
            overrides,
            column_order: config.column_order,
            reconciler,
            bridge,
        }
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.definitions
    }

    pub fn column(&self, id: &str) -> Option<&ColumnKind> {
        self.kinds.iter().find(|k| k.definition().id == id)
    }

    fn require_column(&self, id: &str) -> Result<&ColumnKind, GridError> {
        self.column(id).ok_or_else(|| GridError::unknown_column(id))
    }

    pub fn get_cell(
        &self,
        column_id: &str,
        data: Option<&Value>,
        validate: bool,
    ) -> Result<Cell, GridError> {
        Ok(self.require_column(column_id)?.get_cell(data, validate))
    }

    pub fn get_cell_value(&self, column_id: &str, cell: &Cell) -> Result<Option<Value>, GridError> {
        Ok(self.require_column(column_id)?.get_cell_value(cell))
    }

    pub fn validate_input(&self, column_id: &str, data: Option<&Value>) -> Result<bool, GridError> {
        Ok(self.require_column(column_id)?.validate_input(data))
    }

    /// Validate and commit an edit.
    ///
    /// Rejected values are never sent to the bridge.
    pub fn edit_cell(
        &self,
        column_id: &str,
        row: usize,
        data: Option<&Value>,
    ) -> Result<EditOutcome, GridError> {
        let kind = self.require_column(column_id)?;
        if !kind.definition().is_editable || !kind.is_editable_type() {
            return Err(GridError::read_only(column_id));
        }

        let cell = kind.get_cell(data, true);
        if cell.is_error {
            log::debug!(
                "Rejected edit of '{}' row {}: {}",
                column_id,
                row,
                cell.error_message().unwrap_or_default()
            );
            return Ok(EditOutcome::Rejected(cell));
        }

        // Missing values skip validation in get_cell, so the required rule
        // is checked against the value that would be committed.
        let value = kind.get_cell_value(&cell);
        if !kind.validate_input(value.as_ref()) {
            log::debug!("Rejected edit of '{}' row {}: invalid value", column_id, row);
            return Ok(EditOutcome::Rejected(Cell::error("Invalid input.")));
        }

        let value = value.unwrap_or(Value::Null);
        self.bridge.confirm_write(column_id, row, value.to_string());
        Ok(EditOutcome::Committed(cell))
    }

    /// Handle a click on a cell holding `data`.
    pub fn click_cell(
        &self,
        event: &mut CellClickEvent,
        data: Option<&Value>,
        opener: &dyn LinkOpener,
    ) -> Result<EventResult, GridError> {
        let cell = self.get_cell(&event.column_id, data, false)?;
        match &cell.data {
            CellData::Link(link) => Ok(link.on_click(event, opener)),
            _ => Ok(EventResult::Ignored),
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// The committed selection.
    pub fn selection(&self) -> &GridSelection {
        self.reconciler.selection()
    }

    pub fn process_selection_change(&mut self, candidate: GridSelection) -> Reconciliation {
        self.reconciler
            .process_selection_change(candidate, &self.definitions)
    }

    pub fn clear_selection(&mut self, keep_rows: bool, keep_columns: bool) -> Reconciliation {
        self.reconciler.clear_selection(keep_rows, keep_columns)
    }

    /// Persisted shape of the committed selection.
    pub fn selection_widget_value(&self) -> Value {
        self.selection().to_widget_value(&self.definitions)
    }

    // -------------------------------------------------------------------------
    // Visibility and order
    // -------------------------------------------------------------------------

    pub fn overrides(&self) -> &ColumnOverrides {
        &self.overrides
    }

    pub fn column_override(&self, id: &str) -> Option<&ColumnOverride> {
        self.overrides.get(id)
    }

    pub fn column_order(&self) -> &[String] {
        &self.column_order
    }

    /// Hide a column and drop the column selection. Rows stay selected.
    pub fn hide_column(&mut self, id: &str) -> Reconciliation {
        self.overrides = overlay::hide_column(&self.overrides, id);
        self.reconciler.clear_selection(true, false)
    }

    /// Show a column and drop the column selection. Rows stay selected.
    pub fn show_column(&mut self, id: &str) -> Reconciliation {
        self.overrides = overlay::show_column(&self.overrides, id);
        self.reconciler.clear_selection(true, false)
    }

    pub fn set_column_width(&mut self, id: &str, width: f64) {
        self.overrides = overlay::set_column_width(&self.overrides, id, width);
    }

    pub fn set_column_format(&mut self, id: &str, format: impl Into<String>) {
        self.overrides = overlay::set_column_format(&self.overrides, id, format);
    }

    /// Effective visibility of a column, `None` for unknown ids.
    pub fn is_column_hidden(&self, id: &str) -> Option<bool> {
        self.definitions
            .iter()
            .find(|d| d.id == id)
            .map(|d| overlay::is_effectively_hidden(d, &self.overrides, &self.column_order))
    }

    /// Visible columns in display order.
    pub fn visible_columns(&self) -> Vec<&ColumnDefinition> {
        overlay::visible_columns(&self.definitions, &self.overrides, &self.column_order)
            .into_iter()
            .map(|pos| &self.definitions[pos])
            .collect()
    }
}
