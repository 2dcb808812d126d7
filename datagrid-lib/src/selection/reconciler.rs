//! Reconciles raw selection events from the rendering surface.
//!
//! The rendering surface reports the selection it currently displays. That
//! report conflates navigation with intent: clicking a cell or moving with
//! the arrow keys clears row and column selection, and selecting a row
//! drops the column selection (and vice versa). The reconciler turns each
//! candidate into the selection the user meant and decides whether the
//! change must be confirmed to the [`WidgetStateBridge`].
//!
//! Rules, applied in order to every candidate:
//!
//! - **A**: a new current cell with rows and columns both emptied keeps the
//!   committed rows and columns. Only cell mode may sync.
//! - **B**: a new row selection that empties the columns keeps the
//!   committed columns. Always syncs.
//! - **C**: a new column selection that empties the rows keeps the committed
//!   rows and current cell. Always syncs.
//! - Index columns are removed from the column selection.
//!
//! The three rules need different combinations of empty and non-empty
//! rows/columns, so at most one of them fires.

use std::sync::Arc;

use crate::bridge::WidgetStateBridge;
use crate::column::ColumnDefinition;

use super::{GridSelection, SelectionModes};

/// Result of reconciling one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The committed selection.
    pub selection: GridSelection,
    /// Whether the bridge was notified.
    pub synced: bool,
}

/// Selection state machine for one grid instance.
pub struct SelectionReconciler {
    modes: SelectionModes,
    committed: GridSelection,
    bridge: Arc<dyn WidgetStateBridge>,
}

impl std::fmt::Debug for SelectionReconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionReconciler")
            .field("modes", &self.modes)
            .field("committed", &self.committed)
            .finish_non_exhaustive()
    }
}

impl SelectionReconciler {
    pub fn new(modes: SelectionModes, bridge: Arc<dyn WidgetStateBridge>) -> Self {
        Self {
            modes,
            committed: GridSelection::default(),
            bridge,
        }
    }

    /// Start from an already committed selection, e.g. restored widget state.
    pub fn with_selection(mut self, selection: GridSelection) -> Self {
        self.committed = selection;
        self
    }

    pub fn modes(&self) -> SelectionModes {
        self.modes
    }

    /// The committed selection.
    pub fn selection(&self) -> &GridSelection {
        &self.committed
    }

    /// Reconcile a candidate reported by the rendering surface.
    ///
    /// `columns` is the current column list; positions in the selection
    /// index into it.
    pub fn process_selection_change(
        &mut self,
        candidate: GridSelection,
        columns: &[ColumnDefinition],
    ) -> Reconciliation {
        let row_mode = self.modes.row_mode();
        let column_mode = self.modes.column_mode();
        let cell_mode = self.modes.cell_mode();
        let committed = &self.committed;

        let rows_changed = candidate.rows != committed.rows;
        let columns_changed = candidate.columns != committed.columns;
        let cell_changed = candidate.current != committed.current;

        let mut sync = (row_mode && rows_changed)
            || (column_mode && columns_changed)
            || (cell_mode && cell_changed);
        let mut updated = candidate.clone();

        // A: the surface cleared rows/columns because a cell got focus.
        if (row_mode || column_mode)
            && candidate.current.is_some()
            && cell_changed
            && candidate.rows.is_empty()
            && candidate.columns.is_empty()
        {
            updated.rows = committed.rows.clone();
            updated.columns = committed.columns.clone();
            sync = cell_mode && cell_changed;
            log::trace!("Selection rule A: keeping rows/columns on cell focus");
        }

        // B: selecting rows dropped the column selection.
        if rows_changed
            && !candidate.rows.is_empty()
            && columns_changed
            && candidate.columns.is_empty()
        {
            updated.columns = committed.columns.clone();
            sync = true;
            log::trace!("Selection rule B: keeping columns on row selection");
        }

        // C: selecting columns dropped the row and cell selection.
        if columns_changed
            && !candidate.columns.is_empty()
            && rows_changed
            && candidate.rows.is_empty()
        {
            updated.rows = committed.rows.clone();
            updated.current = committed.current.clone();
            sync = true;
            log::trace!("Selection rule C: keeping rows and cell on column selection");
        }

        if !updated.columns.is_empty() {
            let before = updated.columns.len();
            updated
                .columns
                .retain(|&pos| !columns.get(pos).is_some_and(|c| c.is_index));
            if updated.columns.len() != before {
                log::trace!(
                    "Removed {} index column(s) from selection",
                    before - updated.columns.len()
                );
            }
        }

        self.commit(updated, sync)
    }

    /// Clear the selection, optionally keeping rows and/or columns.
    ///
    /// The current cell is always cleared.
    pub fn clear_selection(&mut self, keep_rows: bool, keep_columns: bool) -> Reconciliation {
        let cleared = GridSelection {
            rows: if keep_rows {
                self.committed.rows.clone()
            } else {
                Default::default()
            },
            columns: if keep_columns {
                self.committed.columns.clone()
            } else {
                Default::default()
            },
            current: None,
        };
        let sync = (!keep_rows && self.modes.row_mode())
            || (!keep_columns && self.modes.column_mode())
            || self.modes.cell_mode();
        self.commit(cleared, sync)
    }

    fn commit(&mut self, selection: GridSelection, sync: bool) -> Reconciliation {
        log::trace!("Committing selection {:?} (sync: {})", selection, sync);
        self.committed = selection.clone();
        if sync {
            log::debug!("Confirming selection to widget state");
            self.bridge
                .confirm_selection(&self.committed, self.modes.cell_mode());
        }
        Reconciliation {
            selection,
            synced: sync,
        }
    }
}
