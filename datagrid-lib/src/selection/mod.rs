//! Selection state and reconciliation.
//!
//! Positions (rows and columns) are indices into the grid's current row and
//! column lists. The current cell is addressed by row position and column id.

mod mode;
mod reconciler;
mod state;

pub use mode::SelectionModes;
pub use reconciler::{Reconciliation, SelectionReconciler};
pub use state::{CellPosition, GridSelection};
