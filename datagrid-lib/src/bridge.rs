//! Confirmed-state delivery to persisted widget state.
//!
//! The grid only decides *when* something is confirmed. Delivery is
//! fire-and-forget: implementations must not block, and must deliver events
//! in the order they were confirmed.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

use crate::selection::GridSelection;

/// Receiver of confirmed selections and writes.
pub trait WidgetStateBridge: Send + Sync {
    /// The selection changed in a way the user intended.
    fn confirm_selection(&self, selection: &GridSelection, cell_mode: bool);

    /// A validated cell value was written. `value` is JSON text.
    fn confirm_write(&self, column_id: &str, row: usize, value: String);
}

/// A confirmed event, as carried over a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BridgeEvent {
    Selection {
        selection: GridSelection,
        cell_mode: bool,
    },
    Write {
        column_id: String,
        row: usize,
        value: String,
    },
}

impl WidgetStateBridge for UnboundedSender<BridgeEvent> {
    fn confirm_selection(&self, selection: &GridSelection, cell_mode: bool) {
        let event = BridgeEvent::Selection {
            selection: selection.clone(),
            cell_mode,
        };
        if self.send(event).is_err() {
            log::warn!("Widget state receiver dropped, selection not delivered");
        }
    }

    fn confirm_write(&self, column_id: &str, row: usize, value: String) {
        let event = BridgeEvent::Write {
            column_id: column_id.to_string(),
            row,
            value,
        };
        if self.send(event).is_err() {
            log::warn!("Widget state receiver dropped, write to '{}' not delivered", column_id);
        }
    }
}

/// Bridge that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBridge;

impl WidgetStateBridge for NullBridge {
    fn confirm_selection(&self, _selection: &GridSelection, _cell_mode: bool) {}

    fn confirm_write(&self, _column_id: &str, _row: usize, _value: String) {}
}
