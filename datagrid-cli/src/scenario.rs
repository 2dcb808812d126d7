//! Scenario files: a column list, a grid config and the events to replay.

use std::path::Path;
use std::sync::Arc;

use datagrid_lib::bridge::BridgeEvent;
use datagrid_lib::column::ColumnDefinition;
use datagrid_lib::config::GridConfig;
use datagrid_lib::error::GridError;
use datagrid_lib::selection::GridSelection;
use datagrid_lib::{DataGrid, EditOutcome};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc;

/// Scenario error type.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("event {index}: {source}")]
    Event { index: usize, source: GridError },
}

/// One interaction from the rendering surface.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioEvent {
    Selection {
        candidate: GridSelection,
    },
    Clear {
        #[serde(default)]
        keep_rows: bool,
        #[serde(default)]
        keep_columns: bool,
    },
    Hide {
        id: String,
    },
    Show {
        id: String,
    },
    Edit {
        column_id: String,
        row: usize,
        #[serde(default)]
        value: Value,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub columns: Vec<ColumnDefinition>,
    #[serde(default)]
    pub config: GridConfig,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Replay every event and collect the confirmed bridge events in order.
    pub fn replay(self) -> Result<Vec<BridgeEvent>, ScenarioError> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut grid = DataGrid::new(self.columns, self.config, Arc::new(tx));

        for (index, event) in self.events.into_iter().enumerate() {
            log::debug!("Replaying event {}: {:?}", index, event);
            match event {
                ScenarioEvent::Selection { candidate } => {
                    grid.process_selection_change(candidate);
                }
                ScenarioEvent::Clear {
                    keep_rows,
                    keep_columns,
                } => {
                    grid.clear_selection(keep_rows, keep_columns);
                }
                ScenarioEvent::Hide { id } => {
                    grid.hide_column(&id);
                }
                ScenarioEvent::Show { id } => {
                    grid.show_column(&id);
                }
                ScenarioEvent::Edit {
                    column_id,
                    row,
                    value,
                } => {
                    let outcome = grid
                        .edit_cell(&column_id, row, Some(&value))
                        .map_err(|source| ScenarioError::Event { index, source })?;
                    if let EditOutcome::Rejected(cell) = outcome {
                        log::info!(
                            "Edit of '{}' row {} rejected: {}",
                            column_id,
                            row,
                            cell.error_message().unwrap_or_default()
                        );
                    }
                }
            }
        }

        drop(grid);
        let mut confirmed = Vec::new();
        while let Ok(event) = rx.try_recv() {
            confirmed.push(event);
        }
        Ok(confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scenario(events: Value) -> Scenario {
        serde_json::from_value(json!({
            "columns": [
                { "id": "_index", "kind": "number", "is_index": true },
                { "id": "url", "kind": "link", "is_editable": true }
            ],
            "config": {
                "selection_mode": ["multi-row", "multi-column"],
                "column_config": { "url": { "type": "link", "validate": "^https://" } }
            },
            "events": events
        }))
        .unwrap()
    }

    #[test]
    fn test_replay_preserves_order() {
        let confirmed = scenario(json!([
            { "type": "selection", "candidate": { "rows": [1] } },
            { "type": "edit", "column_id": "url", "row": 1, "value": "https://a.io" },
            { "type": "edit", "column_id": "url", "row": 1, "value": "nope" },
            { "type": "hide", "id": "url" }
        ]))
        .replay()
        .unwrap();

        assert_eq!(confirmed.len(), 3);
        assert!(matches!(confirmed[0], BridgeEvent::Selection { .. }));
        assert!(matches!(
            &confirmed[1],
            BridgeEvent::Write { value, .. } if value == "\"https://a.io\""
        ));
        assert!(matches!(confirmed[2], BridgeEvent::Selection { .. }));
    }

    #[test]
    fn test_unknown_column_reports_event_index() {
        let err = scenario(json!([
            { "type": "clear" },
            { "type": "edit", "column_id": "missing", "row": 0, "value": 1 }
        ]))
        .replay()
        .unwrap_err();

        assert!(matches!(err, ScenarioError::Event { index: 1, .. }));
    }
}
