//! Grid configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::column::TypeConfig;
use crate::error::GridError;
use crate::overlay::ColumnOverrides;
use crate::selection::SelectionModes;

/// Per-grid configuration, as declared by the widget.
///
/// ```json
/// {
///   "selection_mode": ["multi-row", "single-cell"],
///   "column_order": ["name", "homepage"],
///   "column_config": { "homepage": { "type": "link", "display_text": "Open" } },
///   "overrides": { "name": { "width": 120 } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Active selection modes (`single-row`, `multi-cell`, ...).
    pub selection_mode: Vec<String>,
    /// Explicit display order by column id or name. Empty means no ordering.
    pub column_order: Vec<String>,
    /// Kind-specific configuration by column id.
    pub column_config: HashMap<String, TypeConfig>,
    /// Initial overrides.
    pub overrides: ColumnOverrides,
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from JSON text.
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a selection mode.
    pub fn selection_mode(mut self, mode: impl Into<String>) -> Self {
        self.selection_mode.push(mode.into());
        self
    }

    pub fn column_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Set the kind-specific configuration of a column.
    pub fn column(mut self, id: impl Into<String>, config: TypeConfig) -> Self {
        self.column_config.insert(id.into(), config);
        self
    }

    pub fn overrides(mut self, overrides: ColumnOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn selection_modes(&self) -> SelectionModes {
        SelectionModes::parse(self.selection_mode.as_slice())
    }
}
