//! Cell representation produced by column kinds.
//!
//! A [`Cell`] is what the rendering surface draws for one (row, column)
//! position. It is built by [`ColumnKind::get_cell`](crate::column::ColumnKind::get_cell)
//! from a raw value and carries both the typed payload and the flags the
//! renderer and the edit flow need.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Horizontal alignment for cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Payload of a link cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkCell {
    /// Target of the link, `None` for missing values.
    pub href: Option<String>,
    /// Text (or icon name) shown instead of the href.
    pub display_text: String,
    /// The display text names an icon rather than literal text.
    ///
    /// Icon cells are drawn with the icon font's styling, so the renderer
    /// must not apply the link color to them.
    pub uses_icon: bool,
}

impl LinkCell {
    /// Whether the renderer should skip the link color for this cell.
    pub fn suppresses_link_color(&self) -> bool {
        self.uses_icon
    }
}

/// Kind-tagged cell payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellData {
    Link(LinkCell),
    Text { text: Option<String> },
    Number { value: Option<f64> },
    Checkbox { checked: Option<bool> },
    Object { text: String },
    /// Structurally valid, semantically non-insertable.
    Error { message: String },
}

/// A renderable, typed cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub data: CellData,
    /// Raw value the cell was built from, `None` for missing and error cells.
    pub raw_value: Option<Value>,
    pub display_value: String,
    pub copy_value: String,
    pub is_missing_value: bool,
    pub is_error: bool,
    /// The cell can be opened in an editing overlay.
    pub allow_overlay: bool,
    pub readonly: bool,
    pub content_align: Alignment,
}

impl Cell {
    /// Build a cell for `data` with default flags.
    pub fn new(
        data: CellData,
        raw_value: Option<Value>,
        display_value: impl Into<String>,
    ) -> Self {
        let display_value = display_value.into();
        Self {
            data,
            raw_value,
            copy_value: display_value.clone(),
            display_value,
            is_missing_value: false,
            is_error: false,
            allow_overlay: true,
            readonly: false,
            content_align: Alignment::Left,
        }
    }

    /// Build a missing-value cell.
    pub fn missing(data: CellData) -> Self {
        Self {
            is_missing_value: true,
            copy_value: String::new(),
            ..Self::new(data, None, "")
        }
    }

    /// Build an error cell carrying `message`.
    ///
    /// The input that caused the error is never embedded, so two error cells
    /// with the same message are equal.
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            is_error: true,
            allow_overlay: false,
            readonly: true,
            ..Self::new(
                CellData::Error {
                    message: message.clone(),
                },
                None,
                message,
            )
        }
    }

    /// Error message for error cells.
    pub fn error_message(&self) -> Option<&str> {
        match &self.data {
            CellData::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.content_align = align;
        self
    }

    pub fn with_overlay(mut self, allow: bool) -> Self {
        self.allow_overlay = allow;
        self
    }

    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// A click on a cell, as reported by the rendering surface.
#[derive(Debug, Clone, Default)]
pub struct CellClickEvent {
    pub row: usize,
    pub column_id: String,
    default_prevented: bool,
}

impl CellClickEvent {
    pub fn new(row: usize, column_id: impl Into<String>) -> Self {
        Self {
            row,
            column_id: column_id.into(),
            default_prevented: false,
        }
    }

    /// Suppress the surface's default action for this click.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
