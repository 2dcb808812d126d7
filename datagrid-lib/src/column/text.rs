//! Text column kind.

use serde_json::Value;

use crate::cell::{Cell, CellData};

use super::ColumnDefinition;
use super::config::TextConfig;
use super::pattern::{ValidatePattern, char_len, present, to_safe_string};

/// Free-text column with optional length limit and pattern.
#[derive(Debug, Clone)]
pub struct TextColumn {
    definition: ColumnDefinition,
    config: TextConfig,
    validate: ValidatePattern,
}

impl TextColumn {
    pub const IS_EDITABLE_TYPE: bool = true;

    pub fn new(definition: ColumnDefinition, config: TextConfig) -> Self {
        let validate = ValidatePattern::compile(config.validate.as_deref());
        Self {
            definition,
            config,
            validate,
        }
    }

    pub fn definition(&self) -> &ColumnDefinition {
        &self.definition
    }

    pub fn validate_input(&self, data: Option<&Value>) -> bool {
        let Some(data) = present(data) else {
            return !self.definition.is_required;
        };
        let text = to_safe_string(data);

        if self.config.max_chars.is_some_and(|max| char_len(&text) > max) {
            return false;
        }

        self.validate.allows(&text)
    }

    /// Build a text cell. With `validate`, over-long values are cut to
    /// `max_chars` before the pattern is checked.
    pub fn get_cell(&self, data: Option<&Value>, validate: bool) -> Cell {
        if let Some(message) = self.validate.config_error() {
            return Cell::error(message);
        }

        let Some(data) = present(data) else {
            return Cell::missing(CellData::Text { text: None })
                .with_readonly(!self.definition.is_editable);
        };

        let mut text = to_safe_string(data);
        let mut raw = data.clone();
        if validate {
            if let Some(max) = self.config.max_chars {
                if char_len(&text) > max {
                    text = text.chars().take(max).collect();
                    raw = Value::String(text.clone());
                }
            }
            if !self.validate.allows(&text) {
                return Cell::error("Invalid input.");
            }
        }

        Cell::new(
            CellData::Text {
                text: Some(text.clone()),
            },
            Some(raw),
            text,
        )
        .with_readonly(!self.definition.is_editable)
    }

    pub fn get_cell_value(&self, cell: &Cell) -> Option<Value> {
        match &cell.data {
            CellData::Text { text } => text.clone().map(Value::String),
            _ => None,
        }
    }
}
