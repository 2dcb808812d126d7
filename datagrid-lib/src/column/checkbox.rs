//! Checkbox column kind.

use serde_json::Value;

use crate::cell::{Alignment, Cell, CellData};

use super::ColumnDefinition;
use super::pattern::present;

const NOT_A_BOOLEAN: &str = "The value cannot be interpreted as boolean.";

#[derive(Debug, Clone)]
pub struct CheckboxColumn {
    definition: ColumnDefinition,
}

impl CheckboxColumn {
    pub const IS_EDITABLE_TYPE: bool = true;

    pub fn new(definition: ColumnDefinition) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &ColumnDefinition {
        &self.definition
    }

    pub fn validate_input(&self, data: Option<&Value>) -> bool {
        match present(data) {
            None => !self.definition.is_required,
            Some(data) => parse_bool(data).is_some(),
        }
    }

    pub fn get_cell(&self, data: Option<&Value>, _validate: bool) -> Cell {
        let Some(data) = present(data) else {
            return self.style(Cell::missing(CellData::Checkbox { checked: None }));
        };
        let Some(checked) = parse_bool(data) else {
            return Cell::error(NOT_A_BOOLEAN);
        };
        let cell = Cell::new(
            CellData::Checkbox {
                checked: Some(checked),
            },
            Some(Value::Bool(checked)),
            checked.to_string(),
        );
        // Toggled in place, never through the overlay editor.
        self.style(cell).with_overlay(false)
    }

    pub fn get_cell_value(&self, cell: &Cell) -> Option<Value> {
        match &cell.data {
            CellData::Checkbox { checked } => checked.map(Value::Bool),
            _ => None,
        }
    }

    fn style(&self, cell: Cell) -> Cell {
        cell.with_align(Alignment::Center)
            .with_readonly(!self.definition.is_editable)
    }
}

fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_f64() {
            Some(v) if v == 1.0 => Some(true),
            Some(v) if v == 0.0 => Some(false),
            _ => None,
        },
        _ => None,
    }
}
