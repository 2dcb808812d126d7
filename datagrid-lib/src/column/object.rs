//! Read-only fallback kind for values without a dedicated column kind.

use serde_json::Value;

use crate::cell::{Cell, CellData};

use super::ColumnDefinition;
use super::pattern::{present, to_safe_string};

#[derive(Debug, Clone)]
pub struct ObjectColumn {
    definition: ColumnDefinition,
}

impl ObjectColumn {
    pub const IS_EDITABLE_TYPE: bool = false;

    pub fn new(definition: ColumnDefinition) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &ColumnDefinition {
        &self.definition
    }

    pub fn validate_input(&self, _data: Option<&Value>) -> bool {
        true
    }

    pub fn get_cell(&self, data: Option<&Value>, _validate: bool) -> Cell {
        let cell = match present(data) {
            None => Cell::missing(CellData::Object {
                text: String::new(),
            }),
            Some(data) => {
                let text = to_safe_string(data);
                Cell::new(CellData::Object { text: text.clone() }, Some(data.clone()), text)
            }
        };
        cell.with_readonly(true)
    }

    pub fn get_cell_value(&self, cell: &Cell) -> Option<Value> {
        if cell.is_missing_value || cell.is_error {
            return None;
        }
        cell.raw_value.clone()
    }
}
