//! Number column kind.

use serde_json::{Number, Value};

use crate::cell::{Alignment, Cell, CellData};

use super::ColumnDefinition;
use super::config::NumberConfig;
use super::pattern::present;

const NOT_A_NUMBER: &str = "The value cannot be interpreted as a number.";

#[derive(Debug, Clone)]
pub struct NumberColumn {
    definition: ColumnDefinition,
    config: NumberConfig,
}

impl NumberColumn {
    pub const IS_EDITABLE_TYPE: bool = true;

    pub fn new(definition: ColumnDefinition, config: NumberConfig) -> Self {
        Self { definition, config }
    }

    pub fn definition(&self) -> &ColumnDefinition {
        &self.definition
    }

    pub fn validate_input(&self, data: Option<&Value>) -> bool {
        let Some(data) = present(data) else {
            return !self.definition.is_required;
        };
        match parse_number(data) {
            Some(value) => self.in_range(value),
            None => false,
        }
    }

    pub fn get_cell(&self, data: Option<&Value>, validate: bool) -> Cell {
        let Some(data) = present(data) else {
            return self.style(Cell::missing(CellData::Number { value: None }));
        };
        let Some(mut value) = parse_number(data) else {
            return Cell::error(NOT_A_NUMBER);
        };
        if validate {
            if !self.in_range(value) {
                return Cell::error("Invalid input.");
            }
            value = self.snap_to_step(value);
        }
        let cell = Cell::new(
            CellData::Number { value: Some(value) },
            Some(number_value(value)),
            format_number(value),
        );
        self.style(cell)
    }

    pub fn get_cell_value(&self, cell: &Cell) -> Option<Value> {
        match &cell.data {
            CellData::Number { value } => value.map(number_value),
            _ => None,
        }
    }

    fn in_range(&self, value: f64) -> bool {
        self.config.min_value.is_none_or(|min| value >= min)
            && self.config.max_value.is_none_or(|max| value <= max)
    }

    fn snap_to_step(&self, value: f64) -> f64 {
        match self.config.step {
            Some(step) if step > 0.0 => (value / step).round() * step,
            _ => value,
        }
    }

    fn style(&self, cell: Cell) -> Cell {
        cell.with_align(Alignment::Right)
            .with_readonly(!self.definition.is_editable)
    }
}

/// Parse a JSON number or numeric string. Non-finite values are rejected.
fn parse_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::Number(Number::from(value as i64))
    } else {
        Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
    }
}

fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_number_forms() {
        assert_eq!(parse_number(&json!(3)), Some(3.0));
        assert_eq!(parse_number(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(parse_number(&json!("abc")), None);
        assert_eq!(parse_number(&json!(true)), None);
    }

    #[test]
    fn test_integral_values_serialize_without_fraction() {
        assert_eq!(number_value(4.0).to_string(), "4");
        assert_eq!(number_value(4.5).to_string(), "4.5");
    }
}
