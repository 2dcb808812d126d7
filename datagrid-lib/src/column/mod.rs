//! Column definitions and column kinds.
//!
//! Every column kind exposes the same contract:
//! - `get_cell(raw, validate)` builds a renderable [`Cell`];
//! - `get_cell_value(cell)` extracts the raw value back out of a cell;
//! - `validate_input(raw)` checks a value before it is committed;
//! - `is_editable_type()` reports whether the kind supports editing at all.
//!
//! [`ColumnKind`] is a closed enum over the kinds, so adding a kind is
//! checked by every `match` in this module.
//!
//! # Example
//!
//! ```ignore
//! let definition = ColumnDefinition::new("homepage", ColumnKindTag::Link).editable();
//! let config = TypeConfig::Link(LinkConfig {
//!     display_text: Some(":material/open_in_new:".into()),
//!     ..Default::default()
//! });
//! let kind = ColumnKind::from_definition(definition, Some(&config));
//! let cell = kind.get_cell(Some(&json!("www.example.com")), false);
//! ```

mod checkbox;
mod config;
mod definition;
mod link;
mod number;
mod object;
mod pattern;
mod text;

pub use checkbox::CheckboxColumn;
pub use config::{LinkConfig, NumberConfig, TextConfig, TypeConfig};
pub use definition::{ColumnDefinition, ColumnKindTag};
pub use link::{CompiledLinkConfig, DisplayMode, LinkColumn, LinkOpener, SystemOpener};
pub use number::NumberColumn;
pub use object::ObjectColumn;
pub use pattern::{ValidatePattern, to_safe_string};
pub use text::TextColumn;

use serde_json::Value;

use crate::cell::Cell;

/// A column definition bound to its kind-specific behavior.
#[derive(Debug, Clone)]
pub enum ColumnKind {
    Link(LinkColumn),
    Text(TextColumn),
    Number(NumberColumn),
    Checkbox(CheckboxColumn),
    Object(ObjectColumn),
}

impl ColumnKind {
    /// Build the kind named by `definition.kind`.
    ///
    /// A `config` of another kind is ignored and the kind's defaults apply.
    pub fn from_definition(definition: ColumnDefinition, config: Option<&TypeConfig>) -> Self {
        if let Some(config) = config {
            if config.kind() != definition.kind {
                log::warn!(
                    "Column '{}' is a {} column, ignoring {} configuration",
                    definition.id,
                    definition.kind,
                    config.kind()
                );
            }
        }
        let config = config.filter(|c| c.kind() == definition.kind);

        match definition.kind {
            ColumnKindTag::Link => {
                let config = match config {
                    Some(TypeConfig::Link(c)) => c.clone(),
                    _ => LinkConfig::default(),
                };
                Self::Link(LinkColumn::new(definition, config))
            }
            ColumnKindTag::Text => {
                let config = match config {
                    Some(TypeConfig::Text(c)) => c.clone(),
                    _ => TextConfig::default(),
                };
                Self::Text(TextColumn::new(definition, config))
            }
            ColumnKindTag::Number => {
                let config = match config {
                    Some(TypeConfig::Number(c)) => c.clone(),
                    _ => NumberConfig::default(),
                };
                Self::Number(NumberColumn::new(definition, config))
            }
            ColumnKindTag::Checkbox => Self::Checkbox(CheckboxColumn::new(definition)),
            ColumnKindTag::Object => Self::Object(ObjectColumn::new(definition)),
        }
    }

    pub fn definition(&self) -> &ColumnDefinition {
        match self {
            Self::Link(c) => c.definition(),
            Self::Text(c) => c.definition(),
            Self::Number(c) => c.definition(),
            Self::Checkbox(c) => c.definition(),
            Self::Object(c) => c.definition(),
        }
    }

    pub fn kind(&self) -> ColumnKindTag {
        self.definition().kind
    }

    /// Whether this kind supports editing at all.
    pub fn is_editable_type(&self) -> bool {
        match self {
            Self::Link(_) => LinkColumn::IS_EDITABLE_TYPE,
            Self::Text(_) => TextColumn::IS_EDITABLE_TYPE,
            Self::Number(_) => NumberColumn::IS_EDITABLE_TYPE,
            Self::Checkbox(_) => CheckboxColumn::IS_EDITABLE_TYPE,
            Self::Object(_) => ObjectColumn::IS_EDITABLE_TYPE,
        }
    }

    /// Build the cell for `data`. `None` and JSON null are missing values.
    pub fn get_cell(&self, data: Option<&Value>, validate: bool) -> Cell {
        match self {
            Self::Link(c) => c.get_cell(data, validate),
            Self::Text(c) => c.get_cell(data, validate),
            Self::Number(c) => c.get_cell(data, validate),
            Self::Checkbox(c) => c.get_cell(data, validate),
            Self::Object(c) => c.get_cell(data, validate),
        }
    }

    /// Raw value stored in `cell`, `None` for missing and error cells.
    pub fn get_cell_value(&self, cell: &Cell) -> Option<Value> {
        match self {
            Self::Link(c) => c.get_cell_value(cell),
            Self::Text(c) => c.get_cell_value(cell),
            Self::Number(c) => c.get_cell_value(cell),
            Self::Checkbox(c) => c.get_cell_value(cell),
            Self::Object(c) => c.get_cell_value(cell),
        }
    }

    pub fn validate_input(&self, data: Option<&Value>) -> bool {
        match self {
            Self::Link(c) => c.validate_input(data),
            Self::Text(c) => c.validate_input(data),
            Self::Number(c) => c.validate_input(data),
            Self::Checkbox(c) => c.validate_input(data),
            Self::Object(c) => c.validate_input(data),
        }
    }
}
