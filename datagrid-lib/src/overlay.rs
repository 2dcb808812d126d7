//! Per-column overrides and effective visibility/order.
//!
//! Overrides are plain values: every mutator takes the current
//! [`ColumnOverrides`] and returns the next one. The owner replaces its copy
//! and, for hide/show, clears the stale column selection (see
//! [`DataGrid::hide_column`](crate::DataGrid::hide_column)).
//!
//! A column is effectively hidden when its override sets `hidden: true`, or
//! when a column order is configured, the column is not an index column and
//! neither its id nor its name is listed in the order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::ColumnDefinition;

/// User overrides for one column. Unset fields leave the column's own
/// setting in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ColumnOverride {
    /// Overlay the fields set in `patch` onto `self`.
    fn merge(mut self, patch: ColumnOverride) -> Self {
        if patch.hidden.is_some() {
            self.hidden = patch.hidden;
        }
        if patch.width.is_some() {
            self.width = patch.width;
        }
        if patch.format.is_some() {
            self.format = patch.format;
        }
        self
    }
}

/// Overrides keyed by column id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnOverrides(BTreeMap<String, ColumnOverride>);

impl ColumnOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&ColumnOverride> {
        self.0.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ColumnOverride)> {
        self.0.iter()
    }

    /// Return a copy with `patch` merged into the entry for `id`.
    pub fn merged(&self, id: &str, patch: ColumnOverride) -> Self {
        let mut next = self.0.clone();
        let entry = next.remove(id).unwrap_or_default().merge(patch);
        next.insert(id.to_string(), entry);
        Self(next)
    }

    fn hidden(&self, id: &str) -> Option<bool> {
        self.get(id).and_then(|o| o.hidden)
    }
}

impl FromIterator<(String, ColumnOverride)> for ColumnOverrides {
    fn from_iter<I: IntoIterator<Item = (String, ColumnOverride)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub fn hide_column(overrides: &ColumnOverrides, id: &str) -> ColumnOverrides {
    set_hidden(overrides, id, true)
}

pub fn show_column(overrides: &ColumnOverrides, id: &str) -> ColumnOverrides {
    set_hidden(overrides, id, false)
}

fn set_hidden(overrides: &ColumnOverrides, id: &str, hidden: bool) -> ColumnOverrides {
    overrides.merged(
        id,
        ColumnOverride {
            hidden: Some(hidden),
            ..Default::default()
        },
    )
}

pub fn set_column_width(overrides: &ColumnOverrides, id: &str, width: f64) -> ColumnOverrides {
    overrides.merged(
        id,
        ColumnOverride {
            width: Some(width),
            ..Default::default()
        },
    )
}

pub fn set_column_format(
    overrides: &ColumnOverrides,
    id: &str,
    format: impl Into<String>,
) -> ColumnOverrides {
    overrides.merged(
        id,
        ColumnOverride {
            format: Some(format.into()),
            ..Default::default()
        },
    )
}

/// Whether `column_order` lists the column by id or name.
fn is_listed(column: &ColumnDefinition, column_order: &[String]) -> bool {
    column_order
        .iter()
        .any(|entry| *entry == column.id || *entry == column.name)
}

pub fn is_effectively_hidden(
    column: &ColumnDefinition,
    overrides: &ColumnOverrides,
    column_order: &[String],
) -> bool {
    if overrides.hidden(&column.id) == Some(true) {
        return true;
    }
    !column_order.is_empty() && !column.is_index && !is_listed(column, column_order)
}

/// Positions of the visible columns, in display order.
///
/// Without a column order this is the original order minus hidden columns.
/// With one, visible index columns come first, followed by the listed
/// columns in list order.
pub fn visible_columns(
    columns: &[ColumnDefinition],
    overrides: &ColumnOverrides,
    column_order: &[String],
) -> Vec<usize> {
    let visible = |pos: &usize| !is_effectively_hidden(&columns[*pos], overrides, column_order);

    if column_order.is_empty() {
        return (0..columns.len()).filter(visible).collect();
    }

    let mut positions: Vec<usize> = (0..columns.len())
        .filter(|&pos| columns[pos].is_index)
        .filter(visible)
        .collect();

    for entry in column_order {
        let found = columns
            .iter()
            .position(|c| !c.is_index && c.id == *entry)
            .or_else(|| columns.iter().position(|c| !c.is_index && c.name == *entry));
        if let Some(pos) = found {
            if !positions.contains(&pos) && visible(&pos) {
                positions.push(pos);
            }
        }
    }
    positions
}
