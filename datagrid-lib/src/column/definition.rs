//! Column identity and flags.

use serde::{Deserialize, Serialize};

/// Variant tag selecting a column's validation and cell-construction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKindTag {
    Link,
    Text,
    Number,
    Checkbox,
    /// Read-only fallback for data types without a dedicated kind.
    #[default]
    Object,
}

impl std::fmt::Display for ColumnKindTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Link => "link",
            Self::Text => "text",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// Immutable description of one column.
///
/// Created once per render pass from the data source. `is_hidden` is the
/// flag the data source declared; the effective visibility is computed by
/// the [overlay](crate::overlay).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDefinition {
    /// Stable identifier.
    pub id: String,
    /// Name of the underlying data field.
    pub name: String,
    /// Header text.
    pub title: String,
    pub kind: ColumnKindTag,
    pub is_index: bool,
    pub is_pinned: bool,
    pub is_editable: bool,
    pub is_hidden: bool,
    pub is_required: bool,
}

impl ColumnDefinition {
    /// Create a column whose name and title default to `id`.
    pub fn new(id: impl Into<String>, kind: ColumnKindTag) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            title: id.clone(),
            id,
            kind,
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Mark as an index column. Index columns are pinned and never selectable.
    pub fn index(mut self) -> Self {
        self.is_index = true;
        self.is_pinned = true;
        self
    }

    pub fn pinned(mut self) -> Self {
        self.is_pinned = true;
        self
    }

    pub fn editable(mut self) -> Self {
        self.is_editable = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }
}
