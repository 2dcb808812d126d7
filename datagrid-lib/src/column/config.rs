//! Kind-specific column configuration.
//!
//! Parsed once when a [`ColumnKind`](super::ColumnKind) is built. The JSON
//! shape is tagged by `type`:
//!
//! ```json
//! { "type": "link", "max_chars": 100, "validate": "^https://.*", "display_text": "Open" }
//! ```

use serde::{Deserialize, Serialize};

use super::ColumnKindTag;

/// Configuration for link columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub max_chars: Option<usize>,
    /// Pattern every committed href must match.
    pub validate: Option<String>,
    /// Literal text, a display-extraction regex, or an icon reference.
    pub display_text: Option<String>,
}

/// Configuration for text columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub max_chars: Option<usize>,
    pub validate: Option<String>,
}

/// Configuration for number columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberConfig {
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub step: Option<f64>,
}

/// Configuration for one column, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeConfig {
    Link(LinkConfig),
    Text(TextConfig),
    Number(NumberConfig),
    Checkbox,
    Object,
}

impl TypeConfig {
    /// Kind this configuration applies to.
    pub fn kind(&self) -> ColumnKindTag {
        match self {
            Self::Link(_) => ColumnKindTag::Link,
            Self::Text(_) => ColumnKindTag::Text,
            Self::Number(_) => ColumnKindTag::Number,
            Self::Checkbox => ColumnKindTag::Checkbox,
            Self::Object => ColumnKindTag::Object,
        }
    }
}
