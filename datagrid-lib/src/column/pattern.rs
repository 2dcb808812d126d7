//! Pattern compilation and value coercion shared by the column kinds.

use regex::{Regex, RegexBuilder};
use serde_json::Value;

/// Compiled `validate` setting of a column.
#[derive(Debug, Clone)]
pub enum ValidatePattern {
    /// No pattern configured.
    None,
    Compiled(Regex),
    /// The pattern failed to compile; holds the diagnostic shown in every cell.
    Invalid(String),
}

impl ValidatePattern {
    /// Compile an optional `validate` pattern.
    ///
    /// Compilation failures are captured, never returned as errors.
    pub fn compile(pattern: Option<&str>) -> Self {
        let Some(pattern) = pattern else {
            return Self::None;
        };
        match build_regex(pattern) {
            Ok(regex) => Self::Compiled(regex),
            Err(e) => {
                log::warn!("Invalid validate regex {:?}: {}", pattern, e);
                Self::Invalid(format!("Invalid validate regex: {}.\nError: {}", pattern, e))
            }
        }
    }

    /// Configuration error message, if the pattern failed to compile.
    pub fn config_error(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            _ => None,
        }
    }

    /// Whether `value` passes the pattern. Missing or broken patterns pass.
    pub fn allows(&self, value: &str) -> bool {
        match self {
            Self::Compiled(regex) => regex.is_match(value),
            Self::None | Self::Invalid(_) => true,
        }
    }
}

/// Compile with unicode and dot-matches-newline semantics.
pub fn build_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .unicode(true)
        .dot_matches_new_line(true)
        .build()
}

/// Render any raw value as a string without failing.
///
/// Strings are returned as-is, null becomes empty, scalars use their JSON
/// text and containers are serialized compactly.
pub fn to_safe_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Treat JSON null and absence alike.
pub fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Length in characters.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_safe_string_forms() {
        assert_eq!(to_safe_string(&json!(null)), "");
        assert_eq!(to_safe_string(&json!("abc")), "abc");
        assert_eq!(to_safe_string(&json!(12)), "12");
        assert_eq!(to_safe_string(&json!(true)), "true");
        assert_eq!(to_safe_string(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_dot_matches_newline() {
        let regex = build_regex("^a.b$").unwrap();
        assert!(regex.is_match("a\nb"));
    }

    #[test]
    fn test_invalid_pattern_message() {
        let pattern = ValidatePattern::compile(Some("(unclosed"));
        let message = pattern.config_error().unwrap();
        assert!(message.starts_with("Invalid validate regex: (unclosed.\nError: "));
        assert!(pattern.allows("anything"));
    }
}
