//! Tests for the link column kind.

use std::cell::RefCell;

use datagrid_lib::cell::{Alignment, CellClickEvent, CellData, EventResult, LinkCell};
use datagrid_lib::column::{
    ColumnDefinition, ColumnKind, ColumnKindTag, DisplayMode, LinkColumn, LinkConfig, LinkOpener,
    TypeConfig,
};
use serde_json::{Value, json};

fn link_column(config: LinkConfig) -> LinkColumn {
    LinkColumn::new(ColumnDefinition::new("url", ColumnKindTag::Link).editable(), config)
}

#[derive(Default)]
struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}

// =============================================================================
// Configuration errors
// =============================================================================

#[test]
fn test_invalid_validate_regex_returns_identical_error_cells() {
    let column = link_column(LinkConfig {
        validate: Some("[unclosed".into()),
        ..Default::default()
    });

    let inputs: [Option<Value>; 4] = [
        None,
        Some(json!("")),
        Some(json!("https://example.com")),
        Some(json!(null)),
    ];
    let cells: Vec<_> = inputs
        .iter()
        .map(|input| column.get_cell(input.as_ref(), true))
        .collect();

    for cell in &cells {
        assert!(cell.is_error);
        assert_eq!(cell, &cells[0]);
    }
    let message = cells[0].error_message().unwrap();
    assert!(message.starts_with("Invalid validate regex: [unclosed.\nError: "));

    // Same cell without validation requested.
    assert_eq!(column.get_cell(Some(&json!("x")), false), cells[0]);
}

#[test]
fn test_invalid_display_regex_falls_back_to_literal() {
    let column = link_column(LinkConfig {
        display_text: Some("open (here".into()),
        ..Default::default()
    });
    // No parentheses pair means literal text, no regex attempt.
    assert!(matches!(column.compiled().display, DisplayMode::Literal(_)));

    let column = link_column(LinkConfig {
        display_text: Some("[bad (regex)".into()),
        ..Default::default()
    });
    assert!(matches!(column.compiled().display, DisplayMode::Literal(_)));

    let cell = column.get_cell(Some(&json!("https://a.io")), true);
    assert!(!cell.is_error);
    assert_eq!(cell.display_value, "[bad (regex)");
}

// =============================================================================
// validate_input
// =============================================================================

#[test]
fn test_validation_order() {
    let column = link_column(LinkConfig {
        max_chars: Some(5),
        validate: Some("^a.*".into()),
        ..Default::default()
    });

    assert!(!column.validate_input(Some(&json!("abcdef"))));
    assert!(!column.validate_input(Some(&json!("b"))));
    assert!(column.validate_input(Some(&json!("a"))));
}

#[test]
fn test_missing_value_valid_unless_required() {
    let optional = link_column(LinkConfig::default());
    assert!(optional.validate_input(None));
    assert!(optional.validate_input(Some(&Value::Null)));

    let required = LinkColumn::new(
        ColumnDefinition::new("url", ColumnKindTag::Link).required(),
        LinkConfig::default(),
    );
    assert!(!required.validate_input(None));
}

#[test]
fn test_max_chars_counts_characters() {
    let column = link_column(LinkConfig {
        max_chars: Some(3),
        ..Default::default()
    });
    assert!(column.validate_input(Some(&json!("äöü"))));
    assert!(!column.validate_input(Some(&json!("äöüß"))));
}

// =============================================================================
// get_cell
// =============================================================================

#[test]
fn test_missing_value_cell() {
    let column = link_column(LinkConfig {
        max_chars: Some(1),
        ..Default::default()
    });
    let cell = column.get_cell(None, true);

    assert!(cell.is_missing_value);
    assert!(!cell.is_error);
    assert_eq!(cell.display_value, "");
    assert_eq!(column.get_cell_value(&cell), None);
}

#[test]
fn test_invalid_input_cell() {
    let column = link_column(LinkConfig {
        validate: Some("^https://".into()),
        ..Default::default()
    });

    let cell = column.get_cell(Some(&json!("ftp://files")), true);
    assert!(cell.is_error);
    assert_eq!(cell.error_message(), Some("Invalid input."));
    assert_eq!(column.get_cell_value(&cell), None);

    // Without validation the same value renders normally.
    let cell = column.get_cell(Some(&json!("ftp://files")), false);
    assert!(!cell.is_error);
    assert_eq!(cell.display_value, "ftp://files");
}

#[test]
fn test_display_defaults_to_href() {
    let column = link_column(LinkConfig::default());
    let cell = column.get_cell(Some(&json!("https://example.com")), false);

    assert_eq!(cell.display_value, "https://example.com");
    assert_eq!(cell.copy_value, "https://example.com");
    assert_eq!(
        column.get_cell_value(&cell),
        Some(json!("https://example.com"))
    );
}

#[test]
fn test_literal_display_text() {
    let column = link_column(LinkConfig {
        display_text: Some("Open".into()),
        ..Default::default()
    });
    let cell = column.get_cell(Some(&json!("https://example.com")), false);

    assert_eq!(cell.display_value, "Open");
    assert_eq!(cell.copy_value, "https://example.com");
}

#[test]
fn test_display_regex_extracts_capture_group() {
    let column = link_column(LinkConfig {
        display_text: Some("https://(.*?)\\.example\\.com".into()),
        ..Default::default()
    });

    let cell = column.get_cell(Some(&json!("https://docs.example.com/page")), false);
    assert_eq!(cell.display_value, "docs");

    let cell = column.get_cell(Some(&json!("https://other.org")), false);
    assert_eq!(cell.display_value, "");
}

#[test]
fn test_icon_display_mode() {
    let column = link_column(LinkConfig {
        display_text: Some(":material/open_in_new:".into()),
        ..Default::default()
    });
    assert!(column.compiled().display.uses_icon());

    let cell = column.get_cell(Some(&json!("https://example.com")), false);
    match &cell.data {
        CellData::Link(link) => {
            assert_eq!(link.display_text, "open_in_new");
            assert!(link.uses_icon);
            assert!(link.suppresses_link_color());
        }
        other => panic!("expected link cell, got {:?}", other),
    }
    assert!(!cell.allow_overlay);
    assert_eq!(cell.content_align, Alignment::Center);
}

#[test]
fn test_non_string_href_uses_safe_string() {
    let column = link_column(LinkConfig::default());
    let cell = column.get_cell(Some(&json!(42)), false);
    assert_eq!(cell.display_value, "42");
    assert_eq!(column.get_cell_value(&cell), Some(json!("42")));
}

#[test]
fn test_readonly_follows_definition() {
    let column = LinkColumn::new(
        ColumnDefinition::new("url", ColumnKindTag::Link),
        LinkConfig::default(),
    );
    assert!(column.get_cell(Some(&json!("https://x.com")), false).readonly);
}

// =============================================================================
// Clicks
// =============================================================================

#[test]
fn test_www_href_normalized_on_click() {
    let link = LinkCell {
        href: Some("www.example.com".into()),
        display_text: String::new(),
        uses_icon: false,
    };
    assert!(!link.suppresses_link_color());
    let opener = RecordingOpener::default();
    let mut event = CellClickEvent::new(0, "url");

    assert_eq!(link.on_click(&mut event, &opener), EventResult::Consumed);
    assert!(event.is_default_prevented());
    assert_eq!(*opener.opened.borrow(), vec!["https://www.example.com".to_string()]);
}

#[test]
fn test_absolute_href_unchanged() {
    let link = LinkCell {
        href: Some("https://x.com".into()),
        display_text: String::new(),
        uses_icon: false,
    };
    assert_eq!(link.target_url().as_deref(), Some("https://x.com"));
}

#[test]
fn test_missing_href_click_ignored() {
    let link = LinkCell {
        href: None,
        display_text: String::new(),
        uses_icon: false,
    };
    let opener = RecordingOpener::default();
    let mut event = CellClickEvent::new(0, "url");

    assert_eq!(link.on_click(&mut event, &opener), EventResult::Ignored);
    assert!(!event.is_default_prevented());
    assert!(opener.opened.borrow().is_empty());
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn test_kind_dispatch_uses_link_config() {
    let config = TypeConfig::Link(LinkConfig {
        display_text: Some("Go".into()),
        ..Default::default()
    });
    let kind = ColumnKind::from_definition(
        ColumnDefinition::new("url", ColumnKindTag::Link),
        Some(&config),
    );

    assert!(matches!(kind, ColumnKind::Link(_)));
    assert!(kind.is_editable_type());
    assert_eq!(
        kind.get_cell(Some(&json!("https://x.com")), false).display_value,
        "Go"
    );
}

#[test]
fn test_link_config_from_json() {
    let config: TypeConfig = serde_json::from_value(json!({
        "type": "link",
        "max_chars": 10,
        "validate": "^https://"
    }))
    .unwrap();

    assert_eq!(
        config,
        TypeConfig::Link(LinkConfig {
            max_chars: Some(10),
            validate: Some("^https://".into()),
            display_text: None,
        })
    );
}
