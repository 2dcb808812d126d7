//! Tests for column overrides and effective visibility.

use datagrid_lib::column::{ColumnDefinition, ColumnKindTag};
use datagrid_lib::overlay::{
    ColumnOverride, ColumnOverrides, hide_column, is_effectively_hidden, set_column_format,
    set_column_width, show_column, visible_columns,
};

fn columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::new("_index", ColumnKindTag::Number).index(),
        ColumnDefinition::new("colA", ColumnKindTag::Text),
        ColumnDefinition::new("colB", ColumnKindTag::Text),
        ColumnDefinition::new("col_c", ColumnKindTag::Number).name("price"),
    ]
}

#[test]
fn test_merge_preserves_other_fields() {
    let overrides = set_column_width(&ColumnOverrides::new(), "colA", 120.0);
    let overrides = set_column_format(&overrides, "colA", "%.2f");
    let hidden = hide_column(&overrides, "colA");

    assert_eq!(
        hidden.get("colA"),
        Some(&ColumnOverride {
            hidden: Some(true),
            width: Some(120.0),
            format: Some("%.2f".into()),
        })
    );

    let shown = show_column(&hidden, "colA");
    let entry = shown.get("colA").unwrap();
    assert_eq!(entry.hidden, Some(false));
    assert_eq!(entry.width, Some(120.0));
    assert_eq!(entry.format.as_deref(), Some("%.2f"));
}

#[test]
fn test_mutators_leave_input_untouched() {
    let before = ColumnOverrides::new();
    let after = hide_column(&before, "colA");
    assert!(before.is_empty());
    assert_eq!(after.get("colA").and_then(|o| o.hidden), Some(true));
}

#[test]
fn test_hidden_override() {
    let columns = columns();
    let overrides = hide_column(&ColumnOverrides::new(), "colB");

    assert!(is_effectively_hidden(&columns[2], &overrides, &[]));
    assert!(!is_effectively_hidden(&columns[1], &overrides, &[]));
}

#[test]
fn test_order_hides_unlisted_columns() {
    let columns = columns();
    let order = vec!["colA".to_string()];
    let overrides = show_column(&ColumnOverrides::new(), "colB");

    assert!(is_effectively_hidden(&columns[2], &overrides, &order));
    assert!(!is_effectively_hidden(&columns[1], &overrides, &order));
    // Index columns are never hidden by the order.
    assert!(!is_effectively_hidden(&columns[0], &overrides, &order));
}

#[test]
fn test_order_matches_by_name() {
    let columns = columns();
    let order = vec!["price".to_string()];
    assert!(!is_effectively_hidden(&columns[3], &ColumnOverrides::new(), &order));
}

#[test]
fn test_hidden_override_beats_order() {
    let columns = columns();
    let order = vec!["colA".to_string()];
    let overrides = hide_column(&ColumnOverrides::new(), "colA");
    assert!(is_effectively_hidden(&columns[1], &overrides, &order));
}

#[test]
fn test_visible_columns_without_order() {
    let overrides = hide_column(&ColumnOverrides::new(), "colA");
    assert_eq!(visible_columns(&columns(), &overrides, &[]), vec![0, 2, 3]);
}

#[test]
fn test_visible_columns_follow_order() {
    let order = vec!["price".to_string(), "colA".to_string(), "missing".to_string()];
    assert_eq!(
        visible_columns(&columns(), &ColumnOverrides::new(), &order),
        vec![0, 3, 1]
    );
}

#[test]
fn test_overrides_json_shape() {
    let overrides = set_column_width(&hide_column(&ColumnOverrides::new(), "colA"), "colB", 80.0);
    let json = serde_json::to_value(&overrides).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "colA": { "hidden": true },
            "colB": { "width": 80.0 },
        })
    );
}
