//! Integration tests for cube extraction
//!
//! Cubes are the first segment of every member referenced by a payload.

mod common;

use common::{load_fixture, set};
use cubescope::{extract_cubes, extract_cubes_with, ExtractError, ExtractOptions};
use serde_json::json;

#[test]
fn test_regression_payload() {
    let payload = json!({
        "dimensions": ["test_a.city", "test_a.country", "test_a.state"],
        "measures": ["test_b.count"],
        "filters": [
            {"member": "test_a.country", "operator": "equals", "values": ["US"]}
        ]
    });

    assert_eq!(extract_cubes(&payload).unwrap(), set(&["test_a", "test_b"]));
}

#[test]
fn test_all_fields() {
    let payload = load_fixture("all_fields.json");
    assert_eq!(
        extract_cubes(&payload).unwrap(),
        set(&["test_a", "test_b", "test_c", "test_d"])
    );
}

#[test]
fn test_extra_keys_ignored() {
    // limit, offset, order and timezone sit alongside the member fields
    let payload = load_fixture("stories.json");
    assert_eq!(extract_cubes(&payload).unwrap(), set(&["stories"]));
}

#[test]
fn test_complex_boolean_logic() {
    let payload = load_fixture("boolean_filters.json");
    assert_eq!(
        extract_cubes(&payload).unwrap(),
        set(&["test_a", "test_b", "test_c", "test_d"])
    );
}

#[test]
fn test_pushdown_measures() {
    let payload = load_fixture("pushdown_measures.json");
    assert_eq!(
        extract_cubes(&payload).unwrap(),
        set(&["test_a", "test_b", "test_c"])
    );
}

#[test]
fn test_single_field_payloads() {
    let cases = [
        (json!({"dimensions": ["test_a.city", "test_a.country"]}), "test_a"),
        (json!({"measures": ["test_b.count"]}), "test_b"),
        (json!({"filters": [{"member": "test_a.country", "operator": "equals"}]}), "test_a"),
        (json!({"segments": ["test_a.us_segment"]}), "test_a"),
        (json!({"timeDimensions": [{"dimension": "test_c.time", "granularity": "month"}]}), "test_c"),
    ];

    for (payload, cube) in cases {
        assert_eq!(extract_cubes(&payload).unwrap(), set(&[cube]), "payload: {}", payload);
    }
}

#[test]
fn test_empty_and_unknown_keys() {
    assert!(extract_cubes(&json!({})).unwrap().is_empty());

    let payload = json!({"invalid": ["test_a.city", "test_a.country"]});
    assert!(extract_cubes(&payload).unwrap().is_empty());
}

#[test]
fn test_mixed_encoding_in_one_field() {
    let payload = json!({
        "measures": ["stories.count", {"cubeName": "stories", "expressionName": "derived"}]
    });
    assert_eq!(extract_cubes(&payload).unwrap(), set(&["stories"]));
}

#[test]
fn test_strict_rejects_member_without_separator() {
    let payload = json!({"dimensions": ["test_a.city"], "segments": ["everything"]});

    assert_eq!(
        extract_cubes(&payload).unwrap(),
        set(&["test_a", "everything"])
    );

    let err = extract_cubes_with(&payload, &ExtractOptions::strict()).unwrap_err();
    assert!(matches!(err, ExtractError::MissingSeparator { ref member } if member == "everything"));
}
