//! Shared test utilities for integration tests

#![allow(dead_code)]

use std::collections::BTreeSet;

use cubescope::{parser, ExtractOptions};
use serde_json::Value;

/// Load a payload fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> Value {
    let path = format!("tests/test_data/{}", name);
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Load an options fixture from the tests/test_data directory
pub fn load_options(name: &str) -> ExtractOptions {
    let path = format!("tests/test_data/{}", name);
    parser::parse_options_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load options {}: {}", name, e))
}

/// Build an owned string set for comparisons
pub fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// First-dot prefixes of a member set
pub fn prefixes(members: &BTreeSet<String>) -> BTreeSet<String> {
    members
        .iter()
        .map(|m| m.split('.').next().unwrap_or_default().to_string())
        .collect()
}
