//! Member and cube extraction
//!
//! Member names are collected into a `BTreeSet`, so results are
//! deduplicated and iterate in a stable order. Callers should not rely on
//! that order carrying any meaning.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use crate::query::{json_type, QueryKey};
use super::error::ExtractError;
use super::options::ExtractOptions;
use super::walk::{payload_object, Walker};

/// Fully-qualified names of every member the payload references
///
/// Walks `dimensions`, `measures`, `filters`, `segments` and
/// `timeDimensions`, skipping any that are absent and ignoring every other
/// key. Malformed elements are logged and skipped.
pub fn extract_members(payload: &Value) -> Result<BTreeSet<String>, ExtractError> {
    extract_members_with(payload, &ExtractOptions::default())
}

/// [`extract_members`] with explicit options
pub fn extract_members_with(
    payload: &Value,
    options: &ExtractOptions,
) -> Result<BTreeSet<String>, ExtractError> {
    let mut members = BTreeSet::new();
    let Some(object) = payload_object(payload)? else {
        return Ok(members);
    };

    let walker = Walker::new(options);
    for &key in &options.query_keys {
        let Some(items) = walker.field_items(object, key)? else {
            continue;
        };
        for (index, item) in items.iter().enumerate() {
            let path = format!("{key}[{index}]");
            match key {
                QueryKey::Dimensions | QueryKey::Measures | QueryKey::Segments => {
                    walker.member_ref(item, &path, &mut members)?
                }
                QueryKey::Filters => walker.filter_item(item, &path, &mut members)?,
                QueryKey::TimeDimensions => walker.time_dimension(item, &path, &mut members)?,
            }
        }
    }

    debug!(members = members.len(), "extracted query members");
    Ok(members)
}

/// Members referenced by one filter node and everything nested under it
///
/// The node must be an object; nested malformed nodes are skipped.
pub fn extract_members_from_filter(node: &Value) -> Result<BTreeSet<String>, ExtractError> {
    extract_members_from_filter_with(node, &ExtractOptions::default())
}

/// [`extract_members_from_filter`] with explicit options
pub fn extract_members_from_filter_with(
    node: &Value,
    options: &ExtractOptions,
) -> Result<BTreeSet<String>, ExtractError> {
    if !node.is_object() {
        return Err(ExtractError::TypeMismatch {
            path: "filter".to_string(),
            expected: "filter object",
            found: json_type(node),
        });
    }
    let mut members = BTreeSet::new();
    Walker::new(options).parse_filter(node, "filter")?.collect_members(&mut members);
    Ok(members)
}

/// Names of every cube the payload references
///
/// A cube name is the text before the first '.' of a member name. A member
/// without any '.' is taken to be its own cube.
pub fn extract_cubes(payload: &Value) -> Result<BTreeSet<String>, ExtractError> {
    extract_cubes_with(payload, &ExtractOptions::default())
}

/// [`extract_cubes`] with explicit options
///
/// In strict mode a member without a '.' fails with
/// [`ExtractError::MissingSeparator`].
pub fn extract_cubes_with(
    payload: &Value,
    options: &ExtractOptions,
) -> Result<BTreeSet<String>, ExtractError> {
    let members = extract_members_with(payload, options)?;
    let mut cubes = BTreeSet::new();
    for member in &members {
        let cube = match member.split_once('.') {
            Some((cube, _)) => cube,
            None if options.is_strict() => {
                return Err(ExtractError::MissingSeparator {
                    member: member.clone(),
                })
            }
            None => member.as_str(),
        };
        cubes.insert(cube.to_string());
    }

    debug!(cubes = cubes.len(), "extracted query cubes");
    Ok(cubes)
}

/// Members referenced by `filters` and `segments`
///
/// Pushdown members are replaced by the members their SQL references, so a
/// pushed-down segment reports the columns it actually filters on.
pub fn extract_filters_members(payload: &Value) -> Result<BTreeSet<String>, ExtractError> {
    let options = ExtractOptions::default()
        .with_query_keys([QueryKey::Filters, QueryKey::Segments])
        .with_pushdown_expressions(true);
    extract_members_with(payload, &options)
}
