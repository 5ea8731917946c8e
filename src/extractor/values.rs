//! Filter members paired with the values they are filtered on

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, trace};

use crate::query::{PushdownMember, QueryKey};
use super::error::ExtractError;
use super::expression::{extract_member_value_from_sql, extract_members_from_expression};
use super::options::ExtractOptions;
use super::walk::{payload_object, Walker};

/// A member referenced by a filter or segment, with the values it is compared to
#[derive(Debug, Clone, PartialEq)]
pub struct MemberValues {
    pub member: String,
    /// Sorted, deduplicated values; `None` when the member carries no values
    pub values: Option<Vec<Value>>,
}

/// Members referenced by `filters` and `segments`, with their filter values
///
/// Filter values come from each comparison's `values`. Pushed-down segments
/// contribute the `${cube.member} = value` comparisons found in their SQL,
/// with backtick quoting removed and integers parsed. Output is ordered by
/// member name.
pub fn extract_filters_members_with_values(
    payload: &Value,
) -> Result<Vec<MemberValues>, ExtractError> {
    extract_filters_members_with_values_with(payload, &ExtractOptions::default())
}

/// [`extract_filters_members_with_values`] with explicit options
///
/// Only the mode is consulted; the walked fields are always `filters` and
/// `segments`.
pub fn extract_filters_members_with_values_with(
    payload: &Value,
    options: &ExtractOptions,
) -> Result<Vec<MemberValues>, ExtractError> {
    let mut collector = ValueCollector::default();
    let Some(object) = payload_object(payload)? else {
        return Ok(Vec::new());
    };
    let walker = Walker::new(options);

    if let Some(filters) = walker.field_items(object, QueryKey::Filters)? {
        for (index, item) in filters.iter().enumerate() {
            let path = format!("filters[{index}]");
            if let Some(pushdown) = PushdownMember::from_value(item) {
                collector.add_member(pushdown.member_name());
                continue;
            }
            walker.parse_filter(item, &path)?.visit_members(&mut |member, values| {
                collector.add_filter_values(member, values);
            });
        }
    }

    if let Some(segments) = walker.field_items(object, QueryKey::Segments)? {
        for (index, segment) in segments.iter().enumerate() {
            if let Some(pushdown) = PushdownMember::from_value(segment) {
                collector.add_pushdown_segment(&pushdown);
            } else if let Some(fields) = segment.as_object() {
                let name = ["name", "expressionName"]
                    .iter()
                    .filter_map(|key| fields.get(*key).and_then(Value::as_str))
                    .find(|name| !name.is_empty());
                match name {
                    Some(name) => collector.add_member(name.to_string()),
                    None => trace!(index, "segment object has no name"),
                }
            } else if let Some(name) = segment.as_str() {
                collector.add_member(name.to_string());
            } else {
                walker.malformed(&format!("segments[{index}]"), "segment name or object", segment)?;
            }
        }
    }

    let result = collector.finish();
    debug!(members = result.len(), "extracted filter members with values");
    Ok(result)
}

#[derive(Debug, Default)]
struct ValueCollector {
    members: BTreeMap<String, Vec<Value>>,
}

impl ValueCollector {
    fn add_member(&mut self, member: String) {
        self.members.entry(member).or_default();
    }

    fn add_value(&mut self, member: String, value: Value) {
        let values = self.members.entry(member).or_default();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    fn add_filter_values(&mut self, member: &str, values: Option<&Value>) {
        match values {
            None | Some(Value::Null) => self.add_member(member.to_string()),
            Some(Value::Array(items)) => {
                self.add_member(member.to_string());
                for item in items {
                    self.add_value(member.to_string(), item.clone());
                }
            }
            Some(scalar) => self.add_value(member.to_string(), scalar.clone()),
        }
    }

    fn add_pushdown_segment(&mut self, pushdown: &PushdownMember<'_>) {
        let sqls: Vec<&str> = pushdown.expressions().chain(pushdown.definition()).collect();
        if sqls.is_empty() {
            self.add_member(pushdown.member_name());
            return;
        }

        let mut found = false;
        for sql in &sqls {
            for (member, raw) in extract_member_value_from_sql(sql) {
                found = true;
                self.add_value(member, parse_sql_value(&raw));
            }
        }
        if !found {
            for sql in &sqls {
                for member in extract_members_from_expression(sql) {
                    self.add_member(member);
                }
            }
        }
    }

    fn finish(self) -> Vec<MemberValues> {
        self.members
            .into_iter()
            .map(|(member, mut values)| {
                let values = if values.is_empty() {
                    None
                } else {
                    values.sort_by_key(sort_key);
                    Some(values)
                };
                MemberValues { member, values }
            })
            .collect()
    }
}

/// Literal from the right-hand side of a SQL comparison
///
/// Template-string SQL leaves a stray closing backtick on the last value of
/// an expression, so backticks are trimmed from each end independently.
fn parse_sql_value(raw: &str) -> Value {
    let unquoted = match raw.trim_matches('`') {
        "" => raw,
        trimmed => trimmed,
    };
    match unquoted.parse::<i64>() {
        Ok(number) => Value::from(number),
        Err(_) => Value::String(unquoted.to_string()),
    }
}

// Values compare by their text, so 10 sorts before 9 and "US" after "GBP".
fn sort_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
