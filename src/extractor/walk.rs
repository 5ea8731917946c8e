//! Payload walking shared by the extraction entry points

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::query::{json_type, FilterNode, MemberRef, PushdownMember, QueryKey, TimeDimensionRef};
use super::error::ExtractError;
use super::expression::pushdown_references;
use super::options::{ExtractOptions, Mode};

/// View the payload as an object
///
/// String payloads stand for metadata queries and reference nothing, so they
/// walk as an empty object.
pub(super) fn payload_object(payload: &Value) -> Result<Option<&Map<String, Value>>, ExtractError> {
    match payload {
        Value::Object(object) => Ok(Some(object)),
        Value::String(_) => Ok(None),
        other => Err(ExtractError::InvalidPayload {
            found: json_type(other),
        }),
    }
}

/// Applies one set of options to the elements of a payload
pub(super) struct Walker<'o> {
    options: &'o ExtractOptions,
}

impl<'o> Walker<'o> {
    pub(super) fn new(options: &'o ExtractOptions) -> Self {
        Self { options }
    }

    /// Report a malformed element: an error in strict mode, a warning otherwise
    pub(super) fn malformed(
        &self,
        path: &str,
        expected: &'static str,
        found: &Value,
    ) -> Result<(), ExtractError> {
        match self.options.mode {
            Mode::Strict => Err(ExtractError::TypeMismatch {
                path: path.to_string(),
                expected,
                found: json_type(found),
            }),
            Mode::Lenient => {
                warn!(path, expected, found = json_type(found), "skipping malformed query element");
                Ok(())
            }
        }
    }

    /// The elements of a top-level field, if it is present
    pub(super) fn field_items<'p>(
        &self,
        object: &'p Map<String, Value>,
        key: QueryKey,
    ) -> Result<Option<&'p Vec<Value>>, ExtractError> {
        match object.get(key.as_str()) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(other) => {
                self.malformed(key.as_str(), "array", other)?;
                Ok(None)
            }
        }
    }

    /// Names contributed by a pushdown member
    pub(super) fn pushdown_members(&self, pushdown: &PushdownMember<'_>) -> Vec<String> {
        if self.options.resolve_pushdown_expressions {
            let referenced = pushdown_references(pushdown);
            if !referenced.is_empty() {
                return referenced;
            }
        }
        vec![pushdown.member_name()]
    }

    /// An element of `dimensions`, `measures` or `segments`
    pub(super) fn member_ref(
        &self,
        item: &Value,
        path: &str,
        members: &mut BTreeSet<String>,
    ) -> Result<(), ExtractError> {
        match MemberRef::classify(item) {
            Some(MemberRef::Name(name)) => {
                members.insert(name.to_string());
            }
            Some(MemberRef::Pushdown(pushdown)) => members.extend(self.pushdown_members(&pushdown)),
            None => self.malformed(path, "member name or pushdown member", item)?,
        }
        Ok(())
    }

    /// An element of `timeDimensions`
    pub(super) fn time_dimension(
        &self,
        item: &Value,
        path: &str,
        members: &mut BTreeSet<String>,
    ) -> Result<(), ExtractError> {
        match TimeDimensionRef::classify(item) {
            TimeDimensionRef::Dimension(name) => {
                members.insert(name.to_string());
            }
            TimeDimensionRef::Pushdown(pushdown) => {
                members.extend(self.pushdown_members(&pushdown))
            }
            TimeDimensionRef::InvalidDimension(dimension) => {
                self.malformed(&format!("{path}.dimension"), "dimension name string", dimension)?
            }
            TimeDimensionRef::Unreferenced => trace!(path, "time dimension references no member"),
        }
        Ok(())
    }

    /// An element of `filters`: a bare pushdown member or a filter tree
    pub(super) fn filter_item(
        &self,
        item: &Value,
        path: &str,
        members: &mut BTreeSet<String>,
    ) -> Result<(), ExtractError> {
        if let Some(pushdown) = PushdownMember::from_value(item) {
            members.extend(self.pushdown_members(&pushdown));
            return Ok(());
        }
        self.parse_filter(item, path)?.collect_members(members);
        Ok(())
    }

    /// Build the filter tree rooted at `value`
    ///
    /// Every recognised key contributes; `member` alongside `and`/`or` yields
    /// a `Mixed` node rather than one key shadowing the others.
    pub(super) fn parse_filter<'p>(
        &self,
        value: &'p Value,
        path: &str,
    ) -> Result<FilterNode<'p>, ExtractError> {
        let Some(object) = value.as_object() else {
            self.malformed(path, "filter object", value)?;
            return Ok(FilterNode::Empty);
        };

        let mut parts = Vec::new();
        if let Some(member) = object.get("member") {
            match member.as_str() {
                Some(name) => parts.push(FilterNode::Member {
                    member: name,
                    values: object.get("values"),
                }),
                None => self.malformed(&format!("{path}.member"), "member name string", member)?,
            }
        }
        if let Some(children) = object.get("and") {
            parts.push(FilterNode::And(self.parse_filter_list(children, &format!("{path}.and"))?));
        }
        if let Some(children) = object.get("or") {
            parts.push(FilterNode::Or(self.parse_filter_list(children, &format!("{path}.or"))?));
        }

        Ok(if parts.len() > 1 {
            FilterNode::Mixed(parts)
        } else {
            parts.pop().unwrap_or(FilterNode::Empty)
        })
    }

    fn parse_filter_list<'p>(
        &self,
        value: &'p Value,
        path: &str,
    ) -> Result<Vec<FilterNode<'p>>, ExtractError> {
        let Some(items) = value.as_array() else {
            self.malformed(path, "array of filters", value)?;
            return Ok(Vec::new());
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.parse_filter(item, &format!("{path}[{index}]")))
            .collect()
    }
}
