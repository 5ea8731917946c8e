//! Member reference types
//!
//! A member is named either by a dotted string (`"orders.count"`) or by an
//! inline pushdown descriptor carrying `cubeName` and `expressionName`.

use serde_json::{Map, Value};

const CUBE_NAME: &str = "cubeName";
const EXPRESSION_NAME: &str = "expressionName";

/// True if `value` is an object carrying both `cubeName` and `expressionName`
///
/// Key presence is all that is checked; the key values are not validated.
pub fn is_pushdown_member(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        object.contains_key(CUBE_NAME) && object.contains_key(EXPRESSION_NAME)
    })
}

/// Inline computed member, e.g. a measure pushed down from a SQL API query
#[derive(Debug, Clone, Copy)]
pub struct PushdownMember<'a> {
    object: &'a Map<String, Value>,
}

impl<'a> PushdownMember<'a> {
    /// View `value` as a pushdown member, if it is one
    pub fn from_value(value: &'a Value) -> Option<Self> {
        if !is_pushdown_member(value) {
            return None;
        }
        value.as_object().map(|object| Self { object })
    }

    pub fn cube_name(&self) -> String {
        self.key_text(CUBE_NAME)
    }

    pub fn expression_name(&self) -> String {
        self.key_text(EXPRESSION_NAME)
    }

    /// `cubeName.expressionName`
    pub fn member_name(&self) -> String {
        format!("{}.{}", self.cube_name(), self.expression_name())
    }

    /// String elements of the `expression` array, in order
    pub fn expressions(&self) -> impl Iterator<Item = &'a str> {
        let object: &'a Map<String, Value> = self.object;
        object
            .get("expression")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    /// The serialized `definition`, if it is a string
    pub fn definition(&self) -> Option<&'a str> {
        self.object.get("definition").and_then(Value::as_str)
    }

    fn key_text(&self, key: &str) -> String {
        match self.object.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

/// An element of `dimensions`, `measures`, `segments` or `filters`
#[derive(Debug, Clone, Copy)]
pub enum MemberRef<'a> {
    /// Fully-qualified dotted name, used verbatim
    Name(&'a str),
    Pushdown(PushdownMember<'a>),
}

impl<'a> MemberRef<'a> {
    /// Resolve which encoding `value` uses; `None` if it is neither
    pub fn classify(value: &'a Value) -> Option<Self> {
        if let Some(pushdown) = PushdownMember::from_value(value) {
            return Some(MemberRef::Pushdown(pushdown));
        }
        value.as_str().map(MemberRef::Name)
    }

    pub fn member_name(&self) -> String {
        match self {
            MemberRef::Name(name) => name.to_string(),
            MemberRef::Pushdown(pushdown) => pushdown.member_name(),
        }
    }
}

/// An element of `timeDimensions`
#[derive(Debug, Clone, Copy)]
pub enum TimeDimensionRef<'a> {
    Dimension(&'a str),
    Pushdown(PushdownMember<'a>),
    /// A `dimension` key whose value is not a string
    InvalidDimension(&'a Value),
    /// Neither a `dimension` key nor a pushdown encoding
    Unreferenced,
}

impl<'a> TimeDimensionRef<'a> {
    pub fn classify(value: &'a Value) -> Self {
        if let Some(dimension) = value.as_object().and_then(|object| object.get("dimension")) {
            return match dimension.as_str() {
                Some(name) => TimeDimensionRef::Dimension(name),
                None => TimeDimensionRef::InvalidDimension(dimension),
            };
        }
        match PushdownMember::from_value(value) {
            Some(pushdown) => TimeDimensionRef::Pushdown(pushdown),
            None => TimeDimensionRef::Unreferenced,
        }
    }
}
