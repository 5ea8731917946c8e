//! Query payload types (nouns)
//!
//! Borrowed views over a raw `serde_json::Value` query payload. The payload
//! itself is never copied or mutated; every view points back into it.

mod filter;
mod keys;
mod member;

pub use filter::FilterNode;
pub use keys::QueryKey;
pub use member::{is_pushdown_member, MemberRef, PushdownMember, TimeDimensionRef};

use serde_json::Value;

/// Short name of a JSON value's type, for error messages and logs
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
