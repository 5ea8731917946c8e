//! cubescope - Find the cubes a semantic-layer query touches
//!
//! This library provides:
//! - Borrowed views over query payloads (member references, filter trees)
//! - Member extraction across dimensions, measures, filters, segments and time dimensions
//! - Cube extraction from the extracted members
//! - Filter member/value extraction, including pushed-down SQL segments
//! - Payload parsing from JSON and from request URLs
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `query/` - payload views (MemberRef, PushdownMember, FilterNode, QueryKey)
//!
//! **Verb modules** (transformations):
//! - `parser/` - JSON / URL → payload, YAML → ExtractOptions
//! - `extractor/` - payload → members, cubes, filter values
//! - `params` - URL → query parameters
//!
//! # Example
//!
//! ```
//! use cubescope::{extract_cubes, extract_members};
//! use serde_json::json;
//!
//! let payload = json!({
//!     "dimensions": ["test_a.city", {"cubeName": "test_a", "expressionName": "total"}],
//!     "measures": ["test_b.count"],
//!     "filters": [{"or": [{"member": "test_c.city", "operator": "set"}]}]
//! });
//!
//! let members = extract_members(&payload)?;
//! assert!(members.contains("test_a.total"));
//!
//! let cubes: Vec<String> = extract_cubes(&payload)?.into_iter().collect();
//! assert_eq!(cubes, ["test_a", "test_b", "test_c"]);
//! # Ok::<(), cubescope::ExtractError>(())
//! ```

pub mod query;
pub mod extractor;
pub mod parser;
pub mod params;
pub mod error;

// Re-export commonly used types
pub use query::{
    is_pushdown_member, FilterNode, MemberRef, PushdownMember, QueryKey, TimeDimensionRef,
};
pub use extractor::{
    extract_cubes, extract_cubes_with, extract_filters_members, extract_filters_members_with_values,
    extract_filters_members_with_values_with, extract_member_value_from_sql, extract_members,
    extract_members_from_expression, extract_members_from_filter, extract_members_from_filter_with,
    extract_members_with, ExtractError, ExtractOptions, MemberValues, Mode,
};
pub use params::{extract_url_params, ParamValue};
pub use error::ParseError;
