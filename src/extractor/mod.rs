//! Member extractor module
//!
//! Walks a query payload and reports which members, and therefore which
//! cubes, it references.
//!
//! Two walk modes are supported:
//! - Lenient: malformed elements are logged and skipped
//! - Strict: the first malformed element fails the whole extraction

mod error;
mod expression;
mod extract;
mod options;
mod values;
mod walk;

pub use error::ExtractError;
pub use expression::{extract_member_value_from_sql, extract_members_from_expression};
pub use extract::{
    extract_cubes,
    extract_cubes_with,
    extract_filters_members,
    extract_members,
    extract_members_from_filter,
    extract_members_from_filter_with,
    extract_members_with,
};
pub use options::{ExtractOptions, Mode};
pub use values::{
    extract_filters_members_with_values,
    extract_filters_members_with_values_with,
    MemberValues,
};
