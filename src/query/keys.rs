use std::fmt;

use serde::Deserialize;

/// Top-level payload field that can reference members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryKey {
    Dimensions,
    Measures,
    Filters,
    Segments,
    TimeDimensions,
}

impl QueryKey {
    /// Every member-bearing field, in walk order
    pub const ALL: [QueryKey; 5] = [
        QueryKey::Dimensions,
        QueryKey::Measures,
        QueryKey::Filters,
        QueryKey::Segments,
        QueryKey::TimeDimensions,
    ];

    /// The field name as it appears in the payload
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::Dimensions => "dimensions",
            QueryKey::Measures => "measures",
            QueryKey::Filters => "filters",
            QueryKey::Segments => "segments",
            QueryKey::TimeDimensions => "timeDimensions",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
