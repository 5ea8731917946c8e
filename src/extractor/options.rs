//! Extraction options
//!
//! Options deserialize from camelCase keys so they can live in the same YAML
//! or JSON configuration as the rest of a query gateway:
//!
//! ```yaml
//! mode: strict
//! queryKeys: [filters, segments]
//! resolvePushdownExpressions: true
//! ```

use serde::Deserialize;

use crate::query::QueryKey;

/// How malformed payload elements are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Log and skip
    #[default]
    Lenient,
    /// Fail the extraction
    Strict,
}

/// Controls which fields a payload walk visits and how it treats bad input
///
/// Every key is optional when deserializing; missing keys take the
/// [`Default`] values, which walk all five query fields leniently.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractOptions {
    /// Whether malformed elements are skipped or fail the walk
    pub mode: Mode,
    /// Top-level fields to walk
    pub query_keys: Vec<QueryKey>,
    /// Replace pushdown members by the `${cube.member}` references in their SQL
    pub resolve_pushdown_expressions: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Lenient,
            query_keys: QueryKey::ALL.to_vec(),
            resolve_pushdown_expressions: false,
        }
    }
}

impl ExtractOptions {
    pub fn strict() -> Self {
        Self {
            mode: Mode::Strict,
            ..Default::default()
        }
    }

    pub fn with_query_keys(mut self, keys: impl IntoIterator<Item = QueryKey>) -> Self {
        self.query_keys = keys.into_iter().collect();
        self
    }

    pub fn with_pushdown_expressions(mut self, resolve: bool) -> Self {
        self.resolve_pushdown_expressions = resolve;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.mode == Mode::Strict
    }
}
