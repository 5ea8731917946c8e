//! Query-string decoding for query-engine REST URLs
//!
//! Payloads usually reach a gateway URL-encoded in the `query` parameter of
//! requests such as `/cubejs-api/v1/load?query=...`.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::debug;
use url::Url;

// Base used to resolve relative request paths; only the query string is kept
const RELATIVE_BASE: &str = "https://example.com";

/// Value of a decoded query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    /// The key was repeated; values in order of appearance
    Multiple(Vec<String>),
}

impl ParamValue {
    /// The value if the key appeared once
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ParamValue::Single(value) => Some(value),
            ParamValue::Multiple(_) => None,
        }
    }

    /// Every value, in order of appearance
    pub fn values(&self) -> Vec<&str> {
        match self {
            ParamValue::Single(value) => vec![value.as_str()],
            ParamValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, value: String) {
        if let ParamValue::Multiple(values) = self {
            values.push(value);
            return;
        }
        if let ParamValue::Single(first) = self {
            let first = std::mem::take(first);
            *self = ParamValue::Multiple(vec![first, value]);
        }
    }
}

/// Decode the query parameters of an absolute or relative URL
///
/// Percent escapes and `+` are decoded. Parameters with empty values are
/// dropped and repeated keys collect into [`ParamValue::Multiple`]. A URL
/// that cannot be parsed yields no parameters.
pub fn extract_url_params(url: &str) -> BTreeMap<String, ParamValue> {
    let mut params = BTreeMap::new();
    let parsed = match Url::parse(RELATIVE_BASE).and_then(|base| base.join(url)) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(url, error = %e, "ignoring unparseable url");
            return params;
        }
    };

    for (key, value) in parsed.query_pairs() {
        if value.is_empty() {
            continue;
        }
        match params.entry(key.into_owned()) {
            Entry::Vacant(entry) => {
                entry.insert(ParamValue::Single(value.into_owned()));
            }
            Entry::Occupied(mut entry) => entry.get_mut().push(value.into_owned()),
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(value: &str) -> ParamValue {
        ParamValue::Single(value.to_string())
    }

    #[test]
    fn test_single_and_multiple_params() {
        let params = extract_url_params("https://example.com/?foo=bar&baz=qux");
        assert_eq!(params.len(), 2);
        assert_eq!(params["foo"], single("bar"));
        assert_eq!(params["baz"], single("qux"));
    }

    #[test]
    fn test_repeated_keys() {
        let params = extract_url_params("https://example.com/?foo=bar&foo=baz&foo=qux");
        assert_eq!(params["foo"].values(), vec!["bar", "baz", "qux"]);
        assert!(params["foo"].as_single().is_none());
    }

    #[test]
    fn test_decoding() {
        let params = extract_url_params("/load?foo=hello%20world&bar=last+month");
        assert_eq!(params["foo"].as_single(), Some("hello world"));
        assert_eq!(params["bar"].as_single(), Some("last month"));
    }

    #[test]
    fn test_empty_values_dropped() {
        assert!(extract_url_params("https://example.com/").is_empty());
        assert!(extract_url_params("https://example.com/?foo=").is_empty());
        let params = extract_url_params("?foo=&foo=x");
        assert_eq!(params["foo"], single("x"));
    }

    #[test]
    fn test_unparseable_url() {
        assert!(extract_url_params("http://[::1").is_empty());
    }
}
