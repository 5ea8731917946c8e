//! Payload and options parser (verb module)
//!
//! Transforms JSON documents, request URLs and YAML files into payload
//! values and extraction options.

use std::path::Path;

use serde_json::Value;

use crate::error::ParseError;
use crate::extractor::ExtractOptions;
use crate::params::extract_url_params;

/// Parse a query payload from a JSON string
pub fn parse_str(json: &str) -> Result<Value, ParseError> {
    serde_json::from_str(json).map_err(ParseError::from)
}

/// Parse a query payload from a JSON file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Value, ParseError> {
    parse_str(&read(path.as_ref())?)
}

/// Parse the query payload carried in a request URL's `query` parameter
pub fn parse_url(url: &str) -> Result<Value, ParseError> {
    let params = extract_url_params(url);
    let query = params
        .get("query")
        .and_then(|value| value.as_single())
        .ok_or_else(|| ParseError::MissingQueryParam { url: url.to_string() })?;
    parse_str(query)
}

/// Parse extraction options from a YAML string
pub fn parse_options_str(yaml: &str) -> Result<ExtractOptions, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

/// Parse extraction options from a YAML file
pub fn parse_options_file<P: AsRef<Path>>(path: P) -> Result<ExtractOptions, ParseError> {
    parse_options_str(&read(path.as_ref())?)
}

fn read(path: &Path) -> Result<String, ParseError> {
    std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
