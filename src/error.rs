//! Error types for cubescope

use thiserror::Error;

/// Errors that can occur while reading payloads or options
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO error reading file
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// JSON deserialization error
    #[error("Invalid JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    /// YAML deserialization error
    #[error("Invalid YAML: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
    /// The URL carries no `query` parameter to read a payload from
    #[error("URL '{url}' has no 'query' parameter")]
    MissingQueryParam { url: String },
}
