//! Configuration system error types.
//!
//! Domain-specific errors for fetching, parsing, resolving and
//! interpreting generator configuration documents.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Configuration system errors.
///
/// These errors occur when loading a YAML document from a local path or URL,
/// resolving its `extends` chain, or reading typed values out of the merged
/// result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Retrieving a remote document failed, either at the transport level or
    /// because the server answered with a non-success status.
    #[error("Failed to fetch {location}: {reason}")]
    Fetch { location: String, reason: String },

    /// A local document could not be read.
    #[error("Failed to access configuration file: {path} - {reason}")]
    FileAccessError { path: String, reason: String },

    /// A document is not valid YAML, or its top level is not a mapping.
    #[error("Failed to parse {location}: {reason}")]
    ParseError { location: String, reason: String },

    /// A value is present but has the wrong shape.
    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// A key the generator cannot run without is absent.
    #[error("Required configuration missing: {key}")]
    RequiredConfigMissing { key: String },

    /// An `extends` chain refers back to a document already being resolved.
    #[error("Configuration extends cycle detected: {chain}")]
    ExtendsCycle { chain: String },
}

/// Result type alias for configuration operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
