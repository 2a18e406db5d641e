//! Error types for parsing and registry loading.
//!
//! [`ParseError`] covers failures while scanning a token stream.
//! [`RegistryError`] covers loading and validating registry definitions.

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors raised while parsing a token stream.
///
/// The `Display` text is also used as the header of the usage table printed
/// when a parse fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A param's short name appeared inside a grouped short token.
    #[error("Parameter '{long}' found in grouped flags '-{group}'.")]
    UngroupableParam { long: String, group: String },

    /// A character inside a grouped short token matches no short name.
    #[error("'{0}' is not a supported flag.")]
    UnknownGroupedFlag(char),

    /// A param token had no eligible following value token.
    #[error("Missing argument for '{0}' parameter.")]
    MissingParamValue(String),

    /// A required param never received a value.
    #[error("Missing required option '{0}'.")]
    MissingRequiredOption(String),
}

/// Errors that can occur while building a registry from a definition.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The definition breaks a registry invariant (e.g. duplicate names).
    #[error("invalid registry: {0}")]
    Invalid(#[from] ValidationError),
}

/// Convenience alias for results with [`RegistryError`].
pub type Result<T> = std::result::Result<T, RegistryError>;
