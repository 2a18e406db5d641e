//! Registry validation.
//!
//! [`Registry::new`](crate::Registry::new) accepts any definition and
//! resolves duplicate names by first match. Strict construction runs these
//! checks first so ambiguous lookups are caught before parsing.
//!
//! # Examples
//!
//! ```
//! use argtable_core::*;
//!
//! let params = vec![ParamSpec::required("port", 'p', "Port")];
//! let flags = vec![FlagSpec::new("quiet", 'q', "Less output")];
//! assert!(validate_registry(&params, &flags).is_empty());
//!
//! // Invalid: 'p' is registered twice
//! let flags = vec![FlagSpec::new("pretty", 'p', "Pretty output")];
//! assert_eq!(
//!     validate_registry(&params, &flags),
//!     vec![ValidationError::DuplicateShortName('p')]
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{FlagSpec, ParamSpec};

/// Registry validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Long name is empty or whitespace-only.
    #[error("long name cannot be empty")]
    EmptyLongName,
    /// Long name starts with a dash or contains whitespace or `=`.
    #[error("invalid long name: {0}")]
    InvalidLongName(String),
    /// Short name is a dash or whitespace.
    #[error("invalid short name: '{0}'")]
    InvalidShortName(char),
    /// Two switches share a long name.
    #[error("duplicate long name: {0}")]
    DuplicateLongName(String),
    /// Two switches share a short name.
    #[error("duplicate short name: '{0}'")]
    DuplicateShortName(char),
}

/// Validates the combined set of params and flags.
///
/// Params are checked before flags, each in declaration order. Stops at the
/// first problem found.
pub fn validate_registry(params: &[ParamSpec], flags: &[FlagSpec]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_long: HashSet<&str> = HashSet::new();
    let mut seen_short: HashSet<char> = HashSet::new();

    let names = params
        .iter()
        .map(|p| (p.long.as_str(), p.short))
        .chain(flags.iter().map(|f| (f.long.as_str(), f.short)));

    for (long, short) in names {
        if long.trim().is_empty() {
            errors.push(ValidationError::EmptyLongName);
            return errors;
        }

        if long.starts_with('-') || long.contains('=') || long.chars().any(char::is_whitespace) {
            errors.push(ValidationError::InvalidLongName(long.to_string()));
            return errors;
        }

        if short == '-' || short.is_whitespace() {
            errors.push(ValidationError::InvalidShortName(short));
            return errors;
        }

        if !seen_long.insert(long) {
            errors.push(ValidationError::DuplicateLongName(long.to_string()));
            return errors;
        }

        if !seen_short.insert(short) {
            errors.push(ValidationError::DuplicateShortName(short));
            return errors;
        }
    }

    errors
}
