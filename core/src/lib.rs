//! Command-line switch parsing with integrated usage tables.
//!
//! This crate parses a token stream against a declared set of switches:
//!
//! - [`ParamSpec`] — a value-taking option (`-p 8080`, `--port 8080`),
//!   required unless it has a default. Repeated params collect into a list.
//! - [`FlagSpec`] — a boolean option (`-q`, `--quit`). Short flags can be
//!   grouped (`-qs`).
//! - [`Registry`] — holds both, parses tokens into a [`ParseOutcome`] and
//!   renders the usage table shown on errors.
//!
//! Tokens that match no switch are not errors: they are kept, in order, as
//! leftovers for the caller. Unknown characters inside a grouped token are.
//!
//! Failures either terminate the process or come back as a [`ParseError`],
//! depending on the registry's [`ErrorMode`].
//!
//! Registries can also be described as data ([`RegistryConfig`]) and checked
//! for ambiguous names ([`validate_registry`]).
//!
//! # Example
//!
//! ```
//! use argtable_core::*;
//!
//! let registry = Registry::new(
//!     vec![ParamSpec::optional("host", 'h', "localhost", "Host to connect to")],
//!     vec![FlagSpec::new("quit", 'q', "Quit after connecting")],
//! )
//! .with_error_mode(ErrorMode::Raise);
//!
//! let outcome = registry
//!     .parse(["-q", "extra", "--host", "example.com"])
//!     .unwrap();
//!
//! assert_eq!(outcome.get("quit"), Some(&ResultValue::Bool(true)));
//! assert_eq!(outcome.get_one("host").and_then(|v| v.as_str()), Some("example.com"));
//! assert_eq!(outcome.leftovers(), ["extra"]);
//! ```

mod config;
mod error;
mod parser;
mod registry;
mod types;
mod usage;
mod validate;

pub use config::RegistryConfig;
pub use error::{ParseError, RegistryError, Result};
pub use registry::{EXIT_STATUS, ErrorMode, Registry, Switch};
pub use types::*;
pub use usage::{program_name, render_usage, write_usage};
pub use validate::{ValidationError, validate_registry};
