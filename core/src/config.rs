//! Registry definitions stored as data.
//!
//! A [`RegistryConfig`] describes the params and flags of a program in JSON
//! or YAML so a registry can be built without code.
//!
//! # Example YAML
//!
//! ```yaml
//! program: server
//! error_mode: raise
//! params:
//!   - long: host
//!     short: h
//!     default: localhost
//!     help: Host to bind
//!   - long: port
//!     short: p
//!     help: Port to listen on
//! flags:
//!   - long: quit
//!     short: q
//!     help: Quit after startup
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::{ErrorMode, Registry};
use crate::types::{FlagSpec, ParamSpec};

/// Serializable registry definition.
///
/// # Examples
///
/// ```
/// use argtable_core::{ErrorMode, RegistryConfig};
///
/// let config = RegistryConfig::from_json_str(
///     r#"{"params": [{"long": "port", "short": "p"}], "flags": []}"#,
/// )
/// .unwrap();
/// assert_eq!(config.error_mode, ErrorMode::Exit);
/// assert!(config.params[0].is_required());
///
/// let registry = config.into_registry().unwrap();
/// assert_eq!(registry.params().len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Program name for usage text; inferred from the tokens when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// Failure strategy.
    #[serde(default)]
    pub error_mode: ErrorMode,
    /// Value-taking options, in usage order.
    #[serde(default)]
    pub params: Vec<ParamSpec>,
    /// Boolean options, in usage order.
    #[serde(default)]
    pub flags: Vec<FlagSpec>,
}

impl RegistryConfig {
    /// Loads a definition, choosing YAML for `.yaml`/`.yml` and JSON
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::RegistryError::IoError) if the file cannot
    /// be read, or a JSON/YAML error if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(std::fs::File::open(path)?);
        let config = if is_yaml(path) {
            serde_yaml::from_reader(reader)?
        } else {
            serde_json::from_reader(reader)?
        };
        Ok(config)
    }

    /// Saves the definition, using the same extension rule as
    /// [`load`](Self::load).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(std::fs::File::create(path)?);
        if is_yaml(path) {
            serde_yaml::to_writer(writer, self)?;
        } else {
            serde_json::to_writer_pretty(writer, self)?;
        }
        Ok(())
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Builds a validated [`Registry`].
    ///
    /// # Errors
    ///
    /// Returns [`Invalid`](crate::RegistryError::Invalid) when names collide
    /// or are malformed.
    pub fn into_registry(self) -> Result<Registry> {
        let mut registry = Registry::strict(self.params, self.flags)?.with_error_mode(self.error_mode);
        if let Some(program) = self.program {
            registry = registry.with_program(program);
        }
        Ok(registry)
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}
