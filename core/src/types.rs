//! Option specifications and parse results.
//!
//! A registry is built from two kinds of switches: [`ParamSpec`]s, which
//! consume the token that follows them, and [`FlagSpec`]s, which are plain
//! booleans. Parsing produces a [`ParseOutcome`] mapping long names to
//! [`ResultValue`]s plus the tokens nobody claimed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Schema for a value-taking option.
///
/// `default = None` marks the param as required. `Some("")` makes it
/// optional with an empty default.
///
/// # Examples
///
/// ```
/// use argtable_core::ParamSpec;
///
/// let port = ParamSpec::required("port", 'p', "Port to listen on");
/// assert!(port.is_required());
///
/// let host = ParamSpec::optional("host", 'h', "localhost", "Host to bind");
/// assert!(!host.is_required());
/// assert_eq!(host.default.as_deref(), Some("localhost"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Long form without dashes (e.g. "host")
    pub long: String,
    /// Short form character (e.g. 'h')
    pub short: char,
    /// Value used when the param never appears; `None` means required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Help text shown in the usage table
    #[serde(default)]
    pub help: String,
}

impl ParamSpec {
    /// Creates a param that must be supplied on the command line.
    pub fn required(long: &str, short: char, help: &str) -> Self {
        Self {
            long: long.to_string(),
            short,
            default: None,
            help: help.to_string(),
        }
    }

    /// Creates a param that falls back to `default` when absent.
    pub fn optional(long: &str, short: char, default: &str, help: &str) -> Self {
        Self {
            long: long.to_string(),
            short,
            default: Some(default.to_string()),
            help: help.to_string(),
        }
    }

    /// Returns `true` when no default is defined.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// Schema for a boolean switch.
///
/// Flags have no default: absent flags are simply missing from the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSpec {
    /// Long form without dashes (e.g. "quit")
    pub long: String,
    /// Short form character (e.g. 'q')
    pub short: char,
    /// Help text shown in the usage table
    #[serde(default)]
    pub help: String,
}

impl FlagSpec {
    /// Creates a flag.
    pub fn new(long: &str, short: char, help: &str) -> Self {
        Self {
            long: long.to_string(),
            short,
            help: help.to_string(),
        }
    }
}

/// Either kind of registered switch.
///
/// # Examples
///
/// ```
/// use argtable_core::{FlagSpec, OptionSpec, ParamSpec};
///
/// let quit = OptionSpec::from(FlagSpec::new("quit", 'q', "Quit early"));
/// assert_eq!(quit.switches(), "-q, --quit");
///
/// let host = OptionSpec::from(ParamSpec::optional("host", 'h', "localhost", ""));
/// assert!(host.takes_value());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionSpec {
    Param(ParamSpec),
    Flag(FlagSpec),
}

impl OptionSpec {
    pub fn long(&self) -> &str {
        match self {
            Self::Param(p) => &p.long,
            Self::Flag(f) => &f.long,
        }
    }

    pub fn short(&self) -> char {
        match self {
            Self::Param(p) => p.short,
            Self::Flag(f) => f.short,
        }
    }

    pub fn help(&self) -> &str {
        match self {
            Self::Param(p) => &p.help,
            Self::Flag(f) => &f.help,
        }
    }

    /// Whether this switch consumes the following token.
    pub fn takes_value(&self) -> bool {
        matches!(self, Self::Param(_))
    }

    /// The `-s, --long` label used in the usage table.
    pub fn switches(&self) -> String {
        format!("-{}, --{}", self.short(), self.long())
    }
}

impl From<ParamSpec> for OptionSpec {
    fn from(spec: ParamSpec) -> Self {
        Self::Param(spec)
    }
}

impl From<FlagSpec> for OptionSpec {
    fn from(spec: FlagSpec) -> Self {
        Self::Flag(spec)
    }
}

/// Value recorded for one long name.
///
/// Serializes untagged, so an outcome renders as plain JSON
/// (`true`, `"example.com"`, `["a", "b"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    /// A flag that was present.
    Bool(bool),
    /// A param given once, or filled from its default.
    String(String),
    /// A param given two or more times, first occurrence first.
    List(Vec<String>),
}

impl ResultValue {
    /// Folds another occurrence of a param into this value.
    ///
    /// The second occurrence turns a single string into a list; later ones
    /// append.
    pub(crate) fn accumulate(self, value: String) -> Self {
        match self {
            Self::String(prev) => Self::List(vec![prev, value]),
            Self::List(mut items) => {
                items.push(value);
                Self::List(items)
            }
            Self::Bool(_) => Self::String(value),
        }
    }
}

/// A single value handed out by the [`ParseOutcome`] accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'a> {
    Bool(bool),
    Text(&'a str),
}

impl<'a> Scalar<'a> {
    /// The text, if this is a param value.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

/// Result of one parse: values by long name plus unclaimed tokens.
///
/// # Examples
///
/// ```
/// use argtable_core::{FlagSpec, ParamSpec, Registry, Scalar};
///
/// let registry = Registry::new(
///     vec![ParamSpec::optional("host", 'h', "localhost", "Host")],
///     vec![FlagSpec::new("quit", 'q', "Quit")],
/// );
/// let outcome = registry
///     .try_parse(["-q", "extra", "--host", "example.com"])
///     .unwrap();
///
/// assert_eq!(outcome.get_one("quit"), Some(Scalar::Bool(true)));
/// assert_eq!(outcome.get_one("host"), Some(Scalar::Text("example.com")));
/// assert_eq!(outcome.leftovers(), ["extra"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    values: BTreeMap<String, ResultValue>,
    leftovers: Vec<String>,
}

impl ParseOutcome {
    /// Raw stored value for `name`.
    pub fn get(&self, name: &str) -> Option<&ResultValue> {
        self.values.get(name)
    }

    /// A single value for `name`.
    ///
    /// When the param was given several times the last occurrence wins.
    pub fn get_one(&self, name: &str) -> Option<Scalar<'_>> {
        match self.values.get(name)? {
            ResultValue::Bool(b) => Some(Scalar::Bool(*b)),
            ResultValue::String(s) => Some(Scalar::Text(s.as_str())),
            ResultValue::List(items) => items.last().map(|s| Scalar::Text(s.as_str())),
        }
    }

    /// Every value for `name`, always as a sequence.
    ///
    /// Singular values come back as a one-element vector; absent names as an
    /// empty one.
    pub fn get_all(&self, name: &str) -> Vec<Scalar<'_>> {
        match self.values.get(name) {
            None => Vec::new(),
            Some(ResultValue::Bool(b)) => vec![Scalar::Bool(*b)],
            Some(ResultValue::String(s)) => vec![Scalar::Text(s.as_str())],
            Some(ResultValue::List(items)) => items.iter().map(|s| Scalar::Text(s.as_str())).collect(),
        }
    }

    /// Whether `name` has any value (flag seen, param given or defaulted).
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Tokens that matched no registered switch, in input order.
    pub fn leftovers(&self) -> &[String] {
        &self.leftovers
    }

    /// Consumes the outcome, returning the leftovers so the caller can
    /// reassign its argument list.
    pub fn into_leftovers(self) -> Vec<String> {
        self.leftovers
    }

    /// All recorded values, ordered by long name.
    pub fn values(&self) -> &BTreeMap<String, ResultValue> {
        &self.values
    }

    pub(crate) fn set_flag(&mut self, long: &str) {
        self.values.insert(long.to_string(), ResultValue::Bool(true));
    }

    pub(crate) fn push_value(&mut self, long: &str, value: String) {
        let next = match self.values.remove(long) {
            Some(prev) => prev.accumulate(value),
            None => ResultValue::String(value),
        };
        self.values.insert(long.to_string(), next);
    }

    pub(crate) fn set_default(&mut self, long: &str, value: &str) {
        self.values
            .insert(long.to_string(), ResultValue::String(value.to_string()));
    }

    pub(crate) fn push_leftover(&mut self, token: String) {
        self.leftovers.push(token);
    }
}
