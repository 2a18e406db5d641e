//! The parser registry.
//!
//! A [`Registry`] holds the declared params and flags, parses token streams
//! against them and renders the usage table. It keeps no state between
//! parses: every call takes its tokens explicitly and returns a fresh
//! [`ParseOutcome`].

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ParseError, Result};
use crate::types::{FlagSpec, ParamSpec, ParseOutcome};
use crate::validate::validate_registry;
use crate::{parser, usage};

/// Process exit status used by [`ErrorMode::Exit`].
pub const EXIT_STATUS: i32 = 2;

/// What happens after a failed parse has printed its usage message.
///
/// # Examples
///
/// ```
/// use argtable_core::ErrorMode;
///
/// assert_eq!(ErrorMode::default(), ErrorMode::Exit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// Terminate the process with [`EXIT_STATUS`] (the default).
    #[default]
    Exit,
    /// Return the [`ParseError`] to the caller.
    Raise,
}

impl ErrorMode {
    /// Applies this strategy to a parse failure.
    ///
    /// Only returns for [`ErrorMode::Raise`].
    fn settle(self, err: ParseError) -> ParseError {
        match self {
            Self::Exit => std::process::exit(EXIT_STATUS),
            Self::Raise => err,
        }
    }
}

/// A registered switch found by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch<'a> {
    Param(&'a ParamSpec),
    Flag(&'a FlagSpec),
}

/// Declared params and flags plus the failure strategy.
///
/// # Examples
///
/// ```
/// use argtable_core::{ErrorMode, FlagSpec, ParamSpec, ParseError, Registry};
///
/// let registry = Registry::new(
///     vec![ParamSpec::required("port", 'p', "Port to listen on")],
///     vec![FlagSpec::new("verbose", 'v', "Chatty output")],
/// )
/// .with_error_mode(ErrorMode::Raise);
///
/// let outcome = registry.try_parse(["-v", "--port", "8080"]).unwrap();
/// assert!(outcome.is_set("verbose"));
///
/// let err = registry.try_parse(["-p"]).unwrap_err();
/// assert_eq!(err, ParseError::MissingParamValue("port".into()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    params: Vec<ParamSpec>,
    flags: Vec<FlagSpec>,
    error_mode: ErrorMode,
    program: Option<String>,
}

impl Registry {
    /// Creates a registry without validating names.
    ///
    /// Duplicate names are accepted; lookups then return the first match,
    /// searching params before flags.
    pub fn new(params: Vec<ParamSpec>, flags: Vec<FlagSpec>) -> Self {
        debug!(
            params = params.len(),
            flags = flags.len(),
            "Created option registry"
        );
        Self {
            params,
            flags,
            error_mode: ErrorMode::default(),
            program: None,
        }
    }

    /// Creates a registry, rejecting duplicate or malformed names.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Invalid`](crate::RegistryError::Invalid) with
    /// the first problem found.
    pub fn strict(params: Vec<ParamSpec>, flags: Vec<FlagSpec>) -> Result<Self> {
        if let Some(err) = validate_registry(&params, &flags).into_iter().next() {
            return Err(err.into());
        }
        Ok(Self::new(params, flags))
    }

    /// Selects the failure strategy used by [`parse`](Self::parse).
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Fixes the program name shown in usage text.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }

    /// Finds a switch by long name (without dashes).
    pub fn lookup_long(&self, name: &str) -> Option<Switch<'_>> {
        self.params
            .iter()
            .find(|p| p.long == name)
            .map(Switch::Param)
            .or_else(|| self.flags.iter().find(|f| f.long == name).map(Switch::Flag))
    }

    /// Finds a switch by short character.
    pub fn lookup_short(&self, short: char) -> Option<Switch<'_>> {
        self.params
            .iter()
            .find(|p| p.short == short)
            .map(Switch::Param)
            .or_else(|| self.flags.iter().find(|f| f.short == short).map(Switch::Flag))
    }

    /// Parses `tokens` without printing anything.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] regardless of the configured error mode.
    pub fn try_parse<I, S>(&self, tokens: I) -> std::result::Result<ParseOutcome, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        parser::scan(self, tokens.into_iter().map(Into::into))
    }

    /// Parses `tokens`, reporting failures on standard error.
    ///
    /// On failure the usage table is printed with the error as its header,
    /// then the error mode decides between exiting and returning the error.
    pub fn parse<I, S>(&self, tokens: I) -> std::result::Result<ParseOutcome, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse_to(tokens, &mut io::stderr())
    }

    /// Like [`parse`](Self::parse), writing the usage message to `out`.
    pub fn parse_to<I, S, W>(
        &self,
        tokens: I,
        out: &mut W,
    ) -> std::result::Result<ParseOutcome, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        W: Write,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        match parser::scan(self, tokens.iter().cloned()) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                let program = self.usage_program(&tokens);
                let message = err.to_string();
                if let Err(io_err) = usage::write_usage(self, out, &program, Some(&message)) {
                    warn!(error = %io_err, "Failed to write usage message");
                }
                Err(self.error_mode.settle(err))
            }
        }
    }

    /// Parses the process arguments (program name excluded).
    ///
    /// Unclaimed tokens are returned in the outcome's
    /// [`leftovers`](ParseOutcome::leftovers) for further processing.
    pub fn parse_env(&self) -> std::result::Result<ParseOutcome, ParseError> {
        self.parse(std::env::args().skip(1))
    }

    /// Renders the usage table for `program`.
    pub fn usage(&self, program: &str) -> String {
        usage::render_usage(self, program, None)
    }

    /// Writes the usage table, naming the program after `tokens`.
    pub fn write_usage<W: Write>(&self, out: &mut W, tokens: &[String]) -> io::Result<()> {
        usage::write_usage(self, out, &self.usage_program(tokens), None)
    }

    fn usage_program(&self, tokens: &[String]) -> String {
        match &self.program {
            Some(program) => program.clone(),
            None => usage::program_name(tokens),
        }
    }
}
