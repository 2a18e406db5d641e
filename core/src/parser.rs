//! Token scanning.
//!
//! A single left-to-right pass with one token of lookahead. Each token is
//! classified by its leading dashes:
//!
//! - `--name` looks `name` up among long names (exact match).
//! - `-c` looks `c` up among short names.
//! - `-abc` expands to one flag per character; params and unknown
//!   characters are errors here.
//! - anything else, and any ungrouped switch that matches nothing, is kept
//!   as a leftover.
//!
//! After the scan, params that never appeared get their defaults and
//! required params without a value fail the parse.

use std::iter::Peekable;

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::registry::{Registry, Switch};
use crate::types::ParseOutcome;

/// Shape of a raw token, decided from its leading dashes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind<'a> {
    /// `--<text>`, text possibly empty.
    Long(&'a str),
    /// `-<c>`.
    Short(char),
    /// `-<text>` with two or more characters.
    Group(&'a str),
    /// No dash prefix, or a lone `-`.
    Plain,
}

pub(crate) fn classify(token: &str) -> TokenKind<'_> {
    if let Some(name) = token.strip_prefix("--") {
        return TokenKind::Long(name);
    }
    if let Some(text) = token.strip_prefix('-') {
        let mut chars = text.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => TokenKind::Short(c),
            (Some(_), Some(_)) => TokenKind::Group(text),
            (None, _) => TokenKind::Plain,
        };
    }
    TokenKind::Plain
}

/// Whether a token would be read as a switch rather than a value.
pub(crate) fn looks_like_switch(token: &str) -> bool {
    classify(token) != TokenKind::Plain
}

/// Scans `tokens` against `registry` and resolves defaults.
pub(crate) fn scan<I>(registry: &Registry, tokens: I) -> Result<ParseOutcome, ParseError>
where
    I: IntoIterator<Item = String>,
{
    let mut outcome = ParseOutcome::default();
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        let kind = classify(&token);
        trace!(token = %token, kind = ?kind, "Classified token");

        let switch = match kind {
            TokenKind::Long(name) => registry.lookup_long(name),
            TokenKind::Short(c) => registry.lookup_short(c),
            TokenKind::Group(group) => {
                expand_group(registry, group, &mut outcome)?;
                continue;
            }
            TokenKind::Plain => None,
        };

        match switch {
            Some(Switch::Flag(flag)) => outcome.set_flag(&flag.long),
            Some(Switch::Param(param)) => {
                let value = take_value(&mut tokens)
                    .ok_or_else(|| ParseError::MissingParamValue(param.long.clone()))?;
                outcome.push_value(&param.long, value);
            }
            None => outcome.push_leftover(token),
        }
    }

    resolve_defaults(registry, &mut outcome)?;

    debug!(
        values = outcome.values().len(),
        leftovers = outcome.leftovers().len(),
        "Parsed token stream"
    );
    Ok(outcome)
}

fn take_value<I>(tokens: &mut Peekable<I>) -> Option<String>
where
    I: Iterator<Item = String>,
{
    tokens.next_if(|next| !looks_like_switch(next))
}

/// Expands `-abc` into its flags.
///
/// Every character is resolved before any flag is recorded, so a bad
/// character leaves the outcome untouched by this group.
fn expand_group(
    registry: &Registry,
    group: &str,
    outcome: &mut ParseOutcome,
) -> Result<(), ParseError> {
    let mut flags = Vec::with_capacity(group.len());

    for c in group.chars() {
        match registry.lookup_short(c) {
            Some(Switch::Flag(flag)) => flags.push(flag),
            Some(Switch::Param(param)) => {
                return Err(ParseError::UngroupableParam {
                    long: param.long.clone(),
                    group: group.to_string(),
                });
            }
            None => return Err(ParseError::UnknownGroupedFlag(c)),
        }
    }

    for flag in flags {
        outcome.set_flag(&flag.long);
    }
    Ok(())
}

/// Fills defaults and enforces required params, in declaration order.
fn resolve_defaults(registry: &Registry, outcome: &mut ParseOutcome) -> Result<(), ParseError> {
    for param in registry.params() {
        if !outcome.is_set(&param.long) {
            if let Some(default) = &param.default {
                outcome.set_default(&param.long, default);
            }
        }

        if param.is_required() && !outcome.is_set(&param.long) {
            return Err(ParseError::MissingRequiredOption(param.long.clone()));
        }
    }
    Ok(())
}
