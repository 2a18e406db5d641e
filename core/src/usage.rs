//! Usage table rendering.
//!
//! ```txt
//! Usage: server [options]
//! Options:
//!   -q, --quit  Quit after startup
//!   -h, --host  Host to bind [default: localhost]
//!   -p, --port  Port to listen on   [required]
//! ```
//!
//! Flags are listed first, then params, each in declaration order. The left
//! column is padded to the widest entry plus two spaces.

use std::io::{self, Write};

use crate::Registry;
use crate::types::{FlagSpec, ParamSpec};

/// Fallback when neither tokens nor the process name are available.
const UNKNOWN_PROGRAM: &str = "program";

/// Renders the usage table, optionally preceded by a `header` line.
///
/// # Examples
///
/// ```
/// use argtable_core::{render_usage, FlagSpec, ParamSpec, Registry};
///
/// let registry = Registry::new(
///     vec![ParamSpec::optional("host", 'h', "localhost", "Host")],
///     vec![FlagSpec::new("quit", 'q', "Quit")],
/// );
///
/// let text = render_usage(&registry, "server", None);
/// assert_eq!(
///     text,
///     "Usage: server [options]\n\
///      Options:\n  \
///      -q, --quit  Quit\n  \
///      -h, --host  Host [default: localhost]\n"
/// );
/// ```
pub fn render_usage(registry: &Registry, program: &str, header: Option<&str>) -> String {
    let rows: Vec<(String, String)> = registry
        .flags()
        .iter()
        .map(flag_row)
        .chain(registry.params().iter().map(param_row))
        .collect();

    let width = rows
        .iter()
        .map(|(left, _)| left.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    if let Some(header) = header {
        out.push_str(header);
        out.push('\n');
    }
    out.push_str(&format!("Usage: {program} [options]\n"));
    out.push_str("Options:\n");
    for (left, right) in &rows {
        out.push_str(&format!("{left:<width$}{right}\n"));
    }
    out
}

/// Writes [`render_usage`] output to `out`.
pub fn write_usage<W: Write>(
    registry: &Registry,
    out: &mut W,
    program: &str,
    header: Option<&str>,
) -> io::Result<()> {
    out.write_all(render_usage(registry, program, header).as_bytes())?;
    out.flush()
}

/// Picks the program name shown in usage text.
///
/// Uses the first token of the invocation, falling back to the name the
/// running process was invoked as.
pub fn program_name(tokens: &[String]) -> String {
    tokens
        .first()
        .cloned()
        .or_else(|| std::env::args().next())
        .unwrap_or_else(|| UNKNOWN_PROGRAM.to_string())
}

fn flag_row(flag: &FlagSpec) -> (String, String) {
    (
        format!("  -{}, --{}", flag.short, flag.long),
        flag.help.clone(),
    )
}

fn param_row(param: &ParamSpec) -> (String, String) {
    let mut right = param.help.clone();
    match param.default.as_deref() {
        Some("") => {}
        Some(default) => right.push_str(&format!(" [default: {default}]")),
        None => right.push_str("   [required]"),
    }
    (format!("  -{}, --{}", param.short, param.long), right)
}
