use std::path::{Path, PathBuf};

use argtable_core::{ErrorMode, ParseOutcome, Registry, RegistryConfig};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "argtable")]
#[command(about = "Parse command-line tokens against a registry definition")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse tokens given after `--` and print the outcome.
    Parse(ParseArgs),
    /// Print the usage table for a registry definition.
    Usage(UsageArgs),
    /// Check a registry definition for malformed or duplicate names.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Registry definition file (JSON, or YAML with a .yaml/.yml extension).
    #[arg(long)]
    spec: PathBuf,
    /// Return errors instead of exiting from inside the parser.
    #[arg(long)]
    raise: bool,
    /// Program name for usage text.
    #[arg(long)]
    program: Option<String>,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Tokens to parse.
    #[arg(last = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct UsageArgs {
    /// Registry definition file.
    #[arg(long)]
    spec: PathBuf,
    /// Program name for usage text.
    #[arg(long)]
    program: Option<String>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Registry definition file.
    #[arg(long)]
    spec: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Usage(args) => run_usage(args),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn load_registry(path: &Path) -> Result<Registry, String> {
    let config = RegistryConfig::load(path)
        .map_err(|err| format!("Failed to load '{}': {err}", path.display()))?;
    config
        .into_registry()
        .map_err(|err| format!("Failed to load '{}': {err}", path.display()))
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let mut registry = load_registry(&args.spec)?;
    if args.raise {
        registry = registry.with_error_mode(ErrorMode::Raise);
    }
    if let Some(program) = args.program {
        registry = registry.with_program(program);
    }

    debug!(tokens = args.tokens.len(), mode = ?registry.error_mode(), "Parsing tokens");
    let outcome = registry.parse(args.tokens).map_err(|err| err.to_string())?;
    println!("{}", format_outcome(&outcome, args.format)?);
    Ok(())
}

fn run_usage(args: UsageArgs) -> Result<(), String> {
    let registry = load_registry(&args.spec)?;
    let program = args
        .program
        .or_else(|| registry.program().map(str::to_string))
        .unwrap_or_else(|| argtable_core::program_name(&[]));
    print!("{}", registry.usage(&program));
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let registry = load_registry(&args.spec)?;
    println!(
        "Validated '{}': {} param(s), {} flag(s).",
        args.spec.display(),
        registry.params().len(),
        registry.flags().len()
    );
    Ok(())
}

fn format_outcome(outcome: &ParseOutcome, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(outcome)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(outcome).map_err(|e| format!("YAML serialization failed: {e}"))
        }
    }
}
