use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use specrunner_args_core::output::{OutputFormat, format_formatters, format_options};
use specrunner_args_core::{ArgumentParser, RunnerConfig};
use tracing::debug;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Table,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
            CliOutputFormat::Table => Self::Table,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "specrunner-args")]
#[command(about = "Normalize spec runner arguments into an option table")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse runner arguments given after `--` and print the option table.
    Parse(ParseArgs),
    /// List the accepted formatter values.
    Formatters(FormattersArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// YAML file with runner defaults applied before the arguments.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Runner arguments, optionally starting with the program path.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct FormattersArgs {
    /// Output format.
    #[arg(long, default_value = "table")]
    format: CliOutputFormat,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Formatters(args) => run_formatters(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let parser = match args.config {
        Some(ref path) => RunnerConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?
            .parser(),
        None => ArgumentParser::new(),
    };

    debug!(count = args.args.len(), "Parsing runner arguments");
    let table = parser.parse(args.args).map_err(|err| err.to_string())?;
    print!("{}", ensure_newline(format_options(&table, args.format.into())?));
    Ok(())
}

fn run_formatters(args: FormattersArgs) -> Result<(), String> {
    print!("{}", ensure_newline(format_formatters(args.format.into())?));
    Ok(())
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
