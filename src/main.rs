// SPDX-License-Identifier: MIT
//
// n-tokens: design token validator.
//
// This is the command-line front end for the n-token engine:
//
//   --tokens  → token source (JSON), or discovered under src/tokens/
//   --aliases → alias map (JSON)
//   --config  → optional TOML overriding categories, contrast rules and
//               the literal allow-list
//
// Each run flows through:
//
//   args → load alias map + config → validate_tokens → report → exit code
//
// Exit status: 0 clean, 1 findings, 2 inputs could not be loaded.
// The report goes to stdout; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use n_token::{SourceLocation, ValidationReport, ValidatorConfig, load_alias_map, validate_tokens};

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate design tokens against an alias map")]
struct Args {
    /// Token source JSON. Defaults to src/tokens/index.dtcg.json.
    #[arg(long)]
    tokens: Option<PathBuf>,

    /// Alias map JSON.
    #[arg(long)]
    aliases: PathBuf,

    /// Validator config TOML (categories, contrast rules, allow-list).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Args {
    fn source(&self) -> SourceLocation {
        self.tokens
            .clone()
            .map_or(SourceLocation::Discover, SourceLocation::File)
    }
}

/// Default log directive for a `-v` count. `RUST_LOG` still wins.
const fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

// ─── Run ────────────────────────────────────────────────────────────────────

fn run(args: &Args) -> Result<ValidationReport> {
    tracing::debug!(aliases = %args.aliases.display(), config = ?args.config, "starting validation");
    let aliases = load_alias_map(&args.aliases).context("failed to load alias map")?;
    let config = match &args.config {
        Some(path) => ValidatorConfig::load(path).context("failed to load validator config")?,
        None => ValidatorConfig::default(),
    };
    validate_tokens(&args.source(), &aliases, &config).context("failed to load token source")
}

fn render(report: &ValidationReport, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(report.to_string()),
        Format::Json => {
            let mut json = report.to_json().context("failed to serialize report")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(args.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let report = match run(&args) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("n-tokens: {e:#}");
            return ExitCode::from(2);
        }
    };

    match render(&report, args.format) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("n-tokens: {e:#}");
            return ExitCode::from(2);
        }
    }

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
