//! CLI entry point for rolecheck.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `rolecheck-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use rolecheck_app::{
    CheckInput, ExplainOutput, render_text, run_check, run_explain, serialize_report,
    verdict_exit_code,
};
use rolecheck_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "rolecheck",
    version,
    about = "Validate AWS IAM role policy documents"
)]
struct Cli {
    /// Policy JSON file, or a directory scanned recursively for `*.json` files.
    #[arg(required_unless_present_any = ["explain", "print_config_schema"])]
    path: Option<Utf8PathBuf>,

    /// Robust mode: report the first schema violation instead of `false`.
    #[arg(short, long)]
    robust: bool,

    /// Input shape (auto|single|many). `auto` treats a top-level array as a batch.
    #[arg(long)]
    input: Option<String>,

    /// Path to rolecheck config TOML. A missing file is allowed.
    #[arg(long, default_value = "rolecheck.toml")]
    config: Utf8PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Debug logging to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Explain a check_id (e.g. "statement.resource") or code (e.g. "wildcard_resource").
    #[arg(long, value_name = "ID", conflicts_with = "path")]
    explain: Option<String>,

    /// Print the JSON schema of rolecheck.toml.
    #[arg(long, conflicts_with_all = ["path", "explain"])]
    print_config_schema: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("rolecheck error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("rolecheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rolecheck=warn"))
    };

    // stdout carries results only.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    if cli.print_config_schema {
        println!("{}", rolecheck_settings::config_schema_json()?);
        return Ok(0);
    }
    if let Some(identifier) = cli.explain.as_deref() {
        return Ok(cmd_explain(identifier));
    }
    let path = cli.path.as_deref().context("missing policy path")?;
    cmd_check(cli, path)
}

fn cmd_check(cli: &Cli, path: &Utf8Path) -> anyhow::Result<i32> {
    let cfg_text = read_config(&cli.config)?;

    let overrides = Overrides {
        mode: cli.robust.then(|| "robust".to_string()),
        input: cli.input.clone(),
    };

    let output = run_check(CheckInput {
        path,
        config_text: &cfg_text,
        overrides,
    })?;

    tracing::debug!(
        mode = %output.resolved_config.effective.mode,
        input = output.resolved_config.effective.input.as_str(),
        "resolved config"
    );

    match cli.format {
        Format::Text => print!("{}", render_text(&output.report)),
        Format::Json => print!("{}", serialize_report(&output.report)?),
    }

    Ok(verdict_exit_code(output.report.verdict))
}

/// Load config if present; a missing file is allowed (defaults apply).
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(config = %path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found {
            identifier,
            explanation,
            surfaces,
        } => {
            print!(
                "{}",
                rolecheck_app::format_explanation(&identifier, &explanation, surfaces)
            );
            0
        }
        ExplainOutput::NotFound { identifier } => {
            eprint!("{}", rolecheck_app::format_not_found(&identifier));
            1
        }
    }
}
