//! The `check` use case: read policy files, validate them, and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use rayon::prelude::*;
use rolecheck_domain::Mode;
use rolecheck_model::{ParseError, ParsedInput};
use rolecheck_settings::{EffectiveConfig, InputShape, Overrides, ResolvedConfig};
use rolecheck_types::{
    Outcome, PolicyReport, PolicyResult, ReportMode, SCHEMA_REPORT_V1, SourcePath, ToolMeta,
    Verdict, ids,
};

use crate::discover::discover_inputs;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// A policy file, or a directory scanned for `*.json` files.
    pub path: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: PolicyReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, discover inputs, validate every policy, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        rolecheck_settings::RolecheckConfigV1::default()
    } else {
        rolecheck_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = rolecheck_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    let effective = resolved.effective;

    let files = discover_inputs(input.path).context("discover policy files")?;
    if files.is_empty() {
        anyhow::bail!("no *.json policy files found under {}", input.path);
    }
    let is_dir = input.path.is_dir();

    let per_file = files
        .par_iter()
        .map(|file| -> anyhow::Result<Vec<PolicyResult>> {
            let text =
                std::fs::read_to_string(file).with_context(|| format!("read {}", file))?;
            let source = if is_dir {
                SourcePath::relative_to(file, input.path)
            } else {
                SourcePath::new(file.as_str())
            };
            Ok(validate_text(source, &text, &effective))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let results: Vec<PolicyResult> = per_file.into_iter().flatten().collect();
    let verdict = Verdict::from_outcomes(results.iter().map(|r| &r.outcome));

    tracing::info!(
        files = files.len(),
        policies = results.len(),
        mode = %effective.mode,
        ?verdict,
        "check finished"
    );

    let report = PolicyReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "rolecheck".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        mode: report_mode(effective.mode),
        verdict,
        results,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Parse one file's contents per the configured input shape and validate every policy in it.
///
/// Parse failures become a single `Unparseable` result for the whole file.
pub fn validate_text(
    source: SourcePath,
    text: &str,
    effective: &EffectiveConfig,
) -> Vec<PolicyResult> {
    let parsed = match effective.input {
        InputShape::Auto => rolecheck_model::parse_any(text),
        InputShape::Single => rolecheck_model::parse_one(text).map(ParsedInput::Single),
        InputShape::Many => rolecheck_model::parse_many(text).map(ParsedInput::Batch),
    };

    let parsed = match parsed {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!(source = %source, error = %err, "policy file not parseable");
            return vec![PolicyResult {
                source,
                index: None,
                policy_name: None,
                outcome: unparseable(&err),
            }];
        }
    };

    let batch = parsed.is_batch();
    parsed
        .into_policies()
        .into_iter()
        .enumerate()
        .map(|(i, policy)| {
            let outcome = match rolecheck_domain::validate(policy.as_ref(), effective.mode) {
                Ok(true) => Outcome::Valid,
                Ok(false) => Outcome::Invalid,
                Err(err) => Outcome::Rejected {
                    check_id: err.check_id().to_string(),
                    code: err.code().to_string(),
                    message: err.to_string(),
                },
            };
            PolicyResult {
                source: source.clone(),
                index: batch.then_some(i),
                policy_name: policy
                    .as_ref()
                    .and_then(|p| p.policy_name())
                    .map(str::to_string),
                outcome,
            }
        })
        .collect()
}

fn unparseable(err: &ParseError) -> Outcome {
    let code = match err {
        ParseError::Json(_) => ids::CODE_INVALID_JSON,
        ParseError::MalformedField(_) => ids::CODE_MALFORMED_FIELD,
    };
    Outcome::Unparseable {
        code: code.to_string(),
        message: err.to_string(),
    }
}

fn report_mode(mode: Mode) -> ReportMode {
    match mode {
        Mode::Lenient => ReportMode::Lenient,
        Mode::Robust => ReportMode::Robust,
    }
}

/// Map verdict to exit code: 0 = pass, 2 = policy failure, 1 = unparseable input.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
        Verdict::Error => 1,
    }
}
