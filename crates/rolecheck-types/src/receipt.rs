use crate::SourcePath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for rolecheck reports.
pub const SCHEMA_REPORT_V1: &str = "rolecheck.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    Lenient,
    Robust,
}

/// Overall result of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Every policy validated `true`.
    Pass,
    /// At least one policy validated `false` or was rejected.
    Fail,
    /// At least one input could not be parsed.
    Error,
}

impl Verdict {
    /// Fold per-policy outcomes into one verdict. `Error` dominates `Fail`.
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a Outcome>,
    {
        let mut verdict = Verdict::Pass;
        for outcome in outcomes {
            match outcome {
                Outcome::Unparseable { .. } => return Verdict::Error,
                Outcome::Invalid | Outcome::Rejected { .. } => verdict = Verdict::Fail,
                Outcome::Valid => {}
            }
        }
        verdict
    }
}

/// Result of validating one policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// `validate` returned `true`.
    Valid,
    /// `validate` returned `false`.
    Invalid,
    /// Robust mode stopped at a schema violation.
    Rejected {
        check_id: String,
        code: String,
        message: String,
    },
    /// The input could not be turned into a role policy.
    Unparseable { code: String, message: String },
}

impl Outcome {
    /// Text rendering used by the CLI: `true`, `false`, or the error message.
    pub fn display_line(&self) -> String {
        match self {
            Outcome::Valid => "true".to_string(),
            Outcome::Invalid => "false".to_string(),
            Outcome::Rejected { message, .. } | Outcome::Unparseable { message, .. } => {
                message.clone()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyResult {
    pub source: SourcePath,
    /// Position inside a batch file; `None` for single-policy files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    pub outcome: Outcome,
}

impl PolicyResult {
    /// `source` or `source[index]`.
    pub fn label(&self) -> String {
        match self.index {
            Some(i) => format!("{}[{}]", self.source, i),
            None => self.source.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyReport {
    pub schema: String,
    pub tool: ToolMeta,
    pub mode: ReportMode,
    pub verdict: Verdict,
    pub results: Vec<PolicyResult>,
}
