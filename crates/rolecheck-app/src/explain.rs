//! The `explain` use case: describe a check ID or code and how it shows up in a report.

use rolecheck_types::explain::{self, Explanation};
use rolecheck_types::ids;

/// How a check ID or code surfaces in a report, per mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surfaces {
    /// Robust mode rejects; lenient mode does not look at the field.
    RobustOnly,
    /// Robust mode rejects; lenient mode returns `false`.
    Structural,
    /// `false` in both modes, never an error.
    Wildcard,
    /// The file cannot be read as a role policy; no mode applies.
    Unparseable,
}

impl Surfaces {
    pub fn of(identifier: &str) -> Option<Self> {
        let surfaces = match identifier {
            ids::CHECK_POLICY_NAME
            | ids::CODE_POLICY_NAME_MISSING
            | ids::CODE_POLICY_NAME_FORMAT
            | ids::CODE_POLICY_NAME_TOO_SHORT
            | ids::CODE_POLICY_NAME_TOO_LONG
            | ids::CHECK_DOCUMENT_VERSION
            | ids::CODE_VERSION_MISSING
            | ids::CODE_VERSION_UNSUPPORTED
            | ids::CHECK_STATEMENT_EFFECT
            | ids::CODE_EFFECT_MISSING
            | ids::CODE_EFFECT_INVALID
            | ids::CHECK_STATEMENT_PRINCIPAL
            | ids::CODE_PRINCIPAL_NOT_ALLOWED
            | ids::CHECK_STATEMENT_ACTION
            | ids::CODE_ACTION_MISSING => Surfaces::RobustOnly,
            ids::CHECK_POLICY_PRESENT
            | ids::CODE_ROLE_POLICY_MISSING
            | ids::CHECK_DOCUMENT_PRESENT
            | ids::CODE_POLICY_DOCUMENT_MISSING
            | ids::CHECK_DOCUMENT_STATEMENT
            | ids::CODE_STATEMENT_MISSING
            | ids::CHECK_STATEMENT_RESOURCE
            | ids::CODE_RESOURCE_MISSING => Surfaces::Structural,
            ids::CODE_WILDCARD_RESOURCE => Surfaces::Wildcard,
            ids::CHECK_INPUT_PARSE | ids::CODE_MALFORMED_FIELD | ids::CODE_INVALID_JSON => {
                Surfaces::Unparseable
            }
            _ => return None,
        };
        Some(surfaces)
    }

    /// Outcome status (`valid`/`invalid`/`rejected`/`unparseable`) in lenient and robust mode.
    pub fn statuses(self) -> (Option<&'static str>, &'static str) {
        match self {
            Surfaces::RobustOnly => (None, "rejected"),
            Surfaces::Structural => (Some("invalid"), "rejected"),
            Surfaces::Wildcard => (Some("invalid"), "invalid"),
            Surfaces::Unparseable => (Some("unparseable"), "unparseable"),
        }
    }
}

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found {
        identifier: String,
        explanation: Explanation,
        surfaces: Surfaces,
    },
    NotFound { identifier: String },
}

/// Look up an explanation for a check_id or code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let identifier = identifier.trim().to_string();
    match (
        explain::lookup_explanation(&identifier),
        Surfaces::of(&identifier),
    ) {
        (Some(explanation), Some(surfaces)) => ExplainOutput::Found {
            identifier,
            explanation,
            surfaces,
        },
        _ => ExplainOutput::NotFound { identifier },
    }
}

/// Terminal rendering: heading, report statuses, description, fix, then the two policy
/// fragments as JSON blocks.
pub fn format_explanation(identifier: &str, exp: &Explanation, surfaces: Surfaces) -> String {
    let (lenient, robust) = surfaces.statuses();
    let heading = format!("{identifier}: {}", exp.title);

    let mut lines = vec![
        heading.clone(),
        "-".repeat(heading.chars().count()),
        String::new(),
        format!("  lenient: {}", lenient.unwrap_or("not checked")),
        format!("  robust:  {robust}"),
        String::new(),
        exp.description.to_string(),
        String::new(),
        "How to fix:".to_string(),
        exp.remediation.to_string(),
    ];
    for (label, fragment) in [
        ("Triggers it:", exp.examples.before),
        ("Passes:", exp.examples.after),
    ] {
        lines.push(String::new());
        lines.push(label.to_string());
        lines.push("```json".to_string());
        lines.push(fragment.to_string());
        lines.push("```".to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Message for an identifier missing from the registry, listing every known one.
pub fn format_not_found(identifier: &str) -> String {
    format!(
        "unknown check id or code: {identifier}\n\ncheck ids: {}\ncodes: {}\n",
        explain::all_check_ids().join(", "),
        explain::all_codes().join(", "),
    )
}
