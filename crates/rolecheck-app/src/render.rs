//! Render use cases: plain text lines and JSON from in-memory reports.

use anyhow::Context;
use rolecheck_types::PolicyReport;

/// One line per result: `true`, `false`, or the error message.
///
/// When the report holds more than one result, each line is prefixed with `<label>: ` so the
/// lines can be told apart.
pub fn render_text(report: &PolicyReport) -> String {
    let labelled = report.results.len() > 1;
    let mut out = String::new();
    for result in &report.results {
        if labelled {
            out.push_str(&result.label());
            out.push_str(": ");
        }
        out.push_str(&result.outcome.display_line());
        out.push('\n');
    }
    out
}

pub fn serialize_report(report: &PolicyReport) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(report).context("serialize report")?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolecheck_types::{
        Outcome, PolicyResult, ReportMode, SCHEMA_REPORT_V1, SourcePath, ToolMeta, Verdict,
    };

    fn report(results: Vec<PolicyResult>) -> PolicyReport {
        PolicyReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "rolecheck".to_string(),
                version: "0.0.0".to_string(),
            },
            mode: ReportMode::Robust,
            verdict: Verdict::from_outcomes(results.iter().map(|r| &r.outcome)),
            results,
        }
    }

    fn result(source: &str, index: Option<usize>, outcome: Outcome) -> PolicyResult {
        PolicyResult {
            source: SourcePath::new(source),
            index,
            policy_name: None,
            outcome,
        }
    }

    #[test]
    fn single_result_is_bare() {
        let r = report(vec![result("p.json", None, Outcome::Valid)]);
        assert_eq!(render_text(&r), "true\n");
    }

    #[test]
    fn multiple_results_are_labelled() {
        let r = report(vec![
            result("batch.json", Some(0), Outcome::Invalid),
            result(
                "batch.json",
                Some(1),
                Outcome::Rejected {
                    check_id: "statement.action".to_string(),
                    code: "action_missing".to_string(),
                    message: "At least one action has to be specified".to_string(),
                },
            ),
            result("other.json", None, Outcome::Valid),
        ]);
        assert_eq!(
            render_text(&r),
            "batch.json[0]: false\n\
             batch.json[1]: At least one action has to be specified\n\
             other.json: true\n"
        );
    }

    #[test]
    fn empty_report_renders_nothing() {
        assert_eq!(render_text(&report(Vec::new())), "");
    }

    #[test]
    fn json_report_round_trips_schema_and_verdict() {
        let r = report(vec![result("p.json", None, Outcome::Invalid)]);
        let text = serialize_report(&r).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&text).expect("parse");
        assert_eq!(value["schema"], SCHEMA_REPORT_V1);
        assert_eq!(value["mode"], "robust");
        assert_eq!(value["verdict"], "fail");
        assert_eq!(value["results"][0]["outcome"]["status"], "invalid");
        assert!(value["results"][0].get("index").is_none());
    }
}
