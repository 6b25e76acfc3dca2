//! Console and JSON rendering of completed reports.
//!
//! Rendering is strictly downstream of computation: it takes finished
//! [`Report`] values and never touches the registry or the calculators.

use crate::report::{CheckOutcome, Report};
use crate::wcag::Verdict;

const RULE_WIDTH: usize = 70;

/// Render one report as grouped console text.
pub fn render_text(report: &Report) -> String {
    let mut lines: Vec<String> = Vec::new();
    let rule = "=".repeat(RULE_WIDTH);

    lines.push(rule.clone());
    lines.push(format!("WCAG AA contrast report ({})", report.variant));
    lines.push(rule);

    for outcome in &report.outcomes {
        match outcome {
            CheckOutcome::Result(result) => {
                let tag = match result.verdict {
                    Verdict::Pass => "PASS",
                    Verdict::Fail => "FAIL",
                };
                lines.push(format!(
                    "{tag}  {}: {:.2}:1 ({} on {}) [requires {:.1}:1 for {}]",
                    result.spec.label,
                    result.ratio,
                    result.spec.foreground,
                    result.spec.background,
                    result.threshold,
                    result.spec.text_class,
                ));

                if let Some(suggestions) = &result.suggestions {
                    if suggestions.is_empty() {
                        lines.push("      no compliant alternative in candidate list".to_string());
                    }
                    for suggestion in suggestions {
                        lines.push(format!(
                            "      candidate {} {}: {:.2}:1",
                            suggestion.name, suggestion.color, suggestion.ratio
                        ));
                    }
                }
            }
            CheckOutcome::Error { spec, cause } => {
                lines.push(format!("ERROR {}: {}", spec.label, cause));
            }
        }
    }

    let summary = report.summary;
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(format!(
        "{} checks: {} passed, {} failed, {} errors",
        summary.total, summary.passed, summary.failed, summary.errors
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render a batch of reports (one per variant) as pretty JSON.
pub fn render_json(reports: &[Report]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
