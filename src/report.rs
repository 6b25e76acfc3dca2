//! Batch contrast checking against a palette registry.
//!
//! A report run is two-phase: every check is computed into an immutable
//! [`Report`] value first, and rendering happens elsewhere. Checks are
//! independent, so they are evaluated in parallel and reassembled in spec
//! order for deterministic output.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::palette::{PaletteRegistry, RegistryError, ThemeVariant};
use crate::scan::{Candidate, Suggestion, scan_alternatives};
use crate::wcag::{TextClass, Verdict, classify, contrast_ratio};

/// One foreground/background pair to check, by token name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSpec {
    /// Human-readable description for the report
    pub label: String,
    /// Foreground token name, resolved against the active registry
    pub foreground: String,
    /// Background token name, resolved against the active registry
    pub background: String,
    pub text_class: TextClass,
}

/// A computed check: ratio, the threshold it was held to, and the verdict.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub spec: CheckSpec,
    pub ratio: f64,
    pub threshold: f64,
    pub verdict: Verdict,
    /// Compliant alternatives for a failing check, when a scan was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

/// Outcome of a single check: a result, or a per-check error entry.
///
/// An unresolvable token fails only its own check; the rest of the report
/// still completes.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CheckOutcome {
    Result(CheckResult),
    Error { spec: CheckSpec, cause: RegistryError },
}

impl CheckOutcome {
    pub fn spec(&self) -> &CheckSpec {
        match self {
            Self::Result(result) => &result.spec,
            Self::Error { spec, .. } => spec,
        }
    }

    pub fn as_result(&self) -> Option<&CheckResult> {
        match self {
            Self::Result(result) => Some(result),
            Self::Error { .. } => None,
        }
    }
}

/// Pass/fail/error counts for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
}

/// Ordered check outcomes for one theme pass.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub variant: ThemeVariant,
    pub outcomes: Vec<CheckOutcome>,
    pub summary: Summary,
}

impl Report {
    /// Whether any check failed or errored.
    pub fn has_defects(&self) -> bool {
        self.summary.failed > 0 || self.summary.errors > 0
    }
}

fn summarize(variant: ThemeVariant, outcomes: Vec<CheckOutcome>) -> Report {
    let mut summary = Summary {
        total: outcomes.len(),
        passed: 0,
        failed: 0,
        errors: 0,
    };
    for outcome in &outcomes {
        match outcome {
            CheckOutcome::Result(result) if result.verdict.is_pass() => summary.passed += 1,
            CheckOutcome::Result(_) => summary.failed += 1,
            CheckOutcome::Error { .. } => summary.errors += 1,
        }
    }

    Report {
        variant,
        outcomes,
        summary,
    }
}

fn evaluate(
    registry: &PaletteRegistry,
    variant: ThemeVariant,
    spec: &CheckSpec,
) -> Result<CheckResult, RegistryError> {
    let foreground = registry.resolve(&spec.foreground, variant)?;
    let background = registry.resolve(&spec.background, variant)?;

    let ratio = contrast_ratio(foreground, background);
    let threshold = spec.text_class.threshold();
    let verdict = classify(ratio, spec.text_class);

    debug!(label = %spec.label, ratio, ?verdict, "check evaluated");

    Ok(CheckResult {
        spec: spec.clone(),
        ratio,
        threshold,
        verdict,
        suggestions: None,
    })
}

/// Run every check spec against the registry for one theme variant.
///
/// The registry must be fully built before the run begins and is treated as
/// a read-only snapshot throughout.
pub fn run_report(
    registry: &PaletteRegistry,
    variant: ThemeVariant,
    specs: &[CheckSpec],
) -> Report {
    let outcomes: Vec<CheckOutcome> = specs
        .par_iter()
        .map(|spec| match evaluate(registry, variant, spec) {
            Ok(result) => CheckOutcome::Result(result),
            Err(cause) => {
                warn!(
                    label = %spec.label,
                    fg = %spec.foreground,
                    bg = %spec.background,
                    %cause,
                    "check could not be resolved"
                );
                CheckOutcome::Error {
                    spec: spec.clone(),
                    cause,
                }
            }
        })
        .collect();

    summarize(variant, outcomes)
}

/// Scan the candidate list for each failing check and attach the compliant
/// alternatives to its result.
///
/// Checks whose background token cannot be resolved were already recorded as
/// error entries and are left untouched.
pub fn attach_suggestions(
    report: &mut Report,
    registry: &PaletteRegistry,
    candidates: &[Candidate],
) {
    for outcome in &mut report.outcomes {
        let CheckOutcome::Result(result) = outcome else {
            continue;
        };
        if result.verdict.is_pass() {
            continue;
        }

        // Result outcomes already resolved both tokens during evaluation.
        let Ok(background) = registry.resolve(&result.spec.background, report.variant) else {
            continue;
        };

        result.suggestions = Some(scan_alternatives(
            background,
            result.spec.text_class,
            candidates,
        ));
    }
}
