//! Alternative-color scanning for failing checks.
//!
//! Given a fixed background and an ordered candidate list (callers rank
//! candidates by preference, e.g. visual closeness to the failing color),
//! keep the candidates that would pass the target classification.

use serde::Serialize;

use crate::color::ColorValue;
use crate::wcag::{TextClass, classify, contrast_ratio};

/// A named foreground candidate to evaluate against a background.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub color: ColorValue,
}

impl Candidate {
    pub fn new(name: impl Into<String>, color: ColorValue) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// A candidate that passed, annotated with its contrast ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub color: ColorValue,
    pub ratio: f64,
}

/// Return the ordered subsequence of `candidates` whose contrast against
/// `background` passes AA for `class`.
///
/// Candidates are evaluated in the order supplied; no reordering or
/// deduplication. An empty result means no compliant alternative exists in
/// the given set, which is a normal outcome rather than an error.
pub fn scan_alternatives(
    background: ColorValue,
    class: TextClass,
    candidates: &[Candidate],
) -> Vec<Suggestion> {
    candidates
        .iter()
        .filter_map(|candidate| {
            let ratio = contrast_ratio(candidate.color, background);
            classify(ratio, class).is_pass().then(|| Suggestion {
                name: candidate.name.clone(),
                color: candidate.color,
                ratio,
            })
        })
        .collect()
}
