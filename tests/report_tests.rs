use approx::assert_relative_eq;
use contrast_check::color::ColorValue;
use contrast_check::palette::{PaletteRegistry, RegistryError, ThemeVariant};
use contrast_check::report::{CheckOutcome, CheckSpec, attach_suggestions, run_report};
use contrast_check::scan::Candidate;
use contrast_check::wcag::{TextClass, Verdict};

fn color(hex: &str) -> ColorValue {
    ColorValue::parse(hex).unwrap()
}

fn registry() -> PaletteRegistry {
    let mut registry = PaletteRegistry::new();
    registry
        .register("background", color("#FAFAFA"), Some(color("#09090B")))
        .unwrap();
    registry
        .register("text-primary", color("#18181B"), Some(color("#F4F4F5")))
        .unwrap();
    registry
        .register("accent", color("#CA8A04"), Some(color("#FACC15")))
        .unwrap();
    registry
        .register("accent-surface", color("#FACC15"), None)
        .unwrap();
    registry
}

fn spec(label: &str, fg: &str, bg: &str, class: TextClass) -> CheckSpec {
    CheckSpec {
        label: label.to_string(),
        foreground: fg.to_string(),
        background: bg.to_string(),
        text_class: class,
    }
}

#[test]
fn test_results_in_spec_order() {
    let specs = vec![
        spec("first", "text-primary", "background", TextClass::Normal),
        spec("second", "accent", "background", TextClass::Normal),
        spec("third", "accent", "background", TextClass::Large),
    ];

    let report = run_report(&registry(), ThemeVariant::Light, &specs);

    let labels: Vec<&str> = report
        .outcomes
        .iter()
        .map(|o| o.spec().label.as_str())
        .collect();
    assert_eq!(labels, ["first", "second", "third"]);
}

#[test]
fn test_light_variant_verdicts() {
    let specs = vec![
        spec("primary text", "text-primary", "background", TextClass::Normal),
        spec("accent text", "accent", "background", TextClass::Normal),
    ];

    let report = run_report(&registry(), ThemeVariant::Light, &specs);

    let primary = report.outcomes[0].as_result().unwrap();
    assert_relative_eq!(primary.ratio, 16.97, epsilon = 0.01);
    assert_eq!(primary.threshold, 4.5);
    assert_eq!(primary.verdict, Verdict::Pass);

    // yellow-600 on zinc-50 misses even the large-text threshold
    let accent = report.outcomes[1].as_result().unwrap();
    assert_relative_eq!(accent.ratio, 2.81, epsilon = 0.01);
    assert_eq!(accent.verdict, Verdict::Fail);
}

#[test]
fn test_unknown_token_does_not_abort_report() {
    let specs = vec![
        spec("valid", "text-primary", "background", TextClass::Normal),
        spec("broken", "nonexistent", "background", TextClass::Normal),
        spec("also valid", "accent", "background", TextClass::Large),
    ];

    let report = run_report(&registry(), ThemeVariant::Light, &specs);

    assert_eq!(report.outcomes.len(), 3);
    assert!(report.outcomes[0].as_result().is_some());
    assert!(report.outcomes[2].as_result().is_some());

    match &report.outcomes[1] {
        CheckOutcome::Error { spec, cause } => {
            assert_eq!(spec.label, "broken");
            assert_eq!(
                *cause,
                RegistryError::UnknownToken("nonexistent".to_string())
            );
        }
        CheckOutcome::Result(_) => panic!("expected error entry"),
    }

    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.errors, 1);
}

#[test]
fn test_missing_variant_recorded_per_check() {
    let specs = vec![
        spec("surface", "accent-surface", "background", TextClass::Large),
        spec("primary", "text-primary", "background", TextClass::Normal),
    ];

    // accent-surface has no dark value
    let report = run_report(&registry(), ThemeVariant::Dark, &specs);

    assert!(matches!(
        report.outcomes[0],
        CheckOutcome::Error {
            cause: RegistryError::MissingVariant { .. },
            ..
        }
    ));
    assert!(report.outcomes[1].as_result().is_some());
}

#[test]
fn test_summary_counts() {
    let specs = vec![
        spec("pass", "text-primary", "background", TextClass::Normal),
        spec("fail", "accent", "background", TextClass::Normal),
        spec("error", "bogus", "background", TextClass::Normal),
    ];

    let report = run_report(&registry(), ThemeVariant::Light, &specs);

    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.passed, 1);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.errors, 1);
    assert!(report.has_defects());
}

#[test]
fn test_all_passing_report_has_no_defects() {
    let specs = vec![spec("primary", "text-primary", "background", TextClass::Normal)];
    let report = run_report(&registry(), ThemeVariant::Light, &specs);
    assert!(!report.has_defects());
}

#[test]
fn test_suggestions_attached_to_failing_checks_only() {
    let specs = vec![
        spec("pass", "text-primary", "background", TextClass::Normal),
        spec("fail", "accent", "background", TextClass::Normal),
    ];
    let registry = registry();
    let mut report = run_report(&registry, ThemeVariant::Light, &specs);

    let candidates = vec![
        Candidate::new("yellow-500", color("#EAB308")),
        Candidate::new("yellow-700", color("#A16207")),
    ];
    attach_suggestions(&mut report, &registry, &candidates);

    assert!(report.outcomes[0].as_result().unwrap().suggestions.is_none());

    let suggestions = report.outcomes[1]
        .as_result()
        .unwrap()
        .suggestions
        .as_ref()
        .unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "yellow-700");
}

#[test]
fn test_failing_check_with_no_alternatives_gets_empty_list() {
    let specs = vec![spec("fail", "accent", "background", TextClass::Normal)];
    let registry = registry();
    let mut report = run_report(&registry, ThemeVariant::Light, &specs);

    attach_suggestions(&mut report, &registry, &[]);

    let suggestions = report.outcomes[0]
        .as_result()
        .unwrap()
        .suggestions
        .as_ref()
        .unwrap();
    assert!(suggestions.is_empty());
}
