use super::*;
use crate::error::TargetError;
use crate::scanner::Target;

fn result(path: &str, outcome: Outcome) -> TargetOutcome {
    TargetOutcome {
        target: Target::new(path),
        outcome,
    }
}

fn format(report: &BatchReport, verbose: u8) -> String {
    TextFormatter::with_verbose(ColorMode::Never, verbose)
        .format(report)
        .unwrap()
}

#[test]
fn lint_lists_missing_files() {
    let report = BatchReport::new(
        Mode::Lint,
        vec![
            result("src/a.js", Outcome::ReportedMissing),
            result("src/b.js", Outcome::AlreadyCompliant),
            result("src/c.js", Outcome::ReportedMissing),
        ],
    );

    let output = format(&report, 0);

    assert!(output.contains("✗ MISSING: src/a.js\n"));
    assert!(output.contains("✗ MISSING: src/c.js\n"));
    assert!(!output.contains("src/b.js"));
    assert_eq!(output.matches("MISSING").count(), 2);
    assert!(output.contains(
        "FAILED: 3 files checked, 1 compliant, 0 fixed, 2 without header, 0 failed\n"
    ));
    assert!(output.contains("help: re-run with --fix"));
}

#[test]
fn passing_lint_has_only_summary() {
    let report = BatchReport::new(
        Mode::Lint,
        vec![result("a.js", Outcome::AlreadyCompliant)],
    );

    let output = format(&report, 0);

    assert_eq!(
        output,
        "\nPASSED: 1 files checked, 1 compliant, 0 fixed, 0 without header, 0 failed\n"
    );
}

#[test]
fn verbose_lists_compliant_files() {
    let report = BatchReport::new(
        Mode::Lint,
        vec![result("a.js", Outcome::AlreadyCompliant)],
    );

    let output = format(&report, 1);

    assert!(output.contains("· OK: a.js\n"));
}

#[test]
fn fix_lists_fixed_files() {
    let report = BatchReport::new(
        Mode::Fix,
        vec![
            result("a.js", Outcome::Fixed),
            result("b.js", Outcome::AlreadyCompliant),
        ],
    );

    let output = format(&report, 0);

    assert!(output.contains("✓ FIXED: a.js\n"));
    assert!(output.contains("PASSED: 2 files checked, 1 compliant, 1 fixed"));
    assert!(!output.contains("help:"));
}

#[test]
fn failed_line_includes_reason() {
    let report = BatchReport::new(
        Mode::Fix,
        vec![result(
            "data.zzz",
            Outcome::Failed(TargetError::UnsupportedExtension(".zzz".to_string())),
        )],
    );

    let output = format(&report, 0);

    assert!(output.contains("✖ FAILED: data.zzz (no header template for extension .zzz)\n"));
    assert!(output.contains("0 without header, 1 failed"));
}

#[test]
fn empty_report() {
    let report = BatchReport::new(Mode::Lint, Vec::new());

    let output = format(&report, 0);

    assert_eq!(
        output,
        "PASSED: 0 files checked, 0 compliant, 0 fixed, 0 without header, 0 failed\n"
    );
}

#[test]
fn colors_applied_when_enabled() {
    let report = BatchReport::new(Mode::Lint, vec![result("a.js", Outcome::ReportedMissing)]);

    let output = TextFormatter::with_verbose(ColorMode::Always, 0)
        .format(&report)
        .unwrap();

    assert!(output.contains("\x1b[33mMISSING\x1b[0m"));
    assert!(output.contains("\x1b[31mFAILED\x1b[0m"));
}
