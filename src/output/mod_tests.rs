use super::*;
use crate::runner::{Mode, Outcome, TargetOutcome};
use crate::scanner::Target;

fn report_with(outcome: Outcome) -> BatchReport {
    BatchReport::new(
        Mode::Lint,
        vec![TargetOutcome {
            target: Target::new("a.js"),
            outcome,
        }],
    )
}

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("sarif".parse::<OutputFormat>().is_err());
}

#[test]
fn color_mode_explicit() {
    assert!(ColorMode::Always.should_use_colors());
    assert!(!ColorMode::Never.should_use_colors());
}

#[test]
fn emit_report_pass_exit_code() {
    let report = report_with(Outcome::AlreadyCompliant);
    let mut buf = Vec::new();

    let code = emit_report(&mut buf, &report, &TextFormatter::new(ColorMode::Never), false)
        .unwrap();

    assert_eq!(code, 0);
    assert!(String::from_utf8(buf).unwrap().contains("PASSED"));
}

#[test]
fn emit_report_fail_exit_code() {
    let report = report_with(Outcome::ReportedMissing);
    let mut buf = Vec::new();

    let code = emit_report(&mut buf, &report, &JsonFormatter, false).unwrap();

    assert_eq!(code, 1);
    assert!(String::from_utf8(buf).unwrap().contains("\"verdict\": \"fail\""));
}

#[test]
fn emit_report_quiet_writes_nothing() {
    let report = report_with(Outcome::ReportedMissing);
    let mut buf = Vec::new();

    let code = emit_report(&mut buf, &report, &TextFormatter::new(ColorMode::Never), true)
        .unwrap();

    assert_eq!(code, 1);
    assert!(buf.is_empty());
}
