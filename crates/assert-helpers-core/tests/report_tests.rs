#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use assert_helpers_core::report::{compose, BANNER};
use assert_helpers_core::schema::{ENV_DIFF, ENV_SILENT};
use assert_helpers_core::{AssertError, Environment, Settings};
use common::{asserter_for, quiet_asserter};
use serde_json::json;

#[test]
fn test_report_for_failed_deep_equal() {
    let (asserter, sink) = quiet_asserter();
    asserter
        .deep_equal(&json!({"a": 1}), &json!({"a": 2}), Some("objects"), None)
        .unwrap_err();
    assert_eq!(
        sink.diagnostics(),
        vec![
            BANNER,
            "Comparison Error:",
            "[ERR_ASSERTION_MISMATCH] objects: expected { a: 1 } to deeply equal { a: 2 }",
            "",
            "Comparison Actual:",
            "{ a: 1 }",
            "",
            "Comparison Expected:",
            "{ a: 2 }",
            BANNER,
        ]
    );
}

#[test]
fn test_diff_variable_adds_diff_section() {
    let env = Environment::piped().with_var(ENV_DIFF, "yes");
    let (asserter, sink) = asserter_for(env);
    asserter.equal(&"abd", &"abc", None, None).unwrap_err();
    let lines = sink.diagnostics();
    let at = lines.iter().position(|l| l == "Comparison Diff:").unwrap();
    assert_eq!(lines[at + 1], "'ab[-c-]{+d+}'");
    assert_eq!(lines[at + 2], "");
    assert_eq!(lines[at + 3], "Comparison Actual:");
}

#[test]
fn test_silent_variable_suppresses_report() {
    let env = Environment::piped().with_var(ENV_SILENT, "true");
    let (asserter, sink) = asserter_for(env);
    assert!(asserter.equal(&1, &2, None, None).is_err());
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn test_colored_report_on_terminal() {
    let (asserter, sink) = asserter_for(Environment::interactive());
    asserter.equal(&1, &2, None, None).unwrap_err();
    let lines = sink.diagnostics();
    assert_eq!(lines[0], BANNER);
    assert!(lines[2].contains('\u{1b}'));
    assert!(lines[2].contains("expected 1 to equal 2"));
}

#[test]
fn test_no_colors_argument_keeps_terminal_report_plain() {
    let env = Environment::interactive().with_arg("--no-colors");
    let (asserter, sink) = asserter_for(env);
    asserter.equal(&1, &2, None, None).unwrap_err();
    assert!(!sink.diagnostic_text().contains('\u{1b}'));
}

#[test]
fn test_absent_values_render_as_undefined() {
    let settings = Settings {
        colors: false,
        silent: false,
        include_diff: true,
    };
    let lines = compose(None, Some(&json!(null)), &AssertError::mismatch("t"), &settings);
    assert!(!lines.iter().any(|l| l == "Comparison Diff:"));
    let at = lines.iter().position(|l| l == "Comparison Actual:").unwrap();
    assert_eq!(lines[at + 1], "undefined");
    assert_eq!(lines[at + 4], "null");
}

#[test]
fn test_log_goes_to_log_sink_only() {
    let (asserter, sink) = quiet_asserter();
    asserter.log(&[json!("x"), json!(3)]);
    assert_eq!(sink.logs(), vec!["'x'", "3"]);
    assert!(sink.diagnostics().is_empty());
}
