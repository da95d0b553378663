#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Throw-or-callback exclusivity for every primitive.
//!
//! Each case is run three ways: without a callback (failure returned), with
//! a callback (failure handed over once, nothing returned) and passing (callback
//! invoked once with nothing).

mod common;

use assert_helpers_core::{AssertErrorKind, Asserter, ErrorLike, Errback, Result};
use common::{quiet_asserter, Calls};
use serde_json::json;

type Check = fn(&Asserter, Option<Errback<'_>>) -> Result<()>;

fn failing_cases() -> Vec<(&'static str, Check)> {
    let cases: &[(&str, Check)] = &[
        ("equal", |a, next| a.equal(&1, &2, None, next)),
        ("deep_equal", |a, next| {
            a.deep_equal(&json!({"a": 1}), &json!({"a": 2}), None, next)
        }),
        ("deep_equal", |a, next| {
            a.deep_equal(&f64::INFINITY, &f64::NEG_INFINITY, None, next)
        }),
        ("deep_equal", |a, next| a.deep_equal(&[f64::NAN], &json!([null]), None, next)),
        ("gt", |a, next| a.gt(&1, &2, None, next)),
        ("gte", |a, next| a.gte(&1, &2, None, next)),
        ("lt", |a, next| a.lt(&2, &1, None, next)),
        ("lte", |a, next| a.lte(&2, &1, None, next)),
        ("contains", |a, next| a.contains("ab", "c", None, next)),
        ("not_contains", |a, next| a.not_contains("ab", "a", None, next)),
        ("is_undefined", |a, next| a.is_undefined(Some(&1), None, next)),
        ("is_nullish", |a, next| a.is_nullish(Some(&1), None, next)),
        ("is_nullish", |a, next| a.is_nullish(Some(&f64::NAN), None, next)),
        ("error_equal", |a, next| {
            a.error_equal(Some(&ErrorLike::error("abc")), Some(&"xyz".into()), None, next)
        }),
    ];
    cases.to_vec()
}

fn passing_cases() -> Vec<(&'static str, Check)> {
    let cases: &[(&str, Check)] = &[
        ("equal", |a, next| a.equal(&1, &1, None, next)),
        ("deep_equal", |a, next| {
            a.deep_equal(&json!({"a": 1}), &json!({"a": 1}), None, next)
        }),
        ("deep_equal", |a, next| a.deep_equal(&[1, 2], &[1.0, 2.0], None, next)),
        ("gt", |a, next| a.gt(&2, &1, None, next)),
        ("gte", |a, next| a.gte(&1, &1, None, next)),
        ("lt", |a, next| a.lt(&1, &2, None, next)),
        ("lte", |a, next| a.lte(&1, &1, None, next)),
        ("contains", |a, next| a.contains("ab", "a", None, next)),
        ("not_contains", |a, next| a.not_contains("ab", "c", None, next)),
        ("is_undefined", |a, next| a.is_undefined::<i32>(None, None, next)),
        ("is_nullish", |a, next| a.is_nullish(Some(&json!(null)), None, next)),
        ("error_equal", |a, next| {
            a.error_equal(Some(&ErrorLike::error("abc")), Some(&"abc".into()), None, next)
        }),
    ];
    cases.to_vec()
}

#[test]
fn test_failure_without_callback_is_returned() {
    let (asserter, sink) = quiet_asserter();
    for (op, check) in failing_cases() {
        sink.clear();
        let err = check(&asserter, None).expect_err(op);
        assert_eq!(err.op(), Some(op));
        assert!(
            sink.diagnostic_text().contains("Comparison Error:"),
            "{} should write a report",
            op
        );
    }
}

#[test]
fn test_failure_with_callback_is_handed_over_not_returned() {
    let (asserter, _sink) = quiet_asserter();
    for (op, check) in failing_cases() {
        let calls = Calls::new();
        let result = check(&asserter, calls.errback());
        assert!(result.is_ok(), "{} returned its failure", op);
        assert!(calls.failed_once(), "{} did not call back exactly once", op);
    }
}

#[test]
fn test_success_calls_back_without_error() {
    let (asserter, sink) = quiet_asserter();
    for (op, check) in passing_cases() {
        let calls = Calls::new();
        assert!(check(&asserter, calls.errback()).is_ok(), "{} failed", op);
        assert!(calls.passed_once(), "{} did not call back once", op);
        assert!(check(&asserter, None).is_ok());
    }
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn test_equal_with_named_callback() {
    let (asserter, _sink) = quiet_asserter();
    let calls = Calls::new();
    assert!(asserter.equal(&1, &2, Some("x"), calls.errback()).is_ok());
    let errs = calls.take();
    let err = errs[0].as_ref().unwrap();
    assert_eq!(err.test_name(), "x");
    assert_eq!(err.kind(), AssertErrorKind::Mismatch);
}

#[test]
fn test_deep_equal_message_names_the_test() {
    let (asserter, _sink) = quiet_asserter();
    let err = asserter
        .deep_equal(&json!({"a": 1}), &json!({"a": 2}), Some("config matches"), None)
        .unwrap_err();
    assert!(err.to_string().contains("config matches"));
}

#[test]
fn test_nullish_failure_carries_both_causes() {
    let (asserter, sink) = quiet_asserter();
    let err = asserter.is_nullish(Some(&"set"), None, None).unwrap_err();
    assert_eq!(err.kind(), AssertErrorKind::Composite);
    assert_eq!(err.chain().count(), 3);
    let text = sink.diagnostic_text();
    assert!(text.contains("Caused by: [ERR_ASSERTION_MISMATCH] nullish assertion (unset)"));
    assert!(text.contains("Caused by: [ERR_ASSERTION_MISMATCH] nullish assertion (null)"));
}

#[test]
fn test_silence_does_not_swallow_failures() {
    let (asserter, sink) = quiet_asserter();
    let silent = Asserter::new(asserter.context().clone().with_silent(true));
    assert!(silent.equal(&1, &2, None, None).is_err());

    let calls = Calls::new();
    assert!(silent.equal(&1, &2, None, calls.errback()).is_ok());
    assert!(calls.failed_once());
    assert_eq!(calls.count(), 1);
    assert!(sink.diagnostics().is_empty());
}
