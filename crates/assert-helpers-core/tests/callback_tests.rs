#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::sync::mpsc;
use std::time::{Duration, Instant};

use assert_helpers_core::callbacks::{
    complete_via_callback, return_error_via_callback, throw_error_via_callback, Completion,
    DEFAULT_DELAY, DEFAULT_ERROR_MESSAGE,
};
use assert_helpers_core::{assert_contains, assert_deep_equal, assert_equal, ErrorLike};
use common::{quiet_asserter, Calls};

#[test]
fn test_complete_via_callback_waits_then_completes() {
    let (tx, rx) = mpsc::channel();
    let start = complete_via_callback("done".to_string(), DEFAULT_DELAY);
    let began = Instant::now();
    let completion: Completion<String> = Box::new(move |outcome: Result<String, ErrorLike>| {
        tx.send(outcome).ok();
    });
    let handle = start(completion);

    assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), Ok("done".to_string()));
    assert!(began.elapsed() >= DEFAULT_DELAY);
    handle.join().unwrap();
}

#[test]
fn test_thrown_default_error_is_expected_by_function() {
    let (asserter, _) = quiet_asserter();
    let calls = Calls::new();
    asserter
        .expect_error_via_function(
            Some(DEFAULT_ERROR_MESSAGE.into()),
            throw_error_via_callback::<u32>(None),
            None,
            calls.errback(),
        )
        .unwrap();
    assert!(calls.passed_once());
}

#[test]
fn test_returned_error_feeds_expect_error_via_callback() {
    let (asserter, _) = quiet_asserter();
    let produce = return_error_via_callback(Some(ErrorLike::coded("E_IO", "disk gone")));
    let check = asserter.expect_error_via_callback(
        Some(ErrorLike::coded("E_IO", "unrelated")),
        Some("io error"),
        None,
    );
    assert!(check(Some(produce())).is_ok());
}

#[test]
fn test_expect_via_callback_reports_mismatch() {
    let (asserter, sink) = quiet_asserter();
    let check = asserter.expect_via_callback(vec!["a", "b"]);
    let err = check(vec!["a"]).unwrap_err();
    assert_eq!(err.test_name(), "deep equal assertion");
    assert!(sink.diagnostic_text().contains("Comparison Expected:"));
}

#[test]
fn test_macros_pass() {
    assert_equal!(2 + 2, 4);
    assert_deep_equal!(vec![1, 2], [1, 2], "vectors");
    assert_contains!("needle in haystack", "needle");
    assert_contains!(&vec![1, 2, 3], &3);
}

#[test]
#[should_panic(expected = "[ERR_ASSERTION_MISMATCH] sums: expected 3 to equal 4")]
fn test_assert_equal_panics_with_failure() {
    assert_equal!(1 + 2, 4, "sums");
}

#[test]
#[should_panic(expected = "Expected `abc` to contain `z`")]
fn test_assert_contains_panics_with_failure() {
    assert_contains!("abc", "z");
}
