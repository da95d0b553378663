//! The pass/fail protocol shared by every assertion primitive.
//!
//! A primitive hands [`dispatch`] a check closure. On failure the dispatcher
//! writes the comparison report, then routes the error to the caller's
//! [`Errback`] if one was supplied or returns it otherwise. Exactly one of
//! the two happens.

use serde_json::Value;

use crate::context::Context;
use crate::errors::{AssertError, Result};
use crate::report::report;
use crate::{log_op_end, log_op_error, log_op_start};

/// Completion callback receiving the failure, or `None` on success.
pub type Errback<'a> = Box<dyn FnOnce(Option<AssertError>) + 'a>;

/// Box a closure as an [`Errback`].
///
/// ```
/// use assert_helpers_core::{equal, errback};
///
/// let mut seen = None;
/// equal(&1, &2, Some("x"), Some(errback(|err| seen = err))).unwrap();
/// assert!(seen.is_some());
/// ```
pub fn errback<'a, F>(f: F) -> Errback<'a>
where
    F: FnOnce(Option<AssertError>) + 'a,
{
    Box::new(f)
}

/// A failed check: the error plus the values shown in the report.
#[derive(Debug, Clone)]
pub struct Failure {
    pub error: AssertError,
    pub actual: Option<Value>,
    pub expected: Option<Value>,
}

impl Failure {
    pub fn new(error: AssertError) -> Self {
        Self {
            error,
            actual: None,
            expected: None,
        }
    }

    pub fn with_actual(mut self, actual: Value) -> Self {
        self.actual = Some(actual);
        self
    }

    pub fn with_expected(mut self, expected: Value) -> Self {
        self.expected = Some(expected);
        self
    }
}

impl From<AssertError> for Failure {
    fn from(error: AssertError) -> Self {
        Failure::new(error)
    }
}

/// Run `check` and apply the throw-or-callback protocol.
///
/// # Errors
///
/// Returns the failure when `check` fails and no `next` was supplied.
pub fn dispatch<F>(
    ctx: &Context,
    op: &'static str,
    test_name: &str,
    next: Option<Errback<'_>>,
    check: F,
) -> Result<()>
where
    F: FnOnce() -> std::result::Result<(), Failure>,
{
    log_op_start!(op, test_name = test_name);

    match check() {
        Ok(()) => {
            log_op_end!(op, test_name = test_name);
            if let Some(next) = next {
                next(None);
            }
            Ok(())
        }
        Err(failure) => {
            let error = failure.error.with_op(op);
            log_op_error!(op, error, test_name = test_name);
            report(failure.actual.as_ref(), failure.expected.as_ref(), &error, ctx);
            match next {
                Some(next) => {
                    next(Some(error));
                    Ok(())
                }
                None => Err(error),
            }
        }
    }
}
