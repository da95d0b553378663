//! Callback factories for exercising callback-driven code in tests.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde::Serialize;

use crate::assertions::Asserter;
use crate::dispatch::Errback;
use crate::error_match::ErrorLike;
use crate::errors::Result;

/// Message used when a factory is not given an error.
pub const DEFAULT_ERROR_MESSAGE: &str = "an error occured";

/// Delay used by [`complete_via_callback`] and [`error_via_callback`].
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Completion handed to the delayed factories.
pub type Completion<T> = Box<dyn FnOnce(std::result::Result<T, ErrorLike>) + Send>;

fn error_or_default(error: Option<ErrorLike>) -> ErrorLike {
    error
        .unwrap_or_else(|| ErrorLike::message(DEFAULT_ERROR_MESSAGE))
        .into_error()
}

/// A callback returning `result` on every call.
pub fn return_via_callback<T: Clone>(result: T) -> impl Fn() -> T {
    move || result.clone()
}

/// A callback returning the error as a value. Bare messages are promoted to
/// errors.
pub fn return_error_via_callback(error: Option<ErrorLike>) -> impl Fn() -> ErrorLike {
    let error = error_or_default(error);
    move || error.clone()
}

/// A callback that fails with the error on every call.
pub fn throw_error_via_callback<T>(
    error: Option<ErrorLike>,
) -> impl Fn() -> std::result::Result<T, ErrorLike> {
    let error = error_or_default(error);
    move || Err(error.clone())
}

/// A callback that, given a completion, hands it `Ok(result)` from a
/// separate thread after `delay`.
///
/// ```
/// use assert_helpers_core::callbacks::{complete_via_callback, Completion};
/// use assert_helpers_core::ErrorLike;
/// use std::sync::mpsc;
/// use std::time::Duration;
///
/// let (tx, rx) = mpsc::channel();
/// let start = complete_via_callback(5, Duration::from_millis(1));
/// let completion: Completion<i32> = Box::new(move |outcome: Result<i32, ErrorLike>| {
///     tx.send(outcome).ok();
/// });
/// start(completion).join().unwrap();
/// assert_eq!(rx.recv().unwrap(), Ok(5));
/// ```
pub fn complete_via_callback<T>(
    result: T,
    delay: Duration,
) -> impl FnOnce(Completion<T>) -> JoinHandle<()>
where
    T: Send + 'static,
{
    move |complete| delayed(delay, move || complete(Ok(result)))
}

/// Like [`complete_via_callback`], handing the completion `Err(error)`.
pub fn error_via_callback<T>(
    error: ErrorLike,
    delay: Duration,
) -> impl FnOnce(Completion<T>) -> JoinHandle<()>
where
    T: Send + 'static,
{
    let error = error.into_error();
    move |complete| delayed(delay, move || complete(Err(error)))
}

fn delayed(delay: Duration, f: impl FnOnce() + Send + 'static) -> JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(delay);
        f();
    })
}

impl Asserter {
    /// A callback that deep-equals the value it receives against `expected`.
    ///
    /// Tuples serialize as arrays, so several arguments can be checked at
    /// once.
    pub fn expect_via_callback<T>(&self, expected: T) -> impl FnOnce(T) -> Result<()>
    where
        T: Serialize,
    {
        let asserter = self.clone();
        move |actual| asserter.deep_equal(&actual, &expected, None, None)
    }

    /// A callback that error-equals the error it receives against `expected`.
    pub fn expect_error_via_callback<'a>(
        &self,
        expected: Option<ErrorLike>,
        test_name: Option<&'a str>,
        next: Option<Errback<'a>>,
    ) -> impl FnOnce(Option<ErrorLike>) -> Result<()> + 'a {
        let asserter = self.clone();
        let name = test_name.unwrap_or("expect error via callback assertion");
        move |actual| {
            asserter.error_equal(actual.as_ref(), expected.as_ref(), Some(name), next)
        }
    }

    /// Run `f` and error-equal its error, if any, against `expected`.
    ///
    /// # Errors
    ///
    /// Returns the mismatch when no `next` was supplied.
    pub fn expect_error_via_function<T, E, F>(
        &self,
        expected: Option<ErrorLike>,
        f: F,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()>
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: std::error::Error + 'static,
    {
        let actual = f().err().map(|err| ErrorLike::from_error(&err));
        let name = test_name.unwrap_or("expect error via function assertion");
        self.error_equal(actual.as_ref(), expected.as_ref(), Some(name), next)
    }
}

/// [`Asserter::expect_via_callback`] with the process context.
pub fn expect_via_callback<T: Serialize>(expected: T) -> impl FnOnce(T) -> Result<()> {
    Asserter::process().expect_via_callback(expected)
}

/// [`Asserter::expect_error_via_callback`] with the process context.
pub fn expect_error_via_callback<'a>(
    expected: Option<ErrorLike>,
    test_name: Option<&'a str>,
    next: Option<Errback<'a>>,
) -> impl FnOnce(Option<ErrorLike>) -> Result<()> + 'a {
    Asserter::process().expect_error_via_callback(expected, test_name, next)
}

/// [`Asserter::expect_error_via_function`] with the process context.
///
/// # Errors
///
/// See [`Asserter::expect_error_via_function`].
pub fn expect_error_via_function<T, E, F>(
    expected: Option<ErrorLike>,
    f: F,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()>
where
    F: FnOnce() -> std::result::Result<T, E>,
    E: std::error::Error + 'static,
{
    Asserter::process().expect_error_via_function(expected, f, test_name, next)
}

/// Former name of [`expect_error_via_function`].
///
/// # Errors
///
/// See [`Asserter::expect_error_via_function`].
#[deprecated(note = "use `expect_error_via_function`")]
pub fn expect_throw_via_function<T, E, F>(
    expected: Option<ErrorLike>,
    f: F,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()>
where
    F: FnOnce() -> std::result::Result<T, E>,
    E: std::error::Error + 'static,
{
    expect_error_via_function(expected, f, test_name, next)
}
