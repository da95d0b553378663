//! Assertion primitives.
//!
//! Every primitive evaluates its predicate inside [`dispatch`], so they all
//! share the same report and throw-or-callback behavior. [`Asserter`] binds
//! them to a [`Context`]; the free functions use [`Asserter::process`].

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use serde::Serialize;
use serde_json::Value;

use crate::context::Context;
use crate::dispatch::{dispatch, Errback, Failure};
use crate::error_match::{errors_match, ErrorLike};
use crate::errors::{AssertError, AssertErrorKind, Result};
use crate::inspect::{inspect_plain, to_value, to_value_lossy};
use crate::report::log_values;

/// Membership test used by `contains` and `not_contains`.
pub trait Container<N: ?Sized> {
    fn contains_item(&self, needle: &N) -> bool;
}

impl Container<str> for str {
    fn contains_item(&self, needle: &str) -> bool {
        self.contains(needle)
    }
}

impl Container<str> for String {
    fn contains_item(&self, needle: &str) -> bool {
        self.contains(needle)
    }
}

impl<T: PartialEq> Container<T> for [T] {
    fn contains_item(&self, needle: &T) -> bool {
        self.contains(needle)
    }
}

impl<T: PartialEq> Container<T> for Vec<T> {
    fn contains_item(&self, needle: &T) -> bool {
        self.as_slice().contains(needle)
    }
}

impl<T: Ord> Container<T> for BTreeSet<T> {
    fn contains_item(&self, needle: &T) -> bool {
        self.contains(needle)
    }
}

impl<T: Eq + Hash> Container<T> for HashSet<T> {
    fn contains_item(&self, needle: &T) -> bool {
        self.contains(needle)
    }
}

impl<K: Ord, V> Container<K> for BTreeMap<K, V> {
    fn contains_item(&self, needle: &K) -> bool {
        self.contains_key(needle)
    }
}

impl<K: Eq + Hash, V> Container<K> for HashMap<K, V> {
    fn contains_item(&self, needle: &K) -> bool {
        self.contains_key(needle)
    }
}

/// Strings contain substrings, arrays contain elements and objects contain
/// keys.
impl Container<Value> for Value {
    fn contains_item(&self, needle: &Value) -> bool {
        match (self, needle) {
            (Value::String(haystack), Value::String(needle)) => haystack.contains(needle.as_str()),
            (Value::Array(items), needle) => items.contains(needle),
            (Value::Object(map), Value::String(key)) => map.contains_key(key),
            _ => false,
        }
    }
}

/// Assertion primitives bound to one [`Context`].
#[derive(Debug, Clone, Default)]
pub struct Asserter {
    ctx: Context,
}

impl Asserter {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Live process environment, reports to stdio
    pub fn process() -> Self {
        Self::new(Context::process())
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Strict equality through `PartialEq`.
    ///
    /// # Errors
    ///
    /// Returns the mismatch when the values differ and no `next` was supplied.
    pub fn equal<T>(
        &self,
        actual: &T,
        expected: &T,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()>
    where
        T: PartialEq + Serialize + ?Sized,
    {
        let name = test_name.unwrap_or("equal assertion");
        dispatch(&self.ctx, "equal", name, next, || {
            if actual == expected {
                return Ok(());
            }
            Err(mismatch(name, "to equal", actual, expected))
        })
    }

    /// Structural equality over the serialized values.
    ///
    /// Numbers compare by numeric value, so `1` deep-equals `1.0`. Values
    /// holding a NaN or infinite float have no structural form and fail with
    /// [`AssertErrorKind::Serialization`].
    ///
    /// # Errors
    ///
    /// Returns the mismatch, or a serialization failure, when no `next` was
    /// supplied.
    pub fn deep_equal<A, E>(
        &self,
        actual: &A,
        expected: &E,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()>
    where
        A: Serialize + ?Sized,
        E: Serialize + ?Sized,
    {
        let name = test_name.unwrap_or("deep equal assertion");
        dispatch(&self.ctx, "deep_equal", name, next, || {
            let (actual_value, expected_value) = match (to_value(actual), to_value(expected)) {
                (Ok(a), Ok(e)) => (a, e),
                (Err(err), _) | (_, Err(err)) => {
                    return Err(Failure::new(err.with_test_name(name))
                        .with_actual(to_value_lossy(actual))
                        .with_expected(to_value_lossy(expected)));
                }
            };
            if same_value(&actual_value, &expected_value) {
                return Ok(());
            }
            Err(mismatch(name, "to deeply equal", &actual_value, &expected_value))
        })
    }

    /// # Errors
    ///
    /// Returns the mismatch unless `actual > expected` and no `next` was supplied.
    pub fn gt<T>(
        &self,
        actual: &T,
        expected: &T,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()>
    where
        T: PartialOrd + Serialize + ?Sized,
    {
        self.ordering(
            "gt",
            "to be greater than",
            actual > expected,
            actual,
            expected,
            test_name,
            next,
        )
    }

    /// # Errors
    ///
    /// Returns the mismatch unless `actual >= expected` and no `next` was supplied.
    pub fn gte<T>(
        &self,
        actual: &T,
        expected: &T,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()>
    where
        T: PartialOrd + Serialize + ?Sized,
    {
        self.ordering(
            "gte",
            "to be greater than or equal to",
            actual >= expected,
            actual,
            expected,
            test_name,
            next,
        )
    }

    /// # Errors
    ///
    /// Returns the mismatch unless `actual < expected` and no `next` was supplied.
    pub fn lt<T>(
        &self,
        actual: &T,
        expected: &T,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()>
    where
        T: PartialOrd + Serialize + ?Sized,
    {
        self.ordering(
            "lt",
            "to be less than",
            actual < expected,
            actual,
            expected,
            test_name,
            next,
        )
    }

    /// # Errors
    ///
    /// Returns the mismatch unless `actual <= expected` and no `next` was supplied.
    pub fn lte<T>(
        &self,
        actual: &T,
        expected: &T,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()>
    where
        T: PartialOrd + Serialize + ?Sized,
    {
        self.ordering(
            "lte",
            "to be less than or equal to",
            actual <= expected,
            actual,
            expected,
            test_name,
            next,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn ordering<T>(
        &self,
        op: &'static str,
        relation: &str,
        holds: bool,
        actual: &T,
        expected: &T,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let default_name = format!("{} assertion", op);
        let name = test_name.unwrap_or(&default_name);
        dispatch(&self.ctx, op, name, next, || {
            if holds {
                return Ok(());
            }
            Err(mismatch(name, relation, actual, expected))
        })
    }

    /// Substring or membership test.
    ///
    /// ```
    /// use assert_helpers_core::Asserter;
    ///
    /// let asserter = Asserter::process();
    /// assert!(asserter.contains("ab", "a", None, None).is_ok());
    /// assert!(asserter.contains(&vec![1, 2], &2, None, None).is_ok());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the mismatch when `needle` is missing and no `next` was supplied.
    pub fn contains<C, N>(
        &self,
        haystack: &C,
        needle: &N,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()>
    where
        C: Container<N> + Serialize + ?Sized,
        N: Serialize + ?Sized,
    {
        let name = test_name.unwrap_or("contains assertion");
        dispatch(&self.ctx, "contains", name, next, || {
            if haystack.contains_item(needle) {
                return Ok(());
            }
            Err(membership(name, "to contain", haystack, needle))
        })
    }

    /// # Errors
    ///
    /// Returns the mismatch when `needle` is present and no `next` was supplied.
    pub fn not_contains<C, N>(
        &self,
        haystack: &C,
        needle: &N,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()>
    where
        C: Container<N> + Serialize + ?Sized,
        N: Serialize + ?Sized,
    {
        let name = test_name.unwrap_or("not contains assertion");
        dispatch(&self.ctx, "not_contains", name, next, || {
            if !haystack.contains_item(needle) {
                return Ok(());
            }
            Err(membership(name, "not to contain", haystack, needle))
        })
    }

    /// Passes when no value was supplied.
    ///
    /// # Errors
    ///
    /// Returns the mismatch when a value is present and no `next` was supplied.
    pub fn is_undefined<T>(
        &self,
        actual: Option<&T>,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let name = test_name.unwrap_or("undefined assertion");
        dispatch(&self.ctx, "is_undefined", name, next, || match actual {
            None => Ok(()),
            Some(value) => Err(unset_failure(name, &to_value_lossy(value))),
        })
    }

    /// Passes when no value was supplied or the value serializes to `null`.
    ///
    /// On failure the error is a composite whose causes are the "unset" and
    /// "null" sub-failures, in that order.
    ///
    /// # Errors
    ///
    /// Returns the composite when the value is present and not null and no
    /// `next` was supplied.
    pub fn is_nullish<T>(
        &self,
        actual: Option<&T>,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let name = test_name.unwrap_or("nullish assertion");
        dispatch(&self.ctx, "is_nullish", name, next, || {
            let value = match actual {
                None => return Ok(()),
                Some(value) => to_value_lossy(value),
            };
            if value.is_null() {
                return Ok(());
            }
            let rendered = inspect_plain(&value);
            let null = AssertError::mismatch(format!("{} (null)", name))
                .with_message(format!("expected {} to be null", rendered))
                .with_actual(rendered.clone())
                .with_expected("null");
            let unset = unset_failure(&format!("{} (unset)", name), &value)
                .error
                .with_source(null);
            let composite = AssertError::new(AssertErrorKind::Composite)
                .with_test_name(name)
                .with_message(format!("expected {} to be undefined or null", rendered))
                .with_actual(rendered)
                .with_source(unset);
            Err(Failure::new(composite).with_actual(value))
        })
    }

    /// Layered error equality, see [`crate::error_match`].
    ///
    /// # Errors
    ///
    /// Returns an [`AssertErrorKind::ErrorMismatch`] failure when the errors
    /// do not match and no `next` was supplied.
    pub fn error_equal(
        &self,
        actual: Option<&ErrorLike>,
        expected: Option<&ErrorLike>,
        test_name: Option<&str>,
        next: Option<Errback<'_>>,
    ) -> Result<()> {
        let name = test_name.unwrap_or("error equal assertion");
        dispatch(&self.ctx, "error_equal", name, next, || {
            if errors_match(actual, expected) {
                return Ok(());
            }
            let actual_value = error_value(actual);
            let expected_value = error_value(expected);
            let error = AssertError::new(AssertErrorKind::ErrorMismatch)
                .with_test_name(name)
                .with_message(format!(
                    "expected error {} to match {}",
                    inspect_plain(&actual_value),
                    inspect_plain(&expected_value)
                ))
                .with_actual(inspect_plain(&actual_value))
                .with_expected(inspect_plain(&expected_value));
            Err(Failure::new(error)
                .with_actual(actual_value)
                .with_expected(expected_value))
        })
    }

    /// Inspect each value to the general log sink.
    pub fn log(&self, values: &[Value]) {
        log_values(values, &self.ctx);
    }
}

fn mismatch<A, E>(name: &str, relation: &str, actual: &A, expected: &E) -> Failure
where
    A: Serialize + ?Sized,
    E: Serialize + ?Sized,
{
    let actual = to_value_lossy(actual);
    let expected = to_value_lossy(expected);
    let (a, e) = (inspect_plain(&actual), inspect_plain(&expected));
    let error = AssertError::mismatch(name)
        .with_message(format!("expected {} {} {}", a, relation, e))
        .with_actual(a)
        .with_expected(e);
    Failure::new(error).with_actual(actual).with_expected(expected)
}

fn membership<C, N>(name: &str, relation: &str, haystack: &C, needle: &N) -> Failure
where
    C: Serialize + ?Sized,
    N: Serialize + ?Sized,
{
    let haystack = to_value_lossy(haystack);
    let needle = to_value_lossy(needle);
    let error = AssertError::mismatch(name)
        .with_message(format!(
            "Expected `{}` {} `{}`",
            bare(&haystack),
            relation,
            bare(&needle)
        ))
        .with_actual(inspect_plain(&haystack))
        .with_expected(inspect_plain(&needle));
    Failure::new(error).with_actual(haystack).with_expected(needle)
}

fn unset_failure(label: &str, value: &Value) -> Failure {
    let rendered = inspect_plain(value);
    let error = AssertError::mismatch(label)
        .with_message(format!("expected {} to be undefined", rendered))
        .with_actual(rendered);
    Failure::new(error).with_actual(value.clone())
}

fn error_value(error: Option<&ErrorLike>) -> Value {
    match error {
        Some(error) => Value::String(error.text().to_string()),
        None => Value::Null,
    }
}

/// Structural equality where integers and floats of the same numeric value
/// are equal
fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            x == y || ((x.is_f64() || y.is_f64()) && x.as_f64() == y.as_f64())
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_value(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| same_value(x, y)))
        }
        _ => a == b,
    }
}

/// Strings without quotes, everything else inspected
fn bare(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => inspect_plain(other),
    }
}

/// Strict equality with the process context.
///
/// # Errors
///
/// See [`Asserter::equal`].
pub fn equal<T>(
    actual: &T,
    expected: &T,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()>
where
    T: PartialEq + Serialize + ?Sized,
{
    Asserter::process().equal(actual, expected, test_name, next)
}

/// Structural equality with the process context.
///
/// # Errors
///
/// See [`Asserter::deep_equal`].
pub fn deep_equal<A, E>(
    actual: &A,
    expected: &E,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()>
where
    A: Serialize + ?Sized,
    E: Serialize + ?Sized,
{
    Asserter::process().deep_equal(actual, expected, test_name, next)
}

/// # Errors
///
/// See [`Asserter::gt`].
pub fn gt<T>(
    actual: &T,
    expected: &T,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()>
where
    T: PartialOrd + Serialize + ?Sized,
{
    Asserter::process().gt(actual, expected, test_name, next)
}

/// # Errors
///
/// See [`Asserter::gte`].
pub fn gte<T>(
    actual: &T,
    expected: &T,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()>
where
    T: PartialOrd + Serialize + ?Sized,
{
    Asserter::process().gte(actual, expected, test_name, next)
}

/// # Errors
///
/// See [`Asserter::lt`].
pub fn lt<T>(
    actual: &T,
    expected: &T,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()>
where
    T: PartialOrd + Serialize + ?Sized,
{
    Asserter::process().lt(actual, expected, test_name, next)
}

/// # Errors
///
/// See [`Asserter::lte`].
pub fn lte<T>(
    actual: &T,
    expected: &T,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()>
where
    T: PartialOrd + Serialize + ?Sized,
{
    Asserter::process().lte(actual, expected, test_name, next)
}

/// # Errors
///
/// See [`Asserter::contains`].
pub fn contains<C, N>(
    haystack: &C,
    needle: &N,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()>
where
    C: Container<N> + Serialize + ?Sized,
    N: Serialize + ?Sized,
{
    Asserter::process().contains(haystack, needle, test_name, next)
}

/// # Errors
///
/// See [`Asserter::not_contains`].
pub fn not_contains<C, N>(
    haystack: &C,
    needle: &N,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()>
where
    C: Container<N> + Serialize + ?Sized,
    N: Serialize + ?Sized,
{
    Asserter::process().not_contains(haystack, needle, test_name, next)
}

/// # Errors
///
/// See [`Asserter::is_undefined`].
pub fn is_undefined<T>(
    actual: Option<&T>,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()>
where
    T: Serialize + ?Sized,
{
    Asserter::process().is_undefined(actual, test_name, next)
}

/// # Errors
///
/// See [`Asserter::is_nullish`].
pub fn is_nullish<T>(
    actual: Option<&T>,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()>
where
    T: Serialize + ?Sized,
{
    Asserter::process().is_nullish(actual, test_name, next)
}

/// # Errors
///
/// See [`Asserter::error_equal`].
pub fn error_equal(
    actual: Option<&ErrorLike>,
    expected: Option<&ErrorLike>,
    test_name: Option<&str>,
    next: Option<Errback<'_>>,
) -> Result<()> {
    Asserter::process().error_equal(actual, expected, test_name, next)
}

/// Inspect each value to stdout.
pub fn log(values: &[Value]) {
    Asserter::process().log(values);
}
