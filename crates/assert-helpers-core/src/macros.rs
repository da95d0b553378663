//! Panicking assertion macros for `#[test]` functions.
//!
//! Each macro runs the matching primitive against the process context and
//! panics with the failure's display when it does not hold.

/// Assert strict equality, printing the comparison report on failure.
///
/// ```
/// # use assert_helpers_core::assert_equal;
/// assert_equal!(1 + 1, 2);
/// assert_equal!("a", "a", "same letter");
/// ```
#[macro_export]
macro_rules! assert_equal {
    (@run $actual:expr, $expected:expr, $name:expr) => {
        if let ::core::result::Result::Err(failure) =
            $crate::assertions::equal(&$actual, &$expected, $name, ::core::option::Option::None)
        {
            panic!("{}", failure);
        }
    };
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::assert_equal!(@run $actual, $expected, ::core::option::Option::None)
    };
    ($actual:expr, $expected:expr, $name:expr $(,)?) => {
        $crate::assert_equal!(@run $actual, $expected, ::core::option::Option::Some($name))
    };
}

/// Assert structural equality of two serializable values.
///
/// ```
/// # use assert_helpers_core::assert_deep_equal;
/// assert_deep_equal!(vec![1, 2], [1, 2]);
/// ```
#[macro_export]
macro_rules! assert_deep_equal {
    (@run $actual:expr, $expected:expr, $name:expr) => {
        if let ::core::result::Result::Err(failure) = $crate::assertions::deep_equal(
            &$actual,
            &$expected,
            $name,
            ::core::option::Option::None,
        ) {
            panic!("{}", failure);
        }
    };
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::assert_deep_equal!(@run $actual, $expected, ::core::option::Option::None)
    };
    ($actual:expr, $expected:expr, $name:expr $(,)?) => {
        $crate::assert_deep_equal!(@run $actual, $expected, ::core::option::Option::Some($name))
    };
}

/// Assert substring or membership. Both arguments are references.
///
/// ```
/// # use assert_helpers_core::assert_contains;
/// assert_contains!("haystack", "st");
/// ```
#[macro_export]
macro_rules! assert_contains {
    (@run $haystack:expr, $needle:expr, $name:expr) => {
        if let ::core::result::Result::Err(failure) = $crate::assertions::contains(
            $haystack,
            $needle,
            $name,
            ::core::option::Option::None,
        ) {
            panic!("{}", failure);
        }
    };
    ($haystack:expr, $needle:expr $(,)?) => {
        $crate::assert_contains!(@run $haystack, $needle, ::core::option::Option::None)
    };
    ($haystack:expr, $needle:expr, $name:expr $(,)?) => {
        $crate::assert_contains!(@run $haystack, $needle, ::core::option::Option::Some($name))
    };
}
