//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log assertion calls.

/// Log the start of an assertion
///
/// # Example
///
/// ```
/// # use assert_helpers_core::log_op_start;
/// log_op_start!("equal");
/// log_op_start!("equal", test_name = "sums match");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an assertion
///
/// # Example
///
/// ```
/// # use assert_helpers_core::log_op_end;
/// log_op_end!("equal");
/// log_op_end!("equal", test_name = "sums match");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            $($field)*
        );
    };
}

/// Log a failed assertion
///
/// # Example
///
/// ```
/// # use assert_helpers_core::{log_op_error, errors::AssertError};
/// let err = AssertError::mismatch("sums match");
/// log_op_error!("equal", err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {{
        let failure: &$crate::errors::AssertError = &$err;
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            err.kind = ?failure.kind(),
            err.code = failure.code(),
        );
    }};
    ($op:expr, $err:expr, $($field:tt)*) => {{
        let failure: &$crate::errors::AssertError = &$err;
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            err.kind = ?failure.kind(),
            err.code = failure.code(),
            $($field)*
        );
    }};
}
