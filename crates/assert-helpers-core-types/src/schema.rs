//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_TEST_NAME: &str = "test_name";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Environment variables read by the capability resolver and report settings
pub const ENV_COLOR: &[&str] = &["COLOR", "COLORS", "FORCE_COLOR"];
pub const ENV_NO_COLOR: &[&str] = &["NO_COLOR", "NO_COLORS"];
pub const ENV_SILENT: &str = "ASSERT_HELPERS_SILENT";
pub const ENV_DIFF: &str = "ASSERT_HELPERS_DIFF";

// Invocation flags that force colors off
pub const ARG_NO_COLORS: &[&str] = &["--no-colors", "--no-color"];
