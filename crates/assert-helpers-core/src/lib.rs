//! assert-helpers core - diagnostic assertions
//!
//! This crate provides assertion primitives that explain their failures:
//! - Capability resolution deciding whether output may carry ANSI colors
//! - A value inspector rendering any serializable value
//! - A diff engine with a structural strategy and a character fallback
//! - A diagnostic composer writing the comparison report
//! - One dispatcher that either returns a failure or hands it to a callback
//! - Layered error-equality matching
//!
//! ```
//! use assert_helpers_core::{deep_equal, errback, equal};
//!
//! equal(&1, &1, None, None).unwrap();
//!
//! let mut failed = false;
//! deep_equal(
//!     &serde_json::json!({"a": 1}),
//!     &serde_json::json!({"a": 2}),
//!     Some("objects"),
//!     Some(errback(|err| failed = err.is_some())),
//! )
//! .unwrap();
//! assert!(failed);
//! ```

pub mod assertions;
pub mod callbacks;
pub mod capability;
pub mod context;
pub mod diff;
pub mod dispatch;
pub mod environment;
pub mod error_match;
pub mod errors;
mod finite;
pub mod inspect;
pub mod logging_facility;
mod macros;
pub mod pretty;
pub mod report;
pub mod sink;

pub use assert_helpers_core_types as types;
pub use assert_helpers_core_types::schema;

// Re-export commonly used types
pub use assertions::{
    contains, deep_equal, equal, error_equal, gt, gte, is_nullish, is_undefined, log, lt, lte,
    not_contains, Asserter, Container,
};
pub use capability::{parse_bool, use_colors};
pub use context::{Context, Settings};
pub use diff::{compare, diff, render_diff};
pub use dispatch::{errback, Errback};
pub use environment::{is_tty, Environment};
pub use error_match::{errors_match, ErrorLike};
pub use errors::{AssertError, AssertErrorKind, Result};
pub use inspect::{inspect, InspectOptions};
pub use sink::{DiagnosticSink, MemorySink, StdioSink};
