//! Structured logging facility for assert-helpers
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Every assertion primitive logs a `start` event and exactly one of `end` or
//! `end_error`. The diagnostic report itself is not a log event: it goes to the
//! diagnostic sink.
//!
//! # Usage
//!
//! ```rust
//! use assert_helpers_core::logging_facility::{init, Profile};
//!
//! // Initialize once at test-harness startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
