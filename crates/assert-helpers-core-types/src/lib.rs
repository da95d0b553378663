//! Core types shared across assert-helpers facilities
//!
//! This crate provides the plain data model used by the comparison engine,
//! the report composer and the logging facility:
//!
//! - **Diff types**: DiffSpan, SpanKind
//! - **Verdicts**: Verdict, the per-layer result of the error matcher
//! - **Schema constants**: Canonical field keys and event names

pub mod diff;
pub mod schema;
pub mod verdict;

pub use diff::{DiffSpan, SpanKind};
pub use verdict::Verdict;
