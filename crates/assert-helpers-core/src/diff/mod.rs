//! Diff engine.
//!
//! Compares an old and a new value and produces a flat sequence of
//! [`DiffSpan`]s suitable for highlighting in a diagnostic report.
//!
//! ## Entry point
//!
//! ```
//! use assert_helpers_core::diff::{diff, render_diff};
//! use serde_json::json;
//!
//! let spans = diff(&json!({"a": 2}), &json!({"a": 1}));
//! let highlighted = render_diff(&spans, false);
//! assert!(highlighted.contains("[-  a: 1,\n-]{+  a: 2,\n+}"));
//! ```
//!
//! ## Strategies
//!
//! - **Structural**: both values are objects or arrays. Each side is rendered
//!   in expanded, key-sorted form (one entry per line) and the lines are diffed,
//!   so a changed key shows up as exactly one removed and one added line.
//! - **Character**: everything else, and any structural attempt that fails.
//!   Both sides are rendered with the inspector (colors disabled) and diffed
//!   character by character.

pub mod engine;
pub mod render;

pub use crate::types::diff::{reconstruct_new, reconstruct_old};
pub use crate::types::{DiffSpan, SpanKind};
pub use engine::{diff, diff_chars, diff_structural, shape_of, Shape, MAX_STRUCTURAL_DEPTH};
pub use render::{compare, render_diff};
