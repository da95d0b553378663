//! Diff output types.
//!
//! A diff is always a flat, ordered sequence of [`DiffSpan`]s. Concatenating
//! every span that is not [`SpanKind::Removed`] yields the "new" rendering;
//! concatenating every span that is not [`SpanKind::Added`] yields the "old" one.

use serde::{Deserialize, Serialize};

/// Classification of a single run of text in a diff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// Present in the new rendering only
    Added,
    /// Present in the old rendering only
    Removed,
    /// Present in both renderings
    Unchanged,
}

/// A text run tagged added/removed/unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffSpan {
    /// The text of this run
    pub value: String,
    /// Which side(s) the text belongs to
    pub kind: SpanKind,
}

impl DiffSpan {
    pub fn new(value: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    pub fn added(value: impl Into<String>) -> Self {
        Self::new(value, SpanKind::Added)
    }

    pub fn removed(value: impl Into<String>) -> Self {
        Self::new(value, SpanKind::Removed)
    }

    pub fn unchanged(value: impl Into<String>) -> Self {
        Self::new(value, SpanKind::Unchanged)
    }

    /// True for added or removed spans.
    pub fn is_change(&self) -> bool {
        self.kind != SpanKind::Unchanged
    }
}

/// Rebuild the new-side text from a span sequence.
pub fn reconstruct_new(spans: &[DiffSpan]) -> String {
    spans
        .iter()
        .filter(|s| s.kind != SpanKind::Removed)
        .map(|s| s.value.as_str())
        .collect()
}

/// Rebuild the old-side text from a span sequence.
pub fn reconstruct_old(spans: &[DiffSpan]) -> String {
    spans
        .iter()
        .filter(|s| s.kind != SpanKind::Added)
        .map(|s| s.value.as_str())
        .collect()
}
