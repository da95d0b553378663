//! Diff computation.
//!
//! The core entry point is [`diff`], an explicit two-strategy chain over
//! [`diff_structural`] and [`diff_chars`]. Both strategies are public so the
//! fallback path can be exercised on its own.

use serde_json::Value;
use similar::{ChangeTag, TextDiff};

use crate::errors::DiffError;
use crate::inspect::inspect_plain;
use crate::pretty::{format_value, FormatOptions};
use crate::types::{DiffSpan, SpanKind};

/// Deepest nesting the structural strategy accepts.
pub const MAX_STRUCTURAL_DEPTH: usize = 64;

/// Whether a value has key/value structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// null, bool, number or string
    Scalar,
    /// object or array
    Structured,
}

pub fn shape_of(value: &Value) -> Shape {
    match value {
        Value::Array(_) | Value::Object(_) => Shape::Structured,
        _ => Shape::Scalar,
    }
}

/// Diff `new` against `old`, structurally when possible.
pub fn diff(new: &Value, old: &Value) -> Vec<DiffSpan> {
    diff_structural(new, old).unwrap_or_else(|err| {
        tracing::debug!(
            component = module_path!(),
            reason = %err,
            "structural diff unavailable, falling back to character diff"
        );
        diff_chars(new, old)
    })
}

/// Line diff over the expanded, key-sorted rendering of two structured values.
///
/// # Errors
///
/// - `NotStructured` when either side is a scalar
/// - `DepthExceeded` when either side nests deeper than [`MAX_STRUCTURAL_DEPTH`]
pub fn diff_structural(new: &Value, old: &Value) -> Result<Vec<DiffSpan>, DiffError> {
    if shape_of(new) != Shape::Structured || shape_of(old) != Shape::Structured {
        return Err(DiffError::NotStructured);
    }
    if nesting_depth(new) > MAX_STRUCTURAL_DEPTH || nesting_depth(old) > MAX_STRUCTURAL_DEPTH {
        return Err(DiffError::DepthExceeded {
            max_depth: MAX_STRUCTURAL_DEPTH,
        });
    }

    let opts = FormatOptions {
        colors: false,
        depth: MAX_STRUCTURAL_DEPTH,
        expanded: true,
        ..FormatOptions::default()
    };
    let old_text = format_value(old, &opts);
    let new_text = format_value(new, &opts);

    let text_diff = TextDiff::from_lines(&old_text, &new_text);
    Ok(collect_spans(
        text_diff
            .iter_all_changes()
            .map(|change| (change.tag(), change.value())),
    ))
}

/// Character diff of the plain inspector renderings of two values.
pub fn diff_chars(new: &Value, old: &Value) -> Vec<DiffSpan> {
    let old_text = inspect_plain(old);
    let new_text = inspect_plain(new);

    let text_diff = TextDiff::from_chars(&old_text, &new_text);
    collect_spans(
        text_diff
            .iter_all_changes()
            .map(|change| (change.tag(), change.value())),
    )
}

/// Merge consecutive changes of the same kind into single spans.
fn collect_spans<'a>(changes: impl Iterator<Item = (ChangeTag, &'a str)>) -> Vec<DiffSpan> {
    let mut spans: Vec<DiffSpan> = Vec::new();
    for (tag, text) in changes {
        let kind = match tag {
            ChangeTag::Equal => SpanKind::Unchanged,
            ChangeTag::Insert => SpanKind::Added,
            ChangeTag::Delete => SpanKind::Removed,
        };
        match spans.last_mut() {
            Some(last) if last.kind == kind => last.value.push_str(text),
            _ => spans.push(DiffSpan::new(text, kind)),
        }
    }
    spans
}

fn nesting_depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(nesting_depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(nesting_depth).max().unwrap_or(0),
        _ => 0,
    }
}
