//! Highlighting of diff spans.

use owo_colors::OwoColorize;
use serde_json::Value;

use super::engine::diff;
use crate::types::{DiffSpan, SpanKind};

/// Render spans for a report.
///
/// With colors, unchanged text is green, added text black on green and
/// removed text black on bright red. Without colors, added text is wrapped in
/// `{+..+}` and removed text in `[-..-]`.
pub fn render_diff(spans: &[DiffSpan], colors: bool) -> String {
    let mut out = String::new();
    for span in spans {
        let text = span.value.as_str();
        match (span.kind, colors) {
            (SpanKind::Unchanged, true) => out.push_str(&text.green().to_string()),
            (SpanKind::Added, true) => out.push_str(&text.black().on_green().to_string()),
            (SpanKind::Removed, true) => out.push_str(&text.black().on_bright_red().to_string()),
            (SpanKind::Unchanged, false) => out.push_str(text),
            (SpanKind::Added, false) => {
                out.push_str("{+");
                out.push_str(text);
                out.push_str("+}");
            }
            (SpanKind::Removed, false) => {
                out.push_str("[-");
                out.push_str(text);
                out.push_str("-]");
            }
        }
    }
    out
}

/// Diff `new` against `old` and highlight the result.
pub fn compare(new: &Value, old: &Value, colors: bool) -> String {
    render_diff(&diff(new, old), colors)
}
