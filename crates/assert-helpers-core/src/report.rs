//! Diagnostic report composer.
//!
//! Produces the fixed comparison layout written when an assertion fails:
//!
//! ```text
//! ------------------------------------
//! Comparison Error:
//! <failure, then one "Caused by:" line per cause>
//!
//! Comparison Diff:        (only when the diff section is enabled)
//! <highlighted diff>
//!
//! Comparison Actual:
//! <inspected actual>
//!
//! Comparison Expected:
//! <inspected expected>
//! ------------------------------------
//! ```

use owo_colors::OwoColorize;
use serde_json::Value;

use crate::context::{Context, Settings};
use crate::diff::{diff, render_diff};
use crate::errors::AssertError;
use crate::inspect::{inspect_capped, InspectOptions};

pub const BANNER: &str = "------------------------------------";

/// Rendering of a value that was not supplied.
pub const ABSENT: &str = "undefined";

/// Write the comparison report for a failed assertion, unless silenced.
pub fn report(
    actual: Option<&Value>,
    expected: Option<&Value>,
    error: &AssertError,
    ctx: &Context,
) {
    let settings = ctx.settings();
    if settings.silent {
        return;
    }
    let lines = compose(actual, expected, error, &settings);
    ctx.sink().write_diagnostic(&lines);
}

/// Build the report lines without writing them.
pub fn compose(
    actual: Option<&Value>,
    expected: Option<&Value>,
    error: &AssertError,
    settings: &Settings,
) -> Vec<String> {
    let mut lines = vec![
        BANNER.to_string(),
        "Comparison Error:".to_string(),
        paint_error(&error.to_string(), settings.colors),
    ];
    for cause in error.chain().skip(1) {
        lines.push(paint_error(&format!("Caused by: {}", cause), settings.colors));
    }
    lines.push(String::new());

    if settings.include_diff {
        if let (Some(actual), Some(expected)) = (actual, expected) {
            let spans = diff(actual, expected);
            lines.push("Comparison Diff:".to_string());
            lines.push(render_diff(&spans, settings.colors));
            lines.push(String::new());
        }
    }

    lines.push("Comparison Actual:".to_string());
    lines.push(render(actual, settings.colors));
    lines.push(String::new());
    lines.push("Comparison Expected:".to_string());
    lines.push(render(expected, settings.colors));
    lines.push(BANNER.to_string());
    lines
}

/// Inspect each value and write it to the general log sink.
pub fn log_values(values: &[Value], ctx: &Context) {
    let colors = ctx.settings().colors;
    let lines: Vec<String> = values
        .iter()
        .map(|value| inspect_capped(value, &InspectOptions::default(), colors))
        .collect();
    ctx.sink().write_log(&lines);
}

fn render(value: Option<&Value>, colors: bool) -> String {
    match value {
        Some(value) => inspect_capped(value, &InspectOptions::default(), colors),
        None => ABSENT.to_string(),
    }
}

fn paint_error(text: &str, colors: bool) -> String {
    if colors {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::errors::AssertErrorKind;
    use crate::sink::MemorySink;
    use serde_json::json;

    fn plain() -> Settings {
        Settings {
            colors: false,
            silent: false,
            include_diff: false,
        }
    }

    #[test]
    fn test_layout_without_diff() {
        let err = AssertError::mismatch("equal assertion").with_message("expected 1 to equal 2");
        let lines = compose(Some(&json!(1)), Some(&json!(2)), &err, &plain());
        assert_eq!(
            lines,
            vec![
                BANNER,
                "Comparison Error:",
                "[ERR_ASSERTION_MISMATCH] equal assertion: expected 1 to equal 2",
                "",
                "Comparison Actual:",
                "1",
                "",
                "Comparison Expected:",
                "2",
                BANNER,
            ]
        );
    }

    #[test]
    fn test_diff_section_is_optional() {
        let err = AssertError::mismatch("x");
        let settings = Settings {
            include_diff: true,
            ..plain()
        };
        let lines = compose(Some(&json!("abd")), Some(&json!("abc")), &err, &settings);
        let at = lines.iter().position(|l| l == "Comparison Diff:");
        assert_eq!(at.map(|i| lines[i + 1].as_str()), Some("'ab[-c-]{+d+}'"));
    }

    #[test]
    fn test_diff_section_needs_both_values() {
        let err = AssertError::mismatch("x");
        let settings = Settings {
            include_diff: true,
            ..plain()
        };
        let lines = compose(Some(&json!(1)), None, &err, &settings);
        assert!(!lines.iter().any(|l| l == "Comparison Diff:"));
        assert!(lines.iter().any(|l| l == ABSENT));
    }

    #[test]
    fn test_causes_are_listed() {
        let err = AssertError::new(AssertErrorKind::Composite)
            .with_test_name("nullish")
            .with_source(AssertError::mismatch("unset"));
        let lines = compose(None, None, &err, &plain());
        assert!(lines
            .iter()
            .any(|l| l == "Caused by: [ERR_ASSERTION_MISMATCH] unset"));
    }

    #[test]
    fn test_silenced_report_writes_nothing() {
        let sink = MemorySink::new();
        let ctx = Context::fixed(Environment::piped())
            .with_sink(sink.clone())
            .with_silent(true);
        report(Some(&json!(1)), Some(&json!(2)), &AssertError::mismatch("x"), &ctx);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn test_log_values_goes_to_log_sink() {
        let sink = MemorySink::new();
        let ctx = Context::fixed(Environment::piped()).with_sink(sink.clone());
        log_values(&[json!("a"), json!({"b": 1})], &ctx);
        assert_eq!(sink.logs(), vec!["'a'", "{ b: 1 }"]);
        assert!(sink.diagnostics().is_empty());
    }
}
