//! Generic structural formatter for [`Value`]s.
//!
//! Output follows the familiar inspect layout: single-quoted strings, bare
//! identifier keys, `{ a: 1 }` on one line when it fits and two-space indented
//! blocks when it does not. Containers nested deeper than the configured depth
//! collapse to `[Object]` / `[Array]`.

use owo_colors::OwoColorize;
use serde_json::Value;

/// Fully resolved formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub colors: bool,
    pub depth: usize,
    pub break_length: usize,
    /// Always break non-empty containers, one entry per line with a trailing
    /// comma on every entry. Each key owns exactly one line.
    pub expanded: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            colors: false,
            depth: crate::inspect::DEFAULT_DEPTH,
            break_length: crate::inspect::DEFAULT_BREAK_LENGTH,
            expanded: false,
        }
    }
}

/// Render `value` according to `opts`.
pub fn format_value(value: &Value, opts: &FormatOptions) -> String {
    Printer { opts }.value(value, 0, 0)
}

struct Printer<'a> {
    opts: &'a FormatOptions,
}

impl Printer<'_> {
    fn value(&self, value: &Value, level: usize, indent: usize) -> String {
        match value {
            Value::Null => self.paint_null("null"),
            Value::Bool(b) => self.paint_scalar(&b.to_string()),
            Value::Number(n) => self.paint_scalar(&n.to_string()),
            Value::String(s) => self.paint_string(&quote(s)),
            Value::Array(items) => {
                if items.is_empty() {
                    return "[]".to_string();
                }
                if level > self.opts.depth {
                    return self.paint_marker("[Array]");
                }
                let entries: Vec<String> = items
                    .iter()
                    .map(|item| self.value(item, level + 1, indent + 2))
                    .collect();
                self.container('[', ']', entries, indent)
            }
            Value::Object(map) => {
                if map.is_empty() {
                    return "{}".to_string();
                }
                if level > self.opts.depth {
                    return self.paint_marker("[Object]");
                }
                let entries: Vec<String> = map
                    .iter()
                    .map(|(key, item)| {
                        format!("{}: {}", format_key(key), self.value(item, level + 1, indent + 2))
                    })
                    .collect();
                self.container('{', '}', entries, indent)
            }
        }
    }

    fn container(&self, open: char, close: char, entries: Vec<String>, indent: usize) -> String {
        let pad = " ".repeat(indent + 2);
        let end_pad = " ".repeat(indent);

        if self.opts.expanded {
            let body: Vec<String> = entries.iter().map(|e| format!("{pad}{e},")).collect();
            return format!("{open}\n{}\n{end_pad}{close}", body.join("\n"));
        }

        let single = format!("{open} {} {close}", entries.join(", "));
        let fits =
            !single.contains('\n') && indent + visible_len(&single) <= self.opts.break_length;
        if fits {
            return single;
        }

        let body: Vec<String> = entries.iter().map(|e| format!("{pad}{e}")).collect();
        format!("{open}\n{}\n{end_pad}{close}", body.join(",\n"))
    }

    fn paint_scalar(&self, text: &str) -> String {
        if self.opts.colors {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_string(&self, text: &str) -> String {
        if self.opts.colors {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_null(&self, text: &str) -> String {
        if self.opts.colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_marker(&self, text: &str) -> String {
        if self.opts.colors {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Quote a string, preferring single quotes.
pub fn quote(s: &str) -> String {
    let delimiter = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

fn format_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Length of `s` in chars, not counting ANSI SGR escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for inner in chars.by_ref() {
                if inner == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain(value: &Value) -> String {
        format_value(value, &FormatOptions::default())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(plain(&json!(null)), "null");
        assert_eq!(plain(&json!(true)), "true");
        assert_eq!(plain(&json!(42)), "42");
        assert_eq!(plain(&json!(1.5)), "1.5");
        assert_eq!(plain(&json!("abc")), "'abc'");
    }

    #[test]
    fn test_quote_picks_delimiter() {
        assert_eq!(quote("it's"), "\"it's\"");
        assert_eq!(quote("say \"it's\""), "'say \"it\\'s\"'");
        assert_eq!(quote("a\nb"), "'a\\nb'");
    }

    #[test]
    fn test_short_containers_stay_on_one_line() {
        assert_eq!(plain(&json!({"a": 1, "b": "x"})), "{ a: 1, b: 'x' }");
        assert_eq!(plain(&json!([1, 2, 3])), "[ 1, 2, 3 ]");
        assert_eq!(plain(&json!({})), "{}");
        assert_eq!(plain(&json!([])), "[]");
        assert_eq!(plain(&json!({"a-b": 1})), "{ 'a-b': 1 }");
    }

    #[test]
    fn test_long_containers_break() {
        let long = "x".repeat(90);
        let rendered = plain(&json!({"a": long, "b": 2}));
        assert_eq!(rendered, format!("{{\n  a: '{long}',\n  b: 2\n}}"));
    }

    #[test]
    fn test_depth_collapses_nested_containers() {
        let opts = FormatOptions {
            depth: 0,
            ..FormatOptions::default()
        };
        let rendered = format_value(&json!({"a": {"b": 1}, "c": [1]}), &opts);
        assert_eq!(rendered, "{ a: [Object], c: [Array] }");
    }

    #[test]
    fn test_expanded_puts_each_entry_on_its_own_line() {
        let opts = FormatOptions {
            expanded: true,
            ..FormatOptions::default()
        };
        let rendered = format_value(&json!({"a": 1, "b": [true]}), &opts);
        assert_eq!(rendered, "{\n  a: 1,\n  b: [\n    true,\n  ],\n}");
    }

    #[test]
    fn test_colors_do_not_affect_line_fitting() {
        let opts = FormatOptions {
            colors: true,
            ..FormatOptions::default()
        };
        let rendered = format_value(&json!({"a": 1}), &opts);
        assert!(rendered.contains('\u{1b}'));
        assert!(!rendered.contains('\n'));
        assert_eq!(visible_len(&rendered), "{ a: 1 }".len());
    }
}
