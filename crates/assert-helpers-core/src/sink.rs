//! Output sinks for diagnostic reports and inspected log lines.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Where reports and logged values are written.
///
/// Blocks are complete lines; implementations add the final newline.
pub trait DiagnosticSink: Send + Sync {
    /// Write a diagnostic block (stderr-like)
    fn write_diagnostic(&self, lines: &[String]);

    /// Write a general log block (stdout-like)
    fn write_log(&self, lines: &[String]);
}

/// Process stdio: diagnostics to stderr, falling back to stdout when stderr
/// cannot be written; log lines to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdioSink;

impl DiagnosticSink for StdioSink {
    fn write_diagnostic(&self, lines: &[String]) {
        let block = join_block(lines);
        let written = std::io::stderr().lock().write_all(block.as_bytes());
        if written.is_err() {
            std::io::stdout().lock().write_all(block.as_bytes()).ok();
        }
    }

    fn write_log(&self, lines: &[String]) {
        let block = join_block(lines);
        std::io::stdout().lock().write_all(block.as_bytes()).ok();
    }
}

/// In-memory sink; clones share the same buffers.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    diagnostics: Arc<Mutex<Vec<String>>>,
    logs: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every diagnostic line written so far, split on newlines
    pub fn diagnostics(&self) -> Vec<String> {
        self.diagnostics.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Every log line written so far, split on newlines
    pub fn logs(&self) -> Vec<String> {
        self.logs.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Diagnostic lines joined back into one string
    pub fn diagnostic_text(&self) -> String {
        self.diagnostics().join("\n")
    }

    pub fn clear(&self) {
        self.diagnostics.lock().map(|mut l| l.clear()).ok();
        self.logs.lock().map(|mut l| l.clear()).ok();
    }
}

impl DiagnosticSink for MemorySink {
    fn write_diagnostic(&self, lines: &[String]) {
        push_lines(&self.diagnostics, lines);
    }

    fn write_log(&self, lines: &[String]) {
        push_lines(&self.logs, lines);
    }
}

fn push_lines(buffer: &Mutex<Vec<String>>, lines: &[String]) {
    if let Ok(mut buffer) = buffer.lock() {
        buffer.extend(
            lines
                .iter()
                .flat_map(|line| line.split('\n'))
                .map(str::to_string),
        );
    }
}

fn join_block(lines: &[String]) -> String {
    let mut block = lines.join("\n");
    block.push('\n');
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_splits_embedded_newlines() {
        let sink = MemorySink::new();
        sink.write_diagnostic(&["a".to_string(), "b\nc".to_string()]);
        assert_eq!(sink.diagnostics(), vec!["a", "b", "c"]);
        assert!(sink.logs().is_empty());
    }

    #[test]
    fn test_memory_sink_clones_share_buffers() {
        let sink = MemorySink::new();
        let other = sink.clone();
        other.write_log(&["x".to_string()]);
        assert_eq!(sink.logs(), vec!["x"]);
        sink.clear();
        assert!(other.logs().is_empty());
    }

    #[test]
    fn test_join_block_terminates_with_newline() {
        assert_eq!(join_block(&["a".to_string(), "b".to_string()]), "a\nb\n");
    }
}
