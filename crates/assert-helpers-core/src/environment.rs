//! Read-only snapshot of the process state the engine consults.
//!
//! The capability resolver and the report settings never read the process
//! directly; they take an [`Environment`]. [`Environment::capture`] builds one
//! from the live process, the builder methods build fixed ones for tests.

use std::collections::BTreeMap;

use is_terminal::IsTerminal;

use crate::capability::parse_bool;

/// Arguments, variables and terminal state as seen at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    capable: bool,
    args: Vec<String>,
    vars: BTreeMap<String, String>,
    stdout_tty: bool,
    stderr_tty: bool,
}

impl Environment {
    /// Snapshot the running process
    pub fn capture() -> Self {
        Self {
            capable: !cfg!(target_family = "wasm"),
            args: std::env::args_os()
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
            vars: std::env::vars_os()
                .map(|(k, v)| {
                    (
                        k.to_string_lossy().into_owned(),
                        v.to_string_lossy().into_owned(),
                    )
                })
                .collect(),
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
        }
    }

    /// A host with no process or terminal concept
    pub fn detached() -> Self {
        Self::default()
    }

    /// A capable host with both streams attached to a terminal and nothing else set
    pub fn interactive() -> Self {
        Self {
            capable: true,
            stdout_tty: true,
            stderr_tty: true,
            ..Self::default()
        }
    }

    /// A capable host writing to pipes
    pub fn piped() -> Self {
        Self {
            capable: true,
            ..Self::default()
        }
    }

    pub fn with_capable(mut self, capable: bool) -> Self {
        self.capable = capable;
        self
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_tty(mut self, stdout: bool, stderr: bool) -> Self {
        self.stdout_tty = stdout;
        self.stderr_tty = stderr;
        self
    }

    pub fn is_capable(&self) -> bool {
        self.capable
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn has_arg(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Tri-state read of a variable: `None` when unset or indeterminate
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.var(key).and_then(parse_bool)
    }

    /// Whether stdout and stderr are both interactive
    pub fn is_tty(&self) -> bool {
        self.stdout_tty && self.stderr_tty
    }
}

/// Whether the running process has interactive stdout and stderr.
pub fn is_tty() -> bool {
    Environment::capture().is_tty()
}
