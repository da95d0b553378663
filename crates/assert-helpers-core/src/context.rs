//! Explicit configuration threaded through every assertion.
//!
//! A [`Context`] names where the environment comes from (the live process or
//! a fixed snapshot), where reports go, and optional overrides for the
//! silence and diff settings. [`Context::settings`] resolves all of it into
//! one [`Settings`] snapshot per call.

use std::fmt;
use std::sync::Arc;

use crate::capability::use_colors;
use crate::environment::Environment;
use crate::schema::{ENV_DIFF, ENV_SILENT};
use crate::sink::{DiagnosticSink, StdioSink};

#[derive(Debug, Clone)]
enum EnvSource {
    /// Re-read the process on every call
    Process,
    Fixed(Environment),
}

/// Per-call resolved settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub colors: bool,
    pub silent: bool,
    pub include_diff: bool,
}

#[derive(Clone)]
pub struct Context {
    source: EnvSource,
    sink: Arc<dyn DiagnosticSink>,
    silent: Option<bool>,
    include_diff: Option<bool>,
}

impl Context {
    /// Live process environment, reports to stdio
    pub fn process() -> Self {
        Self {
            source: EnvSource::Process,
            sink: Arc::new(StdioSink),
            silent: None,
            include_diff: None,
        }
    }

    /// Fixed environment snapshot, reports to stdio
    pub fn fixed(env: Environment) -> Self {
        Self {
            source: EnvSource::Fixed(env),
            ..Self::process()
        }
    }

    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Override the `ASSERT_HELPERS_SILENT` variable
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = Some(silent);
        self
    }

    /// Override the `ASSERT_HELPERS_DIFF` variable
    pub fn with_diff(mut self, include_diff: bool) -> Self {
        self.include_diff = Some(include_diff);
        self
    }

    /// The environment as of now
    pub fn environment(&self) -> Environment {
        match &self.source {
            EnvSource::Process => Environment::capture(),
            EnvSource::Fixed(env) => env.clone(),
        }
    }

    pub fn settings(&self) -> Settings {
        let env = self.environment();
        Settings {
            colors: use_colors(&env),
            silent: self.silent.or_else(|| env.flag(ENV_SILENT)).unwrap_or(false),
            include_diff: self
                .include_diff
                .or_else(|| env.flag(ENV_DIFF))
                .unwrap_or(false),
        }
    }

    pub fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.as_ref()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::process()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("source", &self.source)
            .field("silent", &self.silent)
            .field("include_diff", &self.include_diff)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_follow_environment() {
        let env = Environment::interactive()
            .with_var(ENV_SILENT, "yes")
            .with_var(ENV_DIFF, "on");
        let settings = Context::fixed(env).settings();
        assert_eq!(
            settings,
            Settings {
                colors: true,
                silent: true,
                include_diff: true
            }
        );
    }

    #[test]
    fn test_overrides_beat_environment() {
        let env = Environment::piped()
            .with_var(ENV_SILENT, "yes")
            .with_var(ENV_DIFF, "on");
        let settings = Context::fixed(env)
            .with_silent(false)
            .with_diff(false)
            .settings();
        assert!(!settings.silent);
        assert!(!settings.include_diff);
        assert!(!settings.colors);
    }

    #[test]
    fn test_defaults_are_loud_without_diff() {
        let settings = Context::fixed(Environment::piped()).settings();
        assert!(!settings.silent);
        assert!(!settings.include_diff);
    }

    #[test]
    fn test_fixed_environment_is_returned_as_is() {
        let env = Environment::piped().with_arg("--no-colors");
        assert_eq!(Context::fixed(env.clone()).environment(), env);
    }
}
