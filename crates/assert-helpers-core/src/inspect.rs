//! Value inspector.
//!
//! Thin layer over [`crate::pretty`] that applies the engine's defaults: a
//! large fixed depth and the capability resolver's color decision. Caller
//! options win for every key, except that colors can only be switched off by
//! the caller, never forced on past the resolver.

use serde::Serialize;
use serde_json::Value;

use crate::capability::use_colors;
use crate::environment::Environment;
use crate::errors::Result;
use crate::finite::{Guarded, NonFinite};
use crate::pretty::{format_value, FormatOptions};

/// Recursion depth applied when the caller does not choose one.
pub const DEFAULT_DEPTH: usize = 50;

/// Line width used to decide between single-line and block layout.
pub const DEFAULT_BREAK_LENGTH: usize = 80;

/// Caller overrides; `None` keeps the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectOptions {
    pub colors: Option<bool>,
    pub depth: Option<usize>,
    pub break_length: Option<usize>,
}

impl InspectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn break_length(mut self, break_length: usize) -> Self {
        self.break_length = Some(break_length);
        self
    }

    /// Merge with the defaults under a color capability cap.
    pub fn resolve(&self, color_capable: bool) -> FormatOptions {
        FormatOptions {
            colors: color_capable && self.colors.unwrap_or(true),
            depth: self.depth.unwrap_or(DEFAULT_DEPTH),
            break_length: self.break_length.unwrap_or(DEFAULT_BREAK_LENGTH),
            expanded: false,
        }
    }
}

/// Render `value`, resolving color capability from `env`.
pub fn inspect(value: &Value, opts: &InspectOptions, env: &Environment) -> String {
    inspect_capped(value, opts, use_colors(env))
}

/// Render `value` with an already-resolved color capability.
pub fn inspect_capped(value: &Value, opts: &InspectOptions, color_capable: bool) -> String {
    format_value(value, &opts.resolve(color_capable))
}

/// Render `value` with defaults and colors disabled.
pub fn inspect_plain(value: &Value) -> String {
    inspect_capped(value, &InspectOptions::default(), false)
}

/// Render `value` against a fresh snapshot of the running process.
pub fn inspect_now(value: &Value, opts: &InspectOptions) -> String {
    inspect(value, opts, &Environment::capture())
}

/// Convert any serializable value into the inspectable value model.
///
/// # Errors
///
/// `Serialization` when the value has no JSON form: non-string map keys, or a
/// NaN or infinite float anywhere inside it.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(Guarded::new(value, NonFinite::Reject).serialize(serde_json::value::Serializer)?)
}

/// Like [`to_value`], but never fails. Non-finite floats become their name
/// (`"NaN"`, `"Infinity"`, `"-Infinity"`) and other unrepresentable values a
/// descriptive string.
pub fn to_value_lossy<T: Serialize + ?Sized>(value: &T) -> Value {
    Guarded::new(value, NonFinite::Name)
        .serialize(serde_json::value::Serializer)
        .unwrap_or_else(|err| Value::String(format!("<unrepresentable: {}>", err)))
}
