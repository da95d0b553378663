//! Color capability resolution.
//!
//! Precedence, first match wins:
//!
//! 1. host is not capable: off
//! 2. `--no-colors` / `--no-color` argument: off
//! 3. `COLOR`, `COLORS`, `FORCE_COLOR` resolving to a definite boolean: that value
//! 4. `NO_COLOR`, `NO_COLORS` resolving to a definite boolean: its negation
//! 5. stdout and stderr both interactive
//!
//! The decision is recomputed on every call.

use crate::environment::Environment;
use crate::schema::{ARG_NO_COLORS, ENV_COLOR, ENV_NO_COLOR};

const TRUTHY: &[&str] = &["true", "yes", "y", "on"];
const FALSY: &[&str] = &["false", "no", "n", "off"];

/// Tri-state parse of a boolean-ish token.
///
/// Numeric and unknown tokens are indeterminate.
pub fn parse_bool(token: &str) -> Option<bool> {
    let token = token.trim().to_ascii_lowercase();
    if TRUTHY.contains(&token.as_str()) {
        Some(true)
    } else if FALSY.contains(&token.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Decide whether colored output is permitted for `env`.
pub fn use_colors(env: &Environment) -> bool {
    if !env.is_capable() {
        return false;
    }

    if ARG_NO_COLORS.iter().any(|flag| env.has_arg(flag)) {
        return false;
    }

    if let Some(forced) = ENV_COLOR.iter().find_map(|key| env.flag(key)) {
        return forced;
    }

    if let Some(disabled) = ENV_NO_COLOR.iter().find_map(|key| env.flag(key)) {
        return !disabled;
    }

    env.is_tty()
}

/// [`use_colors`] against a fresh snapshot of the running process.
pub fn use_colors_now() -> bool {
    use_colors(&Environment::capture())
}
