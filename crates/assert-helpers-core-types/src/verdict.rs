//! Per-layer verdict of a layered matcher.

use serde::{Deserialize, Serialize};

/// Result of a single matching layer.
///
/// Layers are tried in order; the first layer that is not
/// [`Verdict::Inconclusive`] decides the outcome.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Verdict {
    Matched,
    Unmatched,
    Inconclusive,
}

impl Verdict {
    /// Whether this layer reached a decision
    pub fn is_decisive(self) -> bool {
        self != Verdict::Inconclusive
    }

    /// Build a decisive verdict from a boolean
    pub fn from_bool(matched: bool) -> Self {
        if matched {
            Verdict::Matched
        } else {
            Verdict::Unmatched
        }
    }
}
