use thiserror::Error;

/// Result type alias using AssertError
pub type Result<T> = std::result::Result<T, AssertError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (and the error-equality
/// matcher) can compare without depending on message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertErrorKind {
    /// A predicate did not hold (equal, deep equal, ordering, containment, undefined)
    Mismatch,
    /// Several sub-failures combined into one, carried as a cause chain
    Composite,
    /// An actual error did not match the expected error or message
    ErrorMismatch,
    /// A value could not be converted into the inspectable value model
    Serialization,
}

impl AssertErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            AssertErrorKind::Mismatch => "ERR_ASSERTION_MISMATCH",
            AssertErrorKind::Composite => "ERR_ASSERTION_COMPOSITE",
            AssertErrorKind::ErrorMismatch => "ERR_ERROR_MISMATCH",
            AssertErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured assertion failure
///
/// Carries the classification, the label of the assertion that failed, the
/// rendered actual/expected values and an optional cause.
#[derive(Debug, Clone)]
pub struct AssertError {
    kind: AssertErrorKind,
    op: Option<String>,
    test_name: String,
    message: String,
    actual: Option<String>,
    expected: Option<String>,
    source: Option<Box<AssertError>>,
}

impl AssertError {
    /// Create a new error with the specified kind
    pub fn new(kind: AssertErrorKind) -> Self {
        Self {
            kind,
            op: None,
            test_name: String::new(),
            message: String::new(),
            actual: None,
            expected: None,
            source: None,
        }
    }

    /// Shorthand for a [`AssertErrorKind::Mismatch`] failure labeled with `test_name`
    pub fn mismatch(test_name: impl Into<String>) -> Self {
        Self::new(AssertErrorKind::Mismatch).with_test_name(test_name)
    }

    /// Add operation context (the primitive that produced the failure)
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the assertion label
    pub fn with_test_name(mut self, test_name: impl Into<String>) -> Self {
        self.test_name = test_name.into();
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add the rendered actual value
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// Add the rendered expected value
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: AssertError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> AssertErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the assertion label
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the rendered actual value, if any
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// Get the rendered expected value, if any
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&AssertError> {
        self.source.as_deref()
    }

    /// Iterate this error followed by every error in its cause chain
    pub fn chain(&self) -> impl Iterator<Item = &AssertError> {
        std::iter::successors(Some(self), |e| e.source_error())
    }
}

impl std::fmt::Display for AssertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if !self.test_name.is_empty() {
            write!(f, " {}", self.test_name)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for AssertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<serde_json::Error> for AssertError {
    fn from(err: serde_json::Error) -> Self {
        AssertError::new(AssertErrorKind::Serialization)
            .with_message(format!("value is not representable: {}", err))
    }
}

// ========== End Error Facility ==========

/// Failure of the structural diff strategy.
///
/// Never surfaced to callers of [`crate::diff::diff`]: the chain downgrades
/// to the character strategy on any of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// At least one side is a scalar
    #[error("structural diff requires two objects or arrays")]
    NotStructured,

    /// Nesting is deeper than the structural renderer accepts
    #[error("structural diff exceeded maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_includes_code_name_and_message() {
        let err = AssertError::mismatch("my test")
            .with_op("equal")
            .with_message("1 == 2");
        assert_eq!(err.to_string(), "[ERR_ASSERTION_MISMATCH] my test: 1 == 2");
        assert_eq!(err.op(), Some("equal"));
    }

    #[test]
    fn test_source_walks_chain() {
        let inner = AssertError::mismatch("null check");
        let middle = AssertError::mismatch("undefined check").with_source(inner);
        let outer = AssertError::new(AssertErrorKind::Composite)
            .with_test_name("nullish")
            .with_source(middle);

        let names: Vec<&str> = outer.chain().map(|e| e.test_name()).collect();
        assert_eq!(names, vec!["nullish", "undefined check", "null check"]);

        let std_source = outer.source().map(|s| s.to_string());
        assert!(std_source.unwrap_or_default().contains("undefined check"));
    }

    #[test]
    fn test_serde_error_maps_to_serialization_kind() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AssertError = err.into();
        assert_eq!(err.kind(), AssertErrorKind::Serialization);
        assert_eq!(err.code(), "ERR_SERIALIZATION");
    }
}
