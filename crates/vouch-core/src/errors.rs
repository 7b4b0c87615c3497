use thiserror::Error;

/// Canonical assertion kind taxonomy
///
/// Each kind identifies the check that failed and maps to a stable code
/// that appears on the failure log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionKind {
    /// `assert_true` saw `false`
    NotTrue,
    /// `assert_false` saw `true`
    NotFalse,
    /// `assert_equal` saw two structurally different values
    NotEqual,
    /// `assert_not_equal` saw two structurally equal values
    Equal,
    /// `assert_nil` saw a present value
    NotNil,
    /// `assert_not_nil` saw an absent value
    Nil,
}

impl AssertionKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            AssertionKind::NotTrue => "ERR_ASSERT_TRUE",
            AssertionKind::NotFalse => "ERR_ASSERT_FALSE",
            AssertionKind::NotEqual => "ERR_ASSERT_EQUAL",
            AssertionKind::Equal => "ERR_ASSERT_NOT_EQUAL",
            AssertionKind::NotNil => "ERR_ASSERT_NIL",
            AssertionKind::Nil => "ERR_ASSERT_NOT_NIL",
        }
    }

    /// Name of the public operation that raises this kind
    pub fn op(&self) -> &'static str {
        match self {
            AssertionKind::NotTrue => "assert_true",
            AssertionKind::NotFalse => "assert_false",
            AssertionKind::NotEqual => "assert_equal",
            AssertionKind::Equal => "assert_not_equal",
            AssertionKind::NotNil => "assert_nil",
            AssertionKind::Nil => "assert_not_nil",
        }
    }
}

/// A violated assertion
///
/// The `Display` output is the exact diagnostic carried by the panic. This
/// type is never handed back through a `Result`: the assertion functions
/// build it, log it, and unwind with its rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertionFailure {
    #[error("Assertion failed: {message}")]
    NotTrue { message: String },

    #[error("Assertion failed: {message} - Expected false, but got true")]
    NotFalse { message: String },

    #[error("Assertion failed: {message} - Expected: {expected}, Actual: {actual}")]
    NotEqual {
        message: String,
        expected: String,
        actual: String,
    },

    #[error("Assertion failed: {message} - Values should not be equal: {actual}")]
    Equal { message: String, actual: String },

    #[error("Assertion failed: {message} - Expected nil, but got: {value}")]
    NotNil { message: String, value: String },

    #[error("Assertion failed: {message} - Expected non-nil value")]
    Nil { message: String },
}

impl AssertionFailure {
    /// Get the assertion kind
    pub fn kind(&self) -> AssertionKind {
        match self {
            AssertionFailure::NotTrue { .. } => AssertionKind::NotTrue,
            AssertionFailure::NotFalse { .. } => AssertionKind::NotFalse,
            AssertionFailure::NotEqual { .. } => AssertionKind::NotEqual,
            AssertionFailure::Equal { .. } => AssertionKind::Equal,
            AssertionFailure::NotNil { .. } => AssertionKind::NotNil,
            AssertionFailure::Nil { .. } => AssertionKind::Nil,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Get the name of the failing operation
    pub fn op(&self) -> &'static str {
        self.kind().op()
    }

    /// Get the caller-supplied message, verbatim
    pub fn message(&self) -> &str {
        match self {
            AssertionFailure::NotTrue { message }
            | AssertionFailure::NotFalse { message }
            | AssertionFailure::NotEqual { message, .. }
            | AssertionFailure::Equal { message, .. }
            | AssertionFailure::NotNil { message, .. }
            | AssertionFailure::Nil { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_code_mapping() {
        let kinds = vec![
            (AssertionKind::NotTrue, "ERR_ASSERT_TRUE"),
            (AssertionKind::NotFalse, "ERR_ASSERT_FALSE"),
            (AssertionKind::NotEqual, "ERR_ASSERT_EQUAL"),
            (AssertionKind::Equal, "ERR_ASSERT_NOT_EQUAL"),
            (AssertionKind::NotNil, "ERR_ASSERT_NIL"),
            (AssertionKind::Nil, "ERR_ASSERT_NOT_NIL"),
        ];

        for (kind, expected_code) in kinds {
            assert_eq!(kind.code(), expected_code);
        }
    }

    #[test]
    fn test_display_templates() {
        let failure = AssertionFailure::NotEqual {
            message: "custom".to_string(),
            expected: "1".to_string(),
            actual: "2".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "Assertion failed: custom - Expected: 1, Actual: 2"
        );

        let failure = AssertionFailure::NotTrue {
            message: "custom".to_string(),
        };
        assert_eq!(failure.to_string(), "Assertion failed: custom");
    }

    #[test]
    fn test_accessors() {
        let failure = AssertionFailure::NotNil {
            message: "value must be unset".to_string(),
            value: "Some(3)".to_string(),
        };

        assert_eq!(failure.kind(), AssertionKind::NotNil);
        assert_eq!(failure.code(), "ERR_ASSERT_NIL");
        assert_eq!(failure.op(), "assert_nil");
        assert_eq!(failure.message(), "value must be unset");
    }

    #[test]
    fn test_message_kept_verbatim() {
        let message = "  {braces} and - dashes: kept  ";
        let failure = AssertionFailure::Nil {
            message: message.to_string(),
        };
        assert_eq!(failure.message(), message);
        assert_eq!(
            failure.to_string(),
            format!("Assertion failed: {} - Expected non-nil value", message)
        );
    }
}
