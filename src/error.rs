//! Error types for nullable scalar conversions.

use std::fmt;

/// Errors that can occur while decoding or encoding a nullable scalar.
#[derive(Debug, thiserror::Error)]
pub enum NullError {
    #[error("cannot decode {found} into nullable {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("cannot parse {input:?} as {expected}: {reason}")]
    Parse {
        input: String,
        expected: &'static str,
        reason: String,
    },

    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    #[error("malformed document: {0}")]
    Document(String),

    #[error("JSON syntax error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NullError {
    pub(crate) fn mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.into(),
        }
    }

    pub(crate) fn parse(
        input: impl Into<String>,
        expected: &'static str,
        reason: impl fmt::Display,
    ) -> Self {
        Self::Parse {
            input: input.into(),
            expected,
            reason: reason.to_string(),
        }
    }

    /// Wraps a value that has no representation in the target format.
    pub fn unsupported(value: impl fmt::Display) -> Self {
        Self::UnsupportedValue(value.to_string())
    }

    /// Returns `true` for [`NullError::TypeMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns `true` for [`NullError::Parse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns `true` for [`NullError::UnsupportedValue`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedValue(_))
    }
}
