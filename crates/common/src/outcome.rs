//! Mutation outcome handed back across the engine boundary
//!
//! Mutating operations report `(success, message)` instead of failing the
//! caller for storage-level problems. Validation errors are the exception:
//! they stay `Err` so bad input is never mistaken for a storage hiccup.

use serde::Serialize;

use crate::error::{Error, Result};

/// Result of a mutating operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T = ()> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
}

impl<T> Outcome<T> {
    pub fn ok(value: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            value: Some(value),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            value: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Fold a domain result into an outcome.
    ///
    /// `Error::Validation` propagates; every other error becomes a failed
    /// outcome carrying the error message.
    pub fn capture(result: Result<T>, success_message: impl Into<String>) -> Result<Self> {
        match result {
            Ok(value) => Ok(Self::ok(value, success_message)),
            Err(err @ Error::Validation(_)) => Err(err),
            Err(err) => {
                tracing::warn!(error = %err, code = err.error_code(), "Mutation failed");
                Ok(Self::failed(err.to_string()))
            }
        }
    }
}
