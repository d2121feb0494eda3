//! Configuration validation error types.

use thiserror::Error;

/// Configuration validation error.
///
/// Each variant includes the field name and relevant values so invalid
/// configurations can be caught early with a clear message.
///
/// # Example
///
/// ```rust
/// use restkit::error::ConfigError;
///
/// let err = ConfigError::too_high("timeout", "600s", "5 minutes");
/// assert_eq!(err.field_name(), "timeout");
/// assert!(err.to_string().contains("timeout"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Field value exceeds the maximum allowed value.
    #[error("Field '{field}' value {value} exceeds maximum {max}")]
    ValueTooHigh {
        /// The name of the configuration field
        field: &'static str,
        /// The actual value that was provided
        value: String,
        /// The maximum allowed value
        max: String,
    },

    /// Field value is invalid for reasons other than range.
    #[error("Field '{field}' has invalid value: {reason}")]
    ValueInvalid {
        /// The name of the configuration field
        field: &'static str,
        /// The reason why the value is invalid
        reason: String,
    },
}

impl ConfigError {
    /// Returns the field name associated with this error.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self {
            ConfigError::ValueTooHigh { field, .. } | ConfigError::ValueInvalid { field, .. } => {
                field
            }
        }
    }

    /// Creates a new `ValueTooHigh` error.
    pub fn too_high(
        field: &'static str,
        value: impl Into<String>,
        max: impl Into<String>,
    ) -> Self {
        Self::ValueTooHigh {
            field,
            value: value.into(),
            max: max.into(),
        }
    }

    /// Creates a new `ValueInvalid` error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ValueInvalid {
            field,
            reason: reason.into(),
        }
    }
}
