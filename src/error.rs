//! Error types for time parsing and form-field cleaning.

use thiserror::Error;

/// Message shown to the end user whenever a time cannot be understood.
pub const INVALID_TIME_MESSAGE: &str = "Enter a valid time.";

/// Message shown when a required time field is left blank.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Error raised by the flexible time parser
///
/// Grammar failures and range failures deliberately share one kind, so a
/// caller can never act on a partially understood time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Enter a valid time.")]
    InvalidTimeFormat { input: String },
}

impl TimeError {
    pub(crate) fn invalid(input: &str) -> Self {
        TimeError::InvalidTimeFormat { input: input.to_string() }
    }

    /// The raw text that was rejected.
    pub fn input(&self) -> &str {
        match self {
            TimeError::InvalidTimeFormat { input } => input,
        }
    }
}

/// Error raised when cleaning a time form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0}")]
    Required(String),
    #[error("{message}")]
    Invalid {
        message: String,
        #[source]
        source: TimeError,
    },
}

impl FieldError {
    /// User-facing text for the form layer.
    pub fn message(&self) -> &str {
        match self {
            FieldError::Required(message) => message,
            FieldError::Invalid { message, .. } => message,
        }
    }
}
