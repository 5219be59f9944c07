//! Form-field wrapper around the time parser.
//
// A field decides what blank input means (required or optional) and turns
// parser failures into the message shown next to the form input.

use crate::config::FieldConfig;
use crate::error::{FieldError, INVALID_TIME_MESSAGE, REQUIRED_MESSAGE};
use crate::parser;
use crate::time::ParsedTime;
use chrono::NaiveTime;
use log::debug;

/// A value submitted for a time field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeInput {
    Empty,
    Text(String),
    /// An already-structured time, passed through unchanged.
    Time(NaiveTime),
}

impl From<&str> for TimeInput {
    fn from(value: &str) -> Self {
        TimeInput::Text(value.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(value: String) -> Self {
        TimeInput::Text(value)
    }
}

impl From<NaiveTime> for TimeInput {
    fn from(value: NaiveTime) -> Self {
        TimeInput::Time(value)
    }
}

impl<T: Into<TimeInput>> From<Option<T>> for TimeInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(TimeInput::Empty, Into::into)
    }
}

/// User-facing messages for field errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMessages {
    pub invalid: String,
    pub required: String,
}

impl Default for FieldMessages {
    fn default() -> Self {
        Self { invalid: INVALID_TIME_MESSAGE.to_string(), required: REQUIRED_MESSAGE.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeField {
    pub required: bool,
    pub messages: FieldMessages,
}

impl Default for TimeField {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TimeField {
    pub fn new(required: bool) -> Self {
        Self { required, messages: FieldMessages::default() }
    }

    pub fn optional() -> Self {
        Self::new(false)
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            required: config.required,
            messages: FieldMessages {
                invalid: config.invalid_message.clone(),
                required: config.required_message.clone(),
            },
        }
    }

    /// Clean a submitted value into a time.
    ///
    /// Returns `Ok(None)` only for blank input on an optional field.
    pub fn clean(&self, input: impl Into<TimeInput>) -> Result<Option<ParsedTime>, FieldError> {
        match input.into() {
            TimeInput::Time(time) => Ok(Some(ParsedTime::from(time))),
            TimeInput::Empty => self.blank(),
            TimeInput::Text(text) => match parser::parse(&text) {
                Ok(Some(time)) => Ok(Some(time)),
                Ok(None) => self.blank(),
                Err(source) => {
                    debug!("Rejecting time field value {:?}", text);
                    Err(FieldError::Invalid { message: self.messages.invalid.clone(), source })
                }
            },
        }
    }

    fn blank(&self) -> Result<Option<ParsedTime>, FieldError> {
        if self.required {
            Err(FieldError::Required(self.messages.required.clone()))
        } else {
            Ok(None)
        }
    }
}
