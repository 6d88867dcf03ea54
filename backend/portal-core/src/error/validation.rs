use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

pub const DAY_REQUIREMENT_MESSAGE: &str =
    "Please select exactly one additional day (Tuesday, Wednesday, or Thursday).";

/// A local precondition failed. Raised before any request is sent.
#[derive(Debug, ThisError)]
pub enum ValidationError {
    /// Plus-tier registration without exactly one Tuesday/Wednesday/Thursday pick.
    #[error("Day Requirement Error: {message} {location}")]
    DayRequirement {
        message: String,
        location: ErrorLocation,
    },

    #[error("Form Error: {field}: {message} {location}")]
    Form {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Amount Error: {message} {location}")]
    Amount {
        message: String,
        location: ErrorLocation,
    },
}

impl ValidationError {
    #[track_caller]
    pub fn day_requirement() -> Self {
        ValidationError::DayRequirement {
            message: DAY_REQUIREMENT_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn form(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError::Form {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn amount(message: impl Into<String>) -> Self {
        ValidationError::Amount {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn user_message(&self) -> &str {
        match self {
            ValidationError::DayRequirement { message, .. }
            | ValidationError::Form { message, .. }
            | ValidationError::Amount { message, .. } => message,
        }
    }
}
