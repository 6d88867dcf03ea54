use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown Package Code Error: '{value}' {location}")]
    UnknownPackageCode {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown Weekday Error: '{value}' {location}")]
    UnknownWeekday {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown Payment Status Error: '{value}' {location}")]
    UnknownPaymentStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown Gender Error: '{value}' {location}")]
    UnknownGender {
        value: String,
        location: ErrorLocation,
    },
}
