use crate::api_error::GENERIC_FALLBACK_MESSAGE;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PortalClientError {
    /// Transport failure: DNS, TLS, timeout, connection reset.
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    /// A 2xx body that did not match the expected shape.
    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// Non-2xx response. `message` is already normalized for display.
    #[error("Request Error: HTTP {status} - {message} {location}")]
    Request {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    /// A 2xx response missing something the flow needs. `message` is user-facing.
    #[error("Unexpected Response Error: {message} {location}")]
    UnexpectedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl PortalClientError {
    pub fn user_message(&self) -> String {
        match self {
            PortalClientError::Request { message, .. }
            | PortalClientError::UnexpectedResponse { message, .. } => message.clone(),
            PortalClientError::Http { .. }
            | PortalClientError::Json { .. }
            | PortalClientError::UrlParse { .. } => GENERIC_FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            PortalClientError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[track_caller]
    pub(crate) fn unexpected(message: impl Into<String>) -> Self {
        PortalClientError::UnexpectedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for PortalClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        PortalClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for PortalClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        PortalClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for PortalClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        PortalClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
