use common::{ErrorLocation, HttpStatusCode};
use portal_core::error::config::ConfigError;
use portal_core::error::session::SessionError;
use portal_core::error::{CoreError, PortalClientError, ValidationError};

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by `fyw` commands.
///
/// `Display` is for the log file. What the user sees on the terminal comes
/// from [`FywError::user_message`].
#[derive(Debug, Error)]
pub enum FywError {
    /// Error from this app (logger, terminal, export file)
    #[error("Fyw Error: {message} {location}")]
    Fyw {
        message: String,
        location: ErrorLocation,
    },

    /// Error from portal-core (client, validation, config, session)
    #[error("Core Error: {source}")]
    Core {
        #[from]
        source: CoreError,
    },

    /// A student command ran with no matric number given or remembered
    #[error("Not Registered Error: {message} {location}")]
    NotRegistered {
        message: String,
        location: ErrorLocation,
    },

    /// An admin command ran without a stored admin token
    #[error("Not Signed In Error: {message} {location}")]
    NotSignedIn {
        message: String,
        location: ErrorLocation,
    },
}

impl FywError {
    #[track_caller]
    pub fn fyw(message: impl Into<String>) -> Self {
        FywError::Fyw {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_registered() -> Self {
        FywError::NotRegistered {
            message: String::from(
                "No matric number given or remembered. Run `fyw register` or `fyw login <MATRIC>` first.",
            ),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        FywError::NotSignedIn {
            message: String::from("Not signed in as admin. Run `fyw admin login <EMAIL>` first."),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// One sentence for the terminal.
    pub fn user_message(&self) -> String {
        match self {
            FywError::Core { source } => source.user_message(),
            FywError::Fyw { message, .. }
            | FywError::NotRegistered { message, .. }
            | FywError::NotSignedIn { message, .. } => message.clone(),
        }
    }

    /// 401 from an admin endpoint means the stored token is no longer any good.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            FywError::Core {
                source: CoreError::Client(client)
            } if client.status() == Some(HttpStatusCode::UNAUTHORIZED)
        )
    }
}

impl From<PortalClientError> for FywError {
    fn from(error: PortalClientError) -> Self {
        CoreError::from(error).into()
    }
}

impl From<ValidationError> for FywError {
    fn from(error: ValidationError) -> Self {
        CoreError::from(error).into()
    }
}

impl From<ConfigError> for FywError {
    fn from(error: ConfigError) -> Self {
        CoreError::from(error).into()
    }
}

impl From<SessionError> for FywError {
    fn from(error: SessionError) -> Self {
        CoreError::from(error).into()
    }
}
