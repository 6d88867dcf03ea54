pub mod config;
pub mod portal_client;
pub mod session;
pub mod validation;

pub use portal_client::PortalClientError;
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Client(#[from] portal_client::PortalClientError),

    #[error(transparent)]
    Validation(#[from] validation::ValidationError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Session(#[from] session::SessionError),
}

impl CoreError {
    /// The sentence to show the user. Diagnostics stay in `Display`.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Client(e) => e.user_message(),
            CoreError::Validation(e) => e.user_message().to_string(),
            CoreError::Config(_) | CoreError::Session(_) => {
                crate::api_error::GENERIC_FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
