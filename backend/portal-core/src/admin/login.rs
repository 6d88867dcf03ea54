use crate::error::ValidationError;

use common::RedactedToken;

const MIN_PASSWORD_LEN: usize = 6;

/// Admin login form.
#[derive(Debug, Clone)]
pub struct AdminLoginForm {
    pub email: String,
    pub password: RedactedToken,
}

impl AdminLoginForm {
    pub fn new(email: impl Into<String>, password: RedactedToken) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.email.trim().contains('@') {
            return Err(ValidationError::form("email", "Enter a valid email address."));
        }
        if self.password.trimmed_len() < MIN_PASSWORD_LEN {
            return Err(ValidationError::form(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters."),
            ));
        }
        Ok(())
    }
}
