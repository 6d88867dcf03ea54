//! Student registration: identity form, then package choice.

use crate::error::ValidationError;
use crate::selection::PackageSelection;

use models::{Gender, IdentifyRequest, IdentifyRequestBuilder};

pub const MIN_MATRIC_NUMBER_LEN: usize = 6;
pub const MIN_FULL_NAME_LEN: usize = 3;

/// Step one of registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub matric_number: String,
    pub full_name: String,
    pub gender: Option<Gender>,
    pub email: Option<String>,
}

impl RegistrationForm {
    /// Whether the "Continue" step to package selection is enabled.
    pub fn can_continue(&self) -> bool {
        self.validate().is_ok()
    }

    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.matric_number.trim().chars().count() < MIN_MATRIC_NUMBER_LEN {
            return Err(ValidationError::form(
                "matricNumber",
                format!("Matric number must be at least {MIN_MATRIC_NUMBER_LEN} characters."),
            ));
        }
        if self.full_name.trim().chars().count() < MIN_FULL_NAME_LEN {
            return Err(ValidationError::form(
                "fullName",
                format!("Full name must be at least {MIN_FULL_NAME_LEN} characters."),
            ));
        }
        if self.gender.is_none() {
            return Err(ValidationError::form("gender", "Please select a gender."));
        }
        Ok(())
    }

    /// Build the identify request for the chosen package.
    ///
    /// Re-checks the form and the day rule so nothing invalid reaches the
    /// network, even if the caller skipped the interactive checks.
    #[track_caller]
    pub fn identify_request(
        &self,
        selection: &PackageSelection,
    ) -> Result<IdentifyRequest, ValidationError> {
        self.validate()?;
        selection.validate()?;

        let mut builder = IdentifyRequestBuilder::default()
            .with_matric_number(self.matric_number.as_str())
            .with_full_name(self.full_name.as_str())
            .with_email(self.email.clone())
            .with_package_code(selection.code)
            .with_selected_days(selection.days_to_send());

        if let Some(gender) = self.gender {
            builder = builder.with_gender(gender);
        }

        builder
            .build()
            .map_err(|e| ValidationError::form("registration", e.to_string()))
    }
}
