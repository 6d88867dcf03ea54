use crate::error::model_error::ModelError;
use crate::{ErrorLocation, Gender, IdentifyRequest, PackageCode, Weekday};

use std::panic::Location;

/// Builder for identify requests.
///
/// Trims text fields, drops a blank email, and only carries selected days
/// for the tier that uses them. Presence checks only; the form and day
/// rules are enforced by `portal-core` before a builder is ever filled.
#[derive(Debug, Default)]
pub struct IdentifyRequestBuilder {
    matric_number: Option<String>,
    full_name: Option<String>,
    gender: Option<Gender>,
    email: Option<String>,
    package_code: Option<PackageCode>,
    selected_days: Vec<Weekday>,
}

impl IdentifyRequestBuilder {
    pub fn with_matric_number(mut self, matric_number: impl Into<String>) -> Self {
        self.matric_number = Some(matric_number.into());
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn with_package_code(mut self, code: PackageCode) -> Self {
        self.package_code = Some(code);
        self
    }

    pub fn with_selected_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.selected_days = days.into_iter().collect();
        self
    }

    #[track_caller]
    pub fn build(self) -> Result<IdentifyRequest, ModelError> {
        let matric_number = required_text(self.matric_number, "Matric number")?;
        let full_name = required_text(self.full_name, "Full name")?;

        let gender = self.gender.ok_or_else(|| ModelError::Validation {
            message: String::from("Gender is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let package_code = self.package_code.ok_or_else(|| ModelError::Validation {
            message: String::from("Package is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let email = self
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        let selected_days = package_code
            .requires_day_selection()
            .then_some(self.selected_days);

        Ok(IdentifyRequest {
            matric_number,
            full_name,
            gender,
            email,
            package_code,
            selected_days,
        })
    }
}

#[track_caller]
fn required_text(value: Option<String>, label: &str) -> Result<String, ModelError> {
    let trimmed = value.as_deref().map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ModelError::Validation {
            message: format!("{label} is required"),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(trimmed.to_string())
}
