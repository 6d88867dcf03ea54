use models::{PackageCode, Weekday};
use portal_core::error::validation::DAY_REQUIREMENT_MESSAGE;
use portal_core::error::{CoreError, ValidationError};
use portal_core::selection::validate;

use std::collections::BTreeSet;

#[test]
fn given_day_requirement_error_when_formatted_then_includes_message_and_location() {
    let err = validate(PackageCode::CorporatePlus, &BTreeSet::new()).unwrap_err();

    let text = err.to_string();

    assert!(text.contains("Day Requirement Error"));
    assert!(text.contains(DAY_REQUIREMENT_MESSAGE));
    assert!(text.contains(".rs:"));
}

#[test]
fn given_validation_error_when_wrapped_in_core_error_then_user_message_is_unchanged() {
    let days: BTreeSet<Weekday> = [Weekday::Monday].into_iter().collect();
    let err = validate(PackageCode::CorporatePlus, &days).unwrap_err();

    let core = CoreError::from(err);

    assert!(matches!(core, CoreError::Validation(ValidationError::DayRequirement { .. })));
    assert_eq!(core.user_message(), DAY_REQUIREMENT_MESSAGE);
}

#[test]
fn given_form_error_when_formatted_then_names_field() {
    let err = ValidationError::form("matricNumber", "Matric number must be at least 6 characters.");
    assert!(err.to_string().contains("matricNumber"));
    assert_eq!(err.user_message(), "Matric number must be at least 6 characters.");
}
