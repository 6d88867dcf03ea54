use crate::error::ValidationError;
use crate::registration::RegistrationForm;
use crate::selection::PackageSelection;

use models::{Gender, PackageCode, Weekday};

fn filled_form() -> RegistrationForm {
    RegistrationForm {
        matric_number: " 190401001 ".to_string(),
        full_name: "Ada Obi".to_string(),
        gender: Some(Gender::Female),
        email: Some("  ".to_string()),
    }
}

#[test]
fn given_incomplete_form_when_validated_then_reports_first_missing_field() {
    let mut form = RegistrationForm::default();
    assert!(!form.can_continue());

    form.matric_number = "12345".to_string();
    match form.validate().unwrap_err() {
        ValidationError::Form { field, .. } => assert_eq!(field, "matricNumber"),
        other => panic!("unexpected error: {other}"),
    }

    form.matric_number = "123456".to_string();
    form.full_name = " Al ".to_string();
    match form.validate().unwrap_err() {
        ValidationError::Form { field, .. } => assert_eq!(field, "fullName"),
        other => panic!("unexpected error: {other}"),
    }

    form.full_name = "Ada".to_string();
    match form.validate().unwrap_err() {
        ValidationError::Form { field, message, .. } => {
            assert_eq!(field, "gender");
            assert_eq!(message, "Please select a gender.");
        }
        other => panic!("unexpected error: {other}"),
    }

    form.gender = Some(Gender::Male);
    assert!(form.can_continue());
}

/// **VALUE**: The identify request carries the plus-tier day and trimmed identity.
///
/// **WHY THIS MATTERS**: This is the last local check before the network. A
/// stale day set on a fixed-day tier or an untrimmed matric would be stored as-is.
///
/// **BUG THIS CATCHES**: Would catch `selectedDays` being sent for Full Experience,
/// or a blank email reaching the API as `""`.
#[test]
fn given_valid_form_when_identify_request_built_then_matches_package_rules() {
    let form = filled_form();

    let plus = form
        .identify_request(&PackageSelection::new(PackageCode::CorporatePlus).with_day(Weekday::Tuesday))
        .unwrap();
    assert_eq!(plus.matric_number, "190401001");
    assert_eq!(plus.package_code, PackageCode::CorporatePlus);
    assert_eq!(plus.selected_days, Some(vec![Weekday::Tuesday]));
    assert_eq!(plus.email, None);

    let full = form
        .identify_request(&PackageSelection::new(PackageCode::FullExperience))
        .unwrap();
    assert_eq!(full.selected_days, None);
}

#[test]
fn given_plus_tier_without_day_when_identify_request_built_then_fails_before_network() {
    let err = filled_form()
        .identify_request(&PackageSelection::new(PackageCode::CorporatePlus))
        .unwrap_err();
    assert!(matches!(err, ValidationError::DayRequirement { .. }));
}
