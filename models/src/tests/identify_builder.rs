use crate::{Gender, IdentifyRequestBuilder, PackageCode, Weekday};

use serde_json::json;

#[test]
fn given_plus_tier_when_building_then_serializes_selected_days() {
    // GIVEN: A filled builder for the plus tier
    let request = IdentifyRequestBuilder::default()
        .with_matric_number("  190401001 ")
        .with_full_name("Ada Obi ")
        .with_gender(Gender::Female)
        .with_email(Some(String::from("  ")))
        .with_package_code(PackageCode::CorporatePlus)
        .with_selected_days([Weekday::Wednesday])
        .build()
        .unwrap();

    // WHEN: Serializing
    let body = serde_json::to_value(&request).unwrap();

    // THEN: Trimmed, blank email dropped, days included
    assert_eq!(
        body,
        json!({
            "matricNumber": "190401001",
            "fullName": "Ada Obi",
            "gender": "female",
            "packageCode": "T",
            "selectedDays": ["WEDNESDAY"]
        })
    );
}

/// **VALUE**: Days picked before switching to a flat tier are not sent.
///
/// **BUG THIS CATCHES**: Would catch a stale Tuesday pick leaking into a Full Experience
/// registration, which the API rejects.
#[test]
fn given_other_tier_with_leftover_days_when_building_then_omits_selected_days() {
    let request = IdentifyRequestBuilder::default()
        .with_matric_number("190401001")
        .with_full_name("Ada Obi")
        .with_gender(Gender::Female)
        .with_email(Some(String::from("ada@example.com")))
        .with_package_code(PackageCode::FullExperience)
        .with_selected_days([Weekday::Tuesday])
        .build()
        .unwrap();

    assert_eq!(request.selected_days, None);
    assert_eq!(request.email.as_deref(), Some("ada@example.com"));

    let body = serde_json::to_value(&request).unwrap();
    assert!(body.get("selectedDays").is_none());
}

#[test]
fn given_missing_matric_number_when_building_then_returns_validation_error() {
    let result = IdentifyRequestBuilder::default()
        .with_full_name("Ada Obi")
        .with_gender(Gender::Female)
        .with_package_code(PackageCode::CorporateOwambe)
        .build();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Matric number is required"));
}

#[test]
fn given_missing_gender_when_building_then_returns_validation_error() {
    let result = IdentifyRequestBuilder::default()
        .with_matric_number("190401001")
        .with_full_name("Ada Obi")
        .with_package_code(PackageCode::CorporateOwambe)
        .build();

    assert!(result.unwrap_err().to_string().contains("Gender is required"));
}
