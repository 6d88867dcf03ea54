use crate::{Package, PackageCode, PackageType};

use serde_json::json;

#[test]
fn given_lowercase_query_value_when_parsing_package_code_then_accepts_it() {
    assert_eq!("t".parse::<PackageCode>().unwrap(), PackageCode::CorporatePlus);
    assert_eq!(" C ".parse::<PackageCode>().unwrap(), PackageCode::CorporateOwambe);
    assert_eq!("F".parse::<PackageCode>().unwrap(), PackageCode::FullExperience);
}

#[test]
fn given_unknown_letter_when_parsing_package_code_then_returns_error() {
    let err = "Z".parse::<PackageCode>().unwrap_err();

    assert!(err.to_string().contains("Unknown Package Code Error"));
    assert!(err.to_string().contains("'Z'"));
}

/// **VALUE**: Only the plus tier asks for a day.
///
/// **BUG THIS CATCHES**: Would catch the day picker being shown (and `selectedDays` sent)
/// for the flat-priced tiers.
#[test]
fn given_each_package_code_when_checking_day_selection_then_only_plus_tier_requires_it() {
    let requiring: Vec<_> = PackageCode::ALL
        .iter()
        .filter(|code| code.requires_day_selection())
        .collect();

    assert_eq!(requiring, vec![&PackageCode::CorporatePlus]);
}

#[test]
fn given_package_document_when_deserialized_then_maps_wire_fields() {
    // GIVEN: A package as the API returns it
    let value = json!({
        "_id": "pkg_1",
        "code": "T",
        "name": "Corporate Plus",
        "packageType": "CORPORATE_PLUS",
        "price": 30000,
        "benefits": ["Corporate day", "One theme day"]
    });

    // WHEN: Deserializing
    let package: Package = serde_json::from_value(value).unwrap();

    // THEN: Fields land in the right places
    assert_eq!(package.id, "pkg_1");
    assert_eq!(package.code, PackageCode::CorporatePlus);
    assert_eq!(package.package_type, Some(PackageType::CorporatePlus));
    assert_eq!(package.price, 30000.0);
    assert_eq!(package.benefits.len(), 2);
}

#[test]
fn given_package_code_when_serialized_then_uses_wire_letter() {
    assert_eq!(serde_json::to_value(PackageCode::FullExperience).unwrap(), json!("F"));
    assert_eq!(PackageCode::CorporateOwambe.label(), "Corporate & Owambe — ₦40,000");
}
