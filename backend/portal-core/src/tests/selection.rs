use crate::error::ValidationError;
use crate::error::validation::DAY_REQUIREMENT_MESSAGE;
use crate::selection::{DaySelection, PackageSelection, validate};

use models::{PackageCode, Weekday};

use std::collections::BTreeSet;

fn days(list: &[Weekday]) -> BTreeSet<Weekday> {
    list.iter().copied().collect()
}

/// **VALUE**: Corporate Plus accepts exactly one of Tuesday, Wednesday, Thursday.
///
/// **WHY THIS MATTERS**: The identify endpoint rejects any other shape. Catching it
/// locally keeps the student on the form with a clear message.
///
/// **BUG THIS CATCHES**: Would catch a cardinality check written as `<= 1` or a
/// membership check that lets Monday or Friday through.
#[test]
fn given_plus_tier_when_validate_then_requires_single_theme_day() {
    for day in Weekday::PLUS_TIER_DAYS {
        assert!(validate(PackageCode::CorporatePlus, &days(&[day])).is_ok());
    }

    let rejected = [
        days(&[]),
        days(&[Weekday::Tuesday, Weekday::Wednesday]),
        days(&[Weekday::Monday]),
        days(&[Weekday::Friday]),
    ];
    for set in &rejected {
        let err = validate(PackageCode::CorporatePlus, set).unwrap_err();
        assert!(
            matches!(err, ValidationError::DayRequirement { .. }),
            "expected DayRequirement for {set:?}"
        );
        assert_eq!(err.user_message(), DAY_REQUIREMENT_MESSAGE);
    }
}

#[test]
fn given_fixed_day_tiers_when_validate_then_accepts_any_set() {
    for code in [PackageCode::CorporateOwambe, PackageCode::FullExperience] {
        assert!(validate(code, &days(&[])).is_ok());
        assert!(validate(code, &days(&[Weekday::Monday, Weekday::Friday])).is_ok());
    }
}

#[test]
fn given_day_selection_when_toggled_then_holds_at_most_one_day() {
    // GIVEN: An empty picker
    let mut selection = DaySelection::default();
    assert!(selection.days().is_empty());

    // WHEN: Picking Tuesday, then Thursday
    selection.toggle(Weekday::Tuesday);
    selection.toggle(Weekday::Thursday);

    // THEN: Thursday replaced Tuesday
    assert_eq!(selection.days(), days(&[Weekday::Thursday]));

    // WHEN: Picking Thursday again
    selection.toggle(Weekday::Thursday);

    // THEN: The set is empty
    assert!(selection.days().is_empty());
}

#[test]
fn given_package_selection_when_days_to_send_then_only_plus_tier_sends_days() {
    let plus = PackageSelection::new(PackageCode::CorporatePlus).with_day(Weekday::Wednesday);
    assert!(plus.validate().is_ok());
    assert_eq!(plus.days_to_send(), vec![Weekday::Wednesday]);

    let full = PackageSelection::new(PackageCode::FullExperience).with_day(Weekday::Wednesday);
    assert!(full.validate().is_ok());
    assert!(full.days_to_send().is_empty());

    let mut cleared = plus;
    cleared.days.toggle(Weekday::Wednesday);
    assert!(cleared.validate().is_err());
}
