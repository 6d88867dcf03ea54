use crate::output::{checkout, packages, progress_bar, student_table, theme_days};

use models::{Package, PackageCode};
use portal_core::admin::PageWindow;
use portal_core::payment::Checkout;

use url::Url;

#[test]
fn given_percentages_when_progress_bar_then_fills_proportionally() {
    assert_eq!(progress_bar(0), "[--------------------] 0%");
    assert_eq!(progress_bar(50), "[##########----------] 50%");
    assert_eq!(progress_bar(100), "[####################] 100%");
}

#[test]
fn given_plus_tier_when_packages_rendered_then_lists_theme_days() {
    let list = vec![Package {
        id: "pkg_t".to_string(),
        code: PackageCode::CorporatePlus,
        name: "Corporate Plus".to_string(),
        package_type: None,
        price: 30_000.0,
        benefits: vec!["Corporate day".to_string()],
    }];

    let text = packages(&list);

    assert!(text.contains("₦30,000.00"));
    assert!(text.contains("- Corporate day"));
    assert!(text.contains(&theme_days()));
    assert!(theme_days().contains("Tuesday (Denim Day)"));
}

#[test]
fn given_empty_page_when_table_rendered_then_says_no_students() {
    let text = student_table(&[], PageWindow::new(1, 10, 0));
    assert!(text.contains("No students found."));
    assert!(text.contains("Showing 0-0 of 0"));
}

#[test]
fn given_checkout_when_rendered_then_shows_link_and_next_step() {
    let text = checkout(
        &Checkout {
            authorization_url: Url::parse("https://checkout.example.com/abc").unwrap(),
            reference: Some("REF1".to_string()),
        },
        5_000.0,
    );
    assert!(text.contains("Pay ₦5,000.00 at:"));
    assert!(text.contains("https://checkout.example.com/abc"));
    assert!(text.contains("Reference: REF1"));
    assert!(text.contains("fyw verify"));
}
