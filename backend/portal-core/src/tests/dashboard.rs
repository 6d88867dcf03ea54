use super::fixtures::full_experience_status;

use crate::dashboard::{Dashboard, PaymentPreset};
use crate::error::ValidationError;

const DEFAULT_INSTALLMENT: f64 = 5_000.0;

#[test]
fn given_outstanding_balance_when_dashboard_created_then_prefills_capped_installment() {
    let large = Dashboard::new(full_experience_status(0.0, "NOT_PAID"), DEFAULT_INSTALLMENT);
    assert_eq!(large.outstanding(), 60_000.0);
    assert_eq!(large.amount(), 5_000.0);

    let small = Dashboard::new(full_experience_status(57_000.0, "PARTIALLY_PAID"), DEFAULT_INSTALLMENT);
    assert_eq!(small.amount(), 3_000.0);

    let paid = Dashboard::new(full_experience_status(60_000.0, "FULLY_PAID"), DEFAULT_INSTALLMENT);
    assert_eq!(paid.amount(), 0.0);
    assert!(!paid.can_pay());
}

#[test]
fn given_partial_payment_when_progress_computed_then_rounds_percentage() {
    let dashboard = Dashboard::new(full_experience_status(20_000.0, "PARTIALLY_PAID"), DEFAULT_INSTALLMENT);
    assert_eq!(dashboard.progress_percent(), 33);

    let done = Dashboard::new(full_experience_status(60_000.0, "FULLY_PAID"), DEFAULT_INSTALLMENT);
    assert_eq!(done.progress_percent(), 100);
}

/// **VALUE**: The amount box never exceeds the outstanding balance.
///
/// **WHY THIS MATTERS**: The gateway would charge whatever is sent. Over-paying a
/// package has no refund path.
///
/// **BUG THIS CATCHES**: Would catch presets or manual entry bypassing the cap,
/// or a balance refresh leaving a stale larger amount behind.
#[test]
fn given_amount_changes_when_applied_then_stays_within_outstanding() {
    let mut dashboard = Dashboard::new(full_experience_status(20_000.0, "PARTIALLY_PAID"), DEFAULT_INSTALLMENT);

    dashboard.set_amount(100_000.0);
    assert_eq!(dashboard.amount(), 40_000.0);

    dashboard.set_amount(-5.0);
    assert_eq!(dashboard.amount(), 0.0);
    assert!(!dashboard.can_pay());

    dashboard.apply_preset(PaymentPreset::Quarter);
    assert_eq!(dashboard.amount(), 10_000.0);

    dashboard.apply_preset(PaymentPreset::Full);
    assert_eq!(dashboard.amount(), 40_000.0);
    assert!(dashboard.can_pay());
}

#[test]
fn given_payable_dashboard_when_payment_request_built_then_uses_matric_as_student_id() {
    let mut dashboard = Dashboard::new(full_experience_status(0.0, "NOT_PAID"), DEFAULT_INSTALLMENT);
    dashboard.apply_preset(PaymentPreset::Half);

    let request = dashboard.payment_request().unwrap();
    assert_eq!(request.student_id, "190401001");
    assert_eq!(request.amount, 30_000.0);
    assert_eq!(request.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn given_nothing_to_pay_when_payment_request_built_then_returns_amount_error() {
    let paid = Dashboard::new(full_experience_status(60_000.0, "FULLY_PAID"), DEFAULT_INSTALLMENT);
    let err = paid.payment_request().unwrap_err();
    assert!(matches!(err, ValidationError::Amount { .. }));
    assert_eq!(err.user_message(), "This package has already been fully paid.");

    let mut zero = Dashboard::new(full_experience_status(0.0, "NOT_PAID"), DEFAULT_INSTALLMENT);
    zero.set_amount(0.0);
    assert_eq!(
        zero.payment_request().unwrap_err().user_message(),
        "Payment amount must be greater than zero."
    );
}

#[test]
fn given_payment_status_when_invite_links_requested_then_only_fully_paid_gets_links() {
    let mut paid_status = full_experience_status(60_000.0, "FULLY_PAID");
    paid_status.student.invites = Some(models::Invites {
        pdf_url: Some("https://cdn.example.com/i.pdf".to_string()),
        image_url: None,
        generated_at: None,
    });
    let paid = Dashboard::new(paid_status, DEFAULT_INSTALLMENT);
    let links = paid.invite_links().unwrap();
    assert_eq!(links.pdf_url.as_deref(), Some("https://cdn.example.com/i.pdf"));
    assert_eq!(links.image_url, None);

    let mut partial_status = full_experience_status(30_000.0, "PARTIALLY_PAID");
    partial_status.student.invites = paid.student.invites.clone();
    let partial = Dashboard::new(partial_status, DEFAULT_INSTALLMENT);
    assert_eq!(partial.invite_links(), None);
}
