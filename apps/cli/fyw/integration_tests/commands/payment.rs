use super::helpers::{Harness, status_body};

use fyw::cli::{Command, PayArgs, PresetArg};

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_status(server: &MockServer, total_paid: f64, status: &str) {
    Mock::given(method("GET"))
        .and(path("/api/students/190401001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body("190401001", total_paid, status)))
        .mount(server)
        .await;
}

async fn mount_initialize(server: &MockServer, amount: f64) {
    Mock::given(method("POST"))
        .and(path("/api/payments/initialize"))
        .and(body_partial_json(json!({ "studentId": "190401001", "amount": amount })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "authorization_url": "https://checkout.example.com/xyz", "reference": "REF-9" }
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn given_default_amount_when_pay_then_prints_checkout_for_installment() {
    let server = MockServer::start().await;
    mount_status(&server, 0.0, "NOT_PAID").await;
    mount_initialize(&server, 5_000.0).await;

    let mut harness = Harness::new(&server);
    harness.ctx.session.remember_student("190401001").unwrap();

    let out = harness
        .run(Command::Pay(PayArgs { amount: None, preset: None, matric_number: None }))
        .await
        .unwrap();

    assert!(out.contains("Pay ₦5,000.00 at:"));
    assert!(out.contains("https://checkout.example.com/xyz"));
}

#[tokio::test]
async fn given_half_preset_when_pay_then_requests_half_of_outstanding() {
    let server = MockServer::start().await;
    mount_status(&server, 20_000.0, "PARTIALLY_PAID").await;
    mount_initialize(&server, 20_000.0).await;

    let mut harness = Harness::new(&server);
    let out = harness
        .run(Command::Pay(PayArgs {
            amount: None,
            preset: Some(PresetArg::Half),
            matric_number: Some("190401001".to_string()),
        }))
        .await
        .unwrap();

    assert!(out.contains("Pay ₦20,000.00 at:"));
}

/// **VALUE**: An amount above the balance is capped before it reaches the gateway.
///
/// **WHY THIS MATTERS**: Overpayment has no refund path in the portal.
///
/// **BUG THIS CATCHES**: Would catch `--amount` bypassing the dashboard clamp.
#[tokio::test]
async fn given_amount_above_balance_when_pay_then_caps_and_says_so() {
    let server = MockServer::start().await;
    mount_status(&server, 50_000.0, "PARTIALLY_PAID").await;
    mount_initialize(&server, 10_000.0).await;

    let mut harness = Harness::new(&server);
    let out = harness
        .run(Command::Pay(PayArgs {
            amount: Some(99_000.0),
            preset: None,
            matric_number: Some("190401001".to_string()),
        }))
        .await
        .unwrap();

    assert!(out.contains("Amount capped at the outstanding balance of ₦10,000.00."));
    assert!(out.contains("Pay ₦10,000.00 at:"));
}

#[tokio::test]
async fn given_fully_paid_when_pay_then_fails_without_initializing() {
    let server = MockServer::start().await;
    mount_status(&server, 60_000.0, "FULLY_PAID").await;
    Mock::given(method("POST"))
        .and(path("/api/payments/initialize"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut harness = Harness::new(&server);
    let err = harness
        .run(Command::Pay(PayArgs {
            amount: None,
            preset: None,
            matric_number: Some("190401001".to_string()),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "This package has already been fully paid.");
}

#[tokio::test]
async fn given_callback_url_when_verify_then_remembers_payer_and_shows_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments/verify"))
        .and(query_param("reference", "REF-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "matricNumber": "190401001", "amount": 5000 }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_status(&server, 5_000.0, "PARTIALLY_PAID").await;

    let mut harness = Harness::new(&server);
    let out = harness
        .run(Command::Verify {
            reference: "https://portal.example.com/payment/callback?trxref=REF-9&reference=REF-9".to_string(),
        })
        .await
        .unwrap();

    assert!(out.contains("Payment REF-9 verified (₦5,000.00) for 190401001."));
    assert!(out.contains("Outstanding: ₦55,000.00"));
    assert_eq!(harness.ctx.session.matric_number(), Some("190401001"));
}

#[tokio::test]
async fn given_callback_without_reference_when_verify_then_reports_missing_reference() {
    let server = MockServer::start().await;
    let mut harness = Harness::new(&server);

    let err = harness
        .run(Command::Verify {
            reference: "https://portal.example.com/payment/callback?status=cancelled".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Missing payment reference in URL.");
}
