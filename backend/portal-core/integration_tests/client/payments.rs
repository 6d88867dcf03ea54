use super::helpers::client_for;

use common::HttpStatusCode;
use models::InitializePaymentRequest;
use portal_core::error::PortalClientError;
use portal_core::payment::{MISSING_MATRIC_MESSAGE, NO_AUTHORIZATION_URL_MESSAGE};

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payment_request(amount: f64) -> InitializePaymentRequest {
    InitializePaymentRequest {
        student_id: "190401001".to_string(),
        amount,
        email: Some("ada@example.com".to_string()),
    }
}

#[tokio::test]
async fn given_authorization_url_when_initialize_payment_then_returns_checkout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/payments/initialize"))
        .and(body_json(json!({
            "studentId": "190401001",
            "amount": 5000.0,
            "email": "ada@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "authorization_url": "https://checkout.paystack.com/abc123",
                "access_code": "abc123",
                "reference": "REF-1"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let checkout = client_for(&server)
        .await
        .initialize_payment(&payment_request(5_000.0))
        .await
        .unwrap();

    assert_eq!(
        checkout.authorization_url.as_str(),
        "https://checkout.paystack.com/abc123"
    );
    assert_eq!(checkout.reference.as_deref(), Some("REF-1"));
}

#[tokio::test]
async fn given_no_authorization_url_when_initialize_payment_then_returns_unexpected_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/payments/initialize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": {} })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .initialize_payment(&payment_request(5_000.0))
        .await
        .unwrap_err();

    assert!(matches!(err, PortalClientError::UnexpectedResponse { .. }));
    assert_eq!(err.user_message(), NO_AUTHORIZATION_URL_MESSAGE);
}

/// **VALUE**: A field-error 400 from the payment endpoint reads as one sentence.
///
/// **WHY THIS MATTERS**: This is the double-encoded shape the API actually sends.
/// Showing the raw JSON string would be unreadable.
///
/// **BUG THIS CATCHES**: Would catch the client bypassing the normalizer or
/// passing it the wrong status.
#[tokio::test]
async fn given_field_errors_when_initialize_payment_then_returns_sentence() {
    let server = MockServer::start().await;
    let errors = json!([{ "field": "body.amount", "message": "Number must be greater than 0" }]);
    Mock::given(method("POST"))
        .and(path("/api/payments/initialize"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "success": false, "message": errors.to_string() })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .initialize_payment(&payment_request(0.0))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(HttpStatusCode::BAD_REQUEST));
    assert_eq!(err.user_message(), "Amount must be greater than 0");
}

#[tokio::test]
async fn given_rate_limit_when_initialize_payment_then_returns_payment_throttle_sentence() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/payments/initialize"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "message": "Too many payment requests, please try again later"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .initialize_payment(&payment_request(5_000.0))
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "Too many payment attempts. Please wait a moment and try again."
    );
}

#[tokio::test]
async fn given_verified_reference_when_verify_payment_then_returns_matric() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments/verify"))
        .and(query_param("reference", "REF 1/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "matricNumber": "190401001", "amount": 5000, "status": "success" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .await
        .verify_payment("REF 1/2")
        .await
        .unwrap();

    assert_eq!(outcome.matric_number, "190401001");
    assert_eq!(outcome.reference, "REF 1/2");
}

#[tokio::test]
async fn given_verified_without_matric_when_verify_payment_then_explains() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": {} })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .verify_payment("REF-2")
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), MISSING_MATRIC_MESSAGE);
}

#[tokio::test]
async fn given_failed_verification_when_verify_payment_then_maps_known_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments/verify"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Payment verification failed"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .verify_payment("REF-3")
        .await
        .unwrap_err();
    assert_eq!(
        err.user_message(),
        "We couldn't verify your payment. Please contact support if money was deducted."
    );
}
