use super::helpers::{client_for, student};

use common::RedactedToken;
use models::PaymentStatus;
use portal_core::admin::{AdminLoginForm, StudentQuery};
use portal_core::error::PortalClientError;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn login_form() -> AdminLoginForm {
    AdminLoginForm::new("admin@example.com", RedactedToken::new("secret-pass"))
}

#[tokio::test]
async fn given_valid_credentials_when_admin_login_then_returns_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/auth/login"))
        .and(body_json(json!({ "email": "admin@example.com", "password": "secret-pass" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "token": "jwt-token", "admin": { "email": "admin@example.com" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client_for(&server).await.admin_login(&login_form()).await.unwrap();

    assert_eq!(session.token.expose(), "jwt-token");
    assert_eq!(session.admin.email, "admin@example.com");
}

#[tokio::test]
async fn given_unsuccessful_envelope_when_admin_login_then_uses_message_or_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .admin_login(&login_form())
        .await
        .unwrap_err();

    assert!(matches!(err, PortalClientError::UnexpectedResponse { .. }));
    assert_eq!(err.user_message(), "Login failed");
}

#[tokio::test]
async fn given_rejected_credentials_when_admin_login_then_shows_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .admin_login(&login_form())
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[tokio::test]
async fn given_rejected_credentials_without_message_when_admin_login_then_says_login_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .admin_login(&login_form())
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Login failed");
}

/// **VALUE**: The student list sends filters, paging and the bearer token.
///
/// **WHY THIS MATTERS**: The admin endpoint is the only authenticated one. A missing
/// header returns 401 and the table stays empty.
///
/// **BUG THIS CATCHES**: Would catch query keys drifting from the API's camelCase
/// names or the token not being attached.
#[tokio::test]
async fn given_filters_and_token_when_list_students_then_sends_query_and_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/students"))
        .and(query_param("search", "obi"))
        .and(query_param("status", "FULLY_PAID"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .and(header("authorization", "Bearer jwt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "students": [student("190401001", 60_000.0, "FULLY_PAID")],
                "pagination": { "page": 1, "limit": 20, "total": 1, "pages": 1 }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = StudentQuery::new(20)
        .with_search("obi")
        .with_status(Some(PaymentStatus::FullyPaid));
    let token = RedactedToken::new("jwt-token");

    let page = client_for(&server)
        .await
        .list_students(&query, Some(&token))
        .await
        .unwrap();

    assert_eq!(page.students.len(), 1);
    assert_eq!(page.pagination.map(|p| p.total), Some(1));
}

#[tokio::test]
async fn given_expired_token_when_list_students_then_returns_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/students"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthorized" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .list_students(&StudentQuery::default(), None)
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.0), Some(401));
    assert_eq!(err.user_message(), "Unauthorized");
}
