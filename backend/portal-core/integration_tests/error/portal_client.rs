use common::{ErrorLocation, HttpStatusCode};
use portal_core::api_error::GENERIC_FALLBACK_MESSAGE;
use portal_core::error::{CoreError, PortalClientError};
use portal_core::portal_client::PortalClient;

use std::panic::Location;
use std::time::Duration;

/// **VALUE**: `PortalClientError::Request` shows status, message and location.
///
/// **WHY THIS MATTERS**: The log line is the only record of which endpoint failed.
/// The location points at the call site that sent the request.
///
/// **BUG THIS CATCHES**: Would catch the location being dropped from the
/// `#[error]` format string.
#[test]
fn given_request_error_when_formatted_then_includes_status_and_location() {
    let err = PortalClientError::Request {
        status: HttpStatusCode::CONFLICT,
        message: "This matric number is already registered.".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let text = err.to_string();

    assert!(text.contains("Request Error"));
    assert!(text.contains("HTTP 409"));
    assert!(text.contains("already registered"));
    assert!(text.contains("portal_client.rs"));
}

#[test]
fn given_bad_base_url_when_client_created_then_returns_url_parse_error() {
    let err = PortalClient::new("not a url").err().unwrap();
    assert!(matches!(err, PortalClientError::UrlParse { .. }));
    assert_eq!(err.user_message(), GENERIC_FALLBACK_MESSAGE);
    assert_eq!(err.status(), None);
}

#[test]
fn given_base_url_with_path_when_client_created_then_keeps_path_prefix() {
    let client = PortalClient::new("https://example.com/portal").unwrap();
    assert_eq!(client.base_url().as_str(), "https://example.com/portal/");
}

/// **VALUE**: Transport failures surface as the generic fallback sentence.
///
/// **WHY THIS MATTERS**: A connection refused message mentions hosts and ports.
/// Students should see a plain retry prompt.
///
/// **BUG THIS CATCHES**: Would catch `Http` errors leaking their text through
/// `user_message`.
#[tokio::test]
async fn given_unreachable_server_when_request_sent_then_maps_to_generic_sentence() {
    // Port 9 (discard) on loopback is closed on test machines.
    let client = PortalClient::with_timeout("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

    let err = client.list_packages().await.unwrap_err();

    assert!(matches!(err, PortalClientError::Http { .. }));
    assert_eq!(err.user_message(), GENERIC_FALLBACK_MESSAGE);

    let core: CoreError = err.into();
    assert_eq!(core.user_message(), GENERIC_FALLBACK_MESSAGE);
}
