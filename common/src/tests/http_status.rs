use crate::HttpStatusCode;

#[test]
fn given_status_codes_when_classified_then_ranges_match() {
    assert!(HttpStatusCode(201).is_success());
    assert!(!HttpStatusCode(302).is_success());

    assert!(HttpStatusCode::BAD_REQUEST.is_client_error());
    assert!(HttpStatusCode::CONFLICT.is_client_error());
    assert!(!HttpStatusCode::INTERNAL_SERVER_ERROR.is_client_error());

    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(499).is_server_error());
}

/// **VALUE**: Only 429 counts as rate limiting.
///
/// **BUG THIS CATCHES**: Would catch a range check sneaking in and sending 4xx conflicts down
/// the throttling message path.
#[test]
fn given_429_when_checking_rate_limit_then_only_429_matches() {
    assert!(HttpStatusCode::from(429).is_rate_limited());
    assert!(!HttpStatusCode::from(428).is_rate_limited());
    assert!(!HttpStatusCode::from(503).is_rate_limited());
}

#[test]
fn given_status_code_when_displayed_then_prints_number() {
    assert_eq!(HttpStatusCode::NOT_FOUND.to_string(), "404");
}
