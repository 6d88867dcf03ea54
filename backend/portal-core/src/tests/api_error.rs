// Unit tests for the API error normalizer
// Covers every status branch, field-error decoding, and the phrase humanizer

use crate::api_error::{
    ApiErrorBody, GENERIC_FALLBACK_MESSAGE, SERVER_ERROR_MESSAGE, TOO_MANY_REQUESTS_MESSAGE,
    field_label, friendly_message, humanize_field_message, known_messages, normalize,
    normalize_bytes,
};

use common::HttpStatusCode;

use serde_json::json;

fn field_errors(errors: serde_json::Value) -> ApiErrorBody {
    // The API double-encodes: the array travels as a string inside `message`.
    ApiErrorBody::new(errors.to_string())
}

// ============================================
// 429 / 500
// ============================================

/// **VALUE**: Every phrase in the table maps to its friendly sentence on 429.
///
/// **WHY THIS MATTERS**: Rate-limit responses come from two limiters with
/// different wording. Both must read as a calm "wait a moment" sentence.
///
/// **BUG THIS CATCHES**: Would catch a 429 branch that skips the table lookup
/// and always returns the generic sentence (losing the payment-specific one).
#[test]
fn given_known_phrase_when_normalize_429_then_returns_mapped_sentence() {
    let mut checked = 0;
    for (raw, friendly) in known_messages() {
        assert_eq!(
            normalize(HttpStatusCode::TOO_MANY_REQUESTS, &ApiErrorBody::new(raw)),
            friendly,
            "phrase: {raw}"
        );
        checked += 1;
    }
    assert!(checked > 0, "message table should not be empty");

    assert_eq!(
        normalize(
            HttpStatusCode::TOO_MANY_REQUESTS,
            &ApiErrorBody::new("Too many payment requests, please try again later")
        ),
        "Too many payment attempts. Please wait a moment and try again."
    );
}

#[test]
fn given_unknown_phrase_when_normalize_429_then_returns_generic_rate_limit_sentence() {
    for body in [
        ApiErrorBody::new("slow down"),
        ApiErrorBody::new(""),
        ApiErrorBody::default(),
    ] {
        assert_eq!(
            normalize(HttpStatusCode::TOO_MANY_REQUESTS, &body),
            TOO_MANY_REQUESTS_MESSAGE
        );
    }
}

/// **VALUE**: A 500 body is never shown, whatever it contains.
///
/// **WHY THIS MATTERS**: Server error bodies can carry stack traces and
/// internal identifiers. They must not reach the screen.
///
/// **BUG THIS CATCHES**: Would catch a refactor that moves the known-phrase
/// lookup ahead of the 500 branch.
#[test]
fn given_any_body_when_normalize_500_then_returns_fixed_server_sentence() {
    let bodies = [
        ApiErrorBody::new("TypeError: cannot read properties of undefined at db.js:42"),
        ApiErrorBody::new("Student not found"),
        ApiErrorBody::new(""),
        ApiErrorBody::default(),
        ApiErrorBody::from_value(&json!({ "message": null })),
    ];

    for body in &bodies {
        assert_eq!(
            normalize(HttpStatusCode::INTERNAL_SERVER_ERROR, body),
            SERVER_ERROR_MESSAGE
        );
    }
}

// ============================================
// 409 / 404
// ============================================

/// **VALUE**: "Student not found" is looked up on 409 as well as 404.
///
/// **WHY THIS MATTERS**: The API reports some lookups as conflicts. Both
/// branches share one table, and callers rely on that.
///
/// **BUG THIS CATCHES**: Would catch someone splitting the 404 and 409 tables
/// and leaving the 409 side without this phrase.
#[test]
fn given_student_not_found_when_normalize_409_then_returns_friendly_sentence() {
    let body = ApiErrorBody::new("Student not found");

    let conflict = normalize(HttpStatusCode::CONFLICT, &body);
    let not_found = normalize(HttpStatusCode::NOT_FOUND, &body);

    assert_eq!(conflict, "No student found with this matric number.");
    assert_eq!(conflict, not_found);
    assert_ne!(conflict, "Student not found");
}

#[test]
fn given_unknown_phrase_when_normalize_404_then_returns_raw_message() {
    let body = ApiErrorBody::new("Route GET /api/nope not found");
    assert_eq!(
        normalize(HttpStatusCode::NOT_FOUND, &body),
        "Route GET /api/nope not found"
    );
}

#[test]
fn given_duplicate_matric_when_normalize_409_then_returns_friendly_sentence() {
    let body = ApiErrorBody::new("matricNumber already exists");
    assert_eq!(
        normalize(HttpStatusCode::CONFLICT, &body),
        "This matric number is already registered."
    );
}

// ============================================
// 400: FIELD ERRORS
// ============================================

#[test]
fn given_single_required_field_when_normalize_400_then_builds_sentence() {
    let body = field_errors(json!([{ "field": "body.matricNumber", "message": "Required" }]));
    assert_eq!(
        normalize(HttpStatusCode::BAD_REQUEST, &body),
        "Matric number is required"
    );
}

/// **VALUE**: Multiple field errors join with ". " in API order.
///
/// **WHY THIS MATTERS**: The payment form can fail on email and amount at once.
/// The student must see both problems in one line.
///
/// **BUG THIS CATCHES**: Would catch a join separator change or only the
/// first error being reported.
#[test]
fn given_two_field_errors_when_normalize_400_then_joins_sentences() {
    let body = field_errors(json!([
        { "field": "body.email", "message": "Invalid email" },
        { "field": "body.amount", "message": "Number must be greater than 0" }
    ]));

    assert_eq!(
        normalize(HttpStatusCode::BAD_REQUEST, &body),
        "Email must be a valid email address. Amount must be greater than 0"
    );
}

#[test]
fn given_query_prefix_and_unknown_field_when_normalize_400_then_uses_raw_field_name() {
    let body = field_errors(json!([
        { "field": "query.page", "message": "Expected number, received string" }
    ]));
    assert_eq!(
        normalize(HttpStatusCode::BAD_REQUEST, &body),
        "page must be a number"
    );
}

#[test]
fn given_unencoded_array_message_when_normalize_400_then_still_decodes_field_errors() {
    // GIVEN: A body whose message is a real JSON array rather than a string
    let body = ApiErrorBody::from_value(&json!({
        "message": [{ "field": "body.fullName", "message": "String must contain at least 3 character(s)" }]
    }));

    // WHEN / THEN: The array is still read as field errors
    assert_eq!(
        normalize(HttpStatusCode::BAD_REQUEST, &body),
        "Full name must be at least 3 characters"
    );
}

/// **VALUE**: A 400 message that is not a field-error array falls through safely.
///
/// **WHY THIS MATTERS**: Most 400s carry a plain sentence. The decode attempt
/// must never panic or swallow the message.
///
/// **BUG THIS CATCHES**: Would catch an `unwrap()` on the JSON decode or an
/// empty array being rendered as an empty sentence.
#[test]
fn given_non_array_message_when_normalize_400_then_falls_back_to_table_or_raw() {
    assert_eq!(
        normalize(HttpStatusCode::BAD_REQUEST, &ApiErrorBody::new("not json")),
        "not json"
    );
    assert_eq!(
        normalize(
            HttpStatusCode::BAD_REQUEST,
            &ApiErrorBody::new("Amount must be greater than 0")
        ),
        "Payment amount must be greater than zero."
    );
    assert_eq!(
        normalize(HttpStatusCode::BAD_REQUEST, &ApiErrorBody::new("[]")),
        "[]"
    );
    assert_eq!(
        normalize(HttpStatusCode::BAD_REQUEST, &ApiErrorBody::new("{\"field\":1}")),
        "{\"field\":1}"
    );
}

// ============================================
// OTHER STATUSES AND BODY PARSING
// ============================================

#[test]
fn given_other_status_when_normalize_then_uses_table_raw_or_fallback() {
    let unauthorized = HttpStatusCode::UNAUTHORIZED;

    assert_eq!(
        normalize(unauthorized, &ApiErrorBody::new("Payment not found")),
        "Payment record not found. Please check your reference."
    );
    assert_eq!(
        normalize(unauthorized, &ApiErrorBody::new("Invalid token")),
        "Invalid token"
    );
    assert_eq!(
        normalize(unauthorized, &ApiErrorBody::default()),
        GENERIC_FALLBACK_MESSAGE
    );
    assert_eq!(
        normalize(HttpStatusCode(418), &ApiErrorBody::new("")),
        GENERIC_FALLBACK_MESSAGE
    );
}

#[test]
fn given_unparseable_bytes_when_normalize_bytes_then_treats_body_as_empty() {
    assert_eq!(
        normalize_bytes(HttpStatusCode(502), b"<html>Bad Gateway</html>"),
        GENERIC_FALLBACK_MESSAGE
    );
    assert_eq!(
        normalize_bytes(HttpStatusCode::NOT_FOUND, br#"{"message":"Student not found"}"#),
        "No student found with this matric number."
    );
    assert_eq!(ApiErrorBody::from_bytes(b""), ApiErrorBody::default());
}

#[test]
fn given_identical_inputs_when_normalize_twice_then_output_is_identical() {
    let cases = [
        (HttpStatusCode::BAD_REQUEST, field_errors(json!([{ "field": "body.gender", "message": "Invalid enum value. Expected 'male' | 'female'" }]))),
        (HttpStatusCode::CONFLICT, ApiErrorBody::new("Student not found")),
        (HttpStatusCode::TOO_MANY_REQUESTS, ApiErrorBody::default()),
        (HttpStatusCode(503), ApiErrorBody::new("maintenance")),
    ];

    for (status, body) in &cases {
        assert_eq!(normalize(*status, body), normalize(*status, body));
    }
}

// ============================================
// HUMANIZER AND TABLES
// ============================================

#[test]
fn given_validator_messages_when_humanized_then_follows_rules_in_order() {
    assert_eq!(humanize_field_message("Required"), "is required");
    assert_eq!(
        humanize_field_message("String must contain at least 6 character(s)"),
        "must be at least 6 characters"
    );
    assert_eq!(
        humanize_field_message("String must contain exactly 11 character(s)"),
        "is invalid"
    );
    assert_eq!(
        humanize_field_message("Invalid enum value. Expected 'T' | 'C' | 'F', received 'X'"),
        "has an invalid value"
    );
    assert_eq!(
        humanize_field_message("Invalid email"),
        "must be a valid email address"
    );
    assert_eq!(
        humanize_field_message("Expected number, received string"),
        "must be a number"
    );
    assert_eq!(
        humanize_field_message("Number must be greater than 100"),
        "must be greater than 0"
    );
    assert_eq!(
        humanize_field_message("Must Be A Weekday"),
        "must be a weekday"
    );
}

#[test]
fn given_exact_match_rules_when_message_differs_in_case_then_falls_through() {
    // "required" is not "Required", so it is only lower-cased
    assert_eq!(humanize_field_message("required"), "required");
    assert_eq!(humanize_field_message("Invalid Email"), "invalid email");
}

#[test]
fn given_field_names_when_labelled_then_known_names_get_labels() {
    assert_eq!(field_label("matricNumber"), "Matric number");
    assert_eq!(field_label("newPackageCode"), "Package");
    assert_eq!(field_label("selectedDays"), "selectedDays");
}

#[test]
fn given_phrase_when_looked_up_then_only_exact_matches_hit() {
    assert_eq!(
        friendly_message("Package already fully paid"),
        Some("This package has already been fully paid.")
    );
    assert_eq!(friendly_message("package already fully paid"), None);
    assert_eq!(friendly_message(""), None);
}
