//! Turns failed portal API responses into a single sentence for display.
//!
//! The API answers errors in three shapes that all arrive as `{ "message": … }`:
//!
//! - a known phrase such as `"Student not found"`
//! - a JSON array of `{ field, message }` records, encoded *as a string*
//!   inside `message` (validation failures on 400)
//! - anything else, passed through as-is
//!
//! [`normalize`] absorbs all three so callers never branch on body shape.
//! It is a pure function and never fails.

mod humanize;
mod tables;

pub use humanize::humanize_field_message;
pub use tables::{field_label, friendly_message, known_messages};

use common::HttpStatusCode;

use serde::Deserialize;
use serde_json::Value;

/// Shown when nothing more specific can be said, including transport failures.
pub const GENERIC_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown for every 500. The body is never surfaced.
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong on our end. Please try again.";

/// Shown for a 429 whose message is not in the table.
pub const TOO_MANY_REQUESTS_MESSAGE: &str =
    "Too many requests. Please wait a moment and try again.";

const FIELD_PREFIXES: [&str; 2] = ["body.", "query."];
const FIELD_ERROR_SEPARATOR: &str = ". ";

/// The part of an error response the normalizer looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Parse a raw response body. Anything that is not JSON is an empty body.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        serde_json::from_slice::<Value>(bytes)
            .map(|value| Self::from_value(&value))
            .unwrap_or_default()
    }

    /// Pull `message` out of a parsed body.
    ///
    /// Non-string messages keep their JSON text, so an array sent without the
    /// usual string encoding still reaches the field-error parser.
    pub fn from_value(value: &Value) -> Self {
        let message = match value.get("message") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct FieldError {
    field: String,
    message: String,
}

/// Convert a status code and error body into the sentence shown to the user.
///
/// Resolution order, first match wins:
///
/// 1. 429: known phrase, else [`TOO_MANY_REQUESTS_MESSAGE`]
/// 2. 500: always [`SERVER_ERROR_MESSAGE`]
/// 3. 409 / 404: known phrase, else the raw message
/// 4. 400: field-error array if the message decodes to a non-empty one,
///    else known phrase, else the raw message
/// 5. anything else: known phrase, else the raw message
///
/// Wherever the raw message would be returned but is empty,
/// [`GENERIC_FALLBACK_MESSAGE`] is returned instead.
pub fn normalize(status: HttpStatusCode, body: &ApiErrorBody) -> String {
    let message = body.message();

    match status {
        HttpStatusCode::TOO_MANY_REQUESTS => friendly_message(message)
            .unwrap_or(TOO_MANY_REQUESTS_MESSAGE)
            .to_string(),
        HttpStatusCode::INTERNAL_SERVER_ERROR => SERVER_ERROR_MESSAGE.to_string(),
        // "Student not found" is looked up for 409 as well as 404.
        HttpStatusCode::CONFLICT | HttpStatusCode::NOT_FOUND => friendly_or_raw(message),
        HttpStatusCode::BAD_REQUEST => {
            describe_field_errors(message).unwrap_or_else(|| friendly_or_raw(message))
        }
        _ => friendly_or_raw(message),
    }
}

/// [`normalize`] over an unparsed response body.
pub fn normalize_bytes(status: HttpStatusCode, bytes: &[u8]) -> String {
    normalize(status, &ApiErrorBody::from_bytes(bytes))
}

fn friendly_or_raw(message: &str) -> String {
    match friendly_message(message) {
        Some(friendly) => friendly.to_string(),
        None if message.is_empty() => GENERIC_FALLBACK_MESSAGE.to_string(),
        None => message.to_string(),
    }
}

/// Decode the string-encoded field-error array of a 400 response.
fn describe_field_errors(message: &str) -> Option<String> {
    let errors: Vec<FieldError> = serde_json::from_str(message).ok()?;
    if errors.is_empty() {
        return None;
    }

    let sentences: Vec<String> = errors
        .iter()
        .map(|error| {
            let key = strip_field_prefix(&error.field);
            format!(
                "{} {}",
                field_label(key),
                humanize_field_message(&error.message)
            )
        })
        .collect();

    Some(sentences.join(FIELD_ERROR_SEPARATOR))
}

fn strip_field_prefix(field: &str) -> &str {
    FIELD_PREFIXES
        .iter()
        .find_map(|prefix| field.strip_prefix(prefix))
        .unwrap_or(field)
}
