use std::sync::OnceLock;

use regex::Regex;

const MIN_LENGTH_PATTERN: &str = r"String must contain at least (\d+)";

static MIN_LENGTH_REGEX: OnceLock<Regex> = OnceLock::new();

fn min_length_regex() -> &'static Regex {
    MIN_LENGTH_REGEX.get_or_init(|| Regex::new(MIN_LENGTH_PATTERN).expect("valid regex pattern"))
}

/// Rewrite one validator message as the tail of "<Label> <phrase>".
///
/// Rules are checked in order and the first hit wins. Anything unrecognised
/// is lower-cased so it still reads as a sentence tail.
pub fn humanize_field_message(raw: &str) -> String {
    if raw == "Required" {
        return String::from("is required");
    }

    if let Some(min) = min_length_regex()
        .captures(raw)
        .and_then(|caps| caps.get(1))
    {
        return format!("must be at least {} characters", min.as_str());
    }

    if raw.starts_with("String must contain exactly") {
        return String::from("is invalid");
    }

    if raw.starts_with("Invalid enum value") {
        return String::from("has an invalid value");
    }

    if raw == "Invalid email" {
        return String::from("must be a valid email address");
    }

    if raw == "Expected number, received string" {
        return String::from("must be a number");
    }

    if raw.starts_with("Number must be greater than") {
        return String::from("must be greater than 0");
    }

    raw.to_lowercase()
}
