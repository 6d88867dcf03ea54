use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

include!(concat!(env!("OUT_DIR"), "/api_messages.rs"));

/// Sentence label for a validation field, or the field name itself when unknown.
pub fn field_label(field: &str) -> Cow<'_, str> {
    FIELD_LABELS
        .get(field)
        .map(|&label| Cow::Borrowed(label))
        .unwrap_or(Cow::Borrowed(field))
}

/// Friendly replacement for an exact API message.
pub fn friendly_message(message: &str) -> Option<&'static str> {
    FRIENDLY_MESSAGES.get(message).copied()
}

/// Every known API message with its replacement.
pub fn known_messages() -> impl Iterator<Item = (&'static str, &'static str)> {
    FRIENDLY_MESSAGES.iter().map(|(&raw, &friendly)| (raw, friendly))
}
