//! Payment gateway hand-off and the return trip.

use crate::error::{PortalClientError, ValidationError};

use models::{ApiEnvelope, PaymentAuthorization, VerifiedPayment};

use url::Url;

pub const MISSING_REFERENCE_MESSAGE: &str = "Missing payment reference in URL.";
pub const NO_AUTHORIZATION_URL_MESSAGE: &str =
    "Payment initialization failed: No authorization URL returned.";
pub const VERIFICATION_FAILED_MESSAGE: &str = "Payment verification failed.";
pub const MISSING_MATRIC_MESSAGE: &str =
    "Payment verified, but matric number was not found in the response metadata.";

const REFERENCE_PARAMS: [&str; 2] = ["reference", "tx_ref"];

/// Where to send the student to pay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub authorization_url: Url,
    pub reference: Option<String>,
}

impl Checkout {
    #[track_caller]
    pub(crate) fn from_authorization(
        authorization: PaymentAuthorization,
    ) -> Result<Self, PortalClientError> {
        let raw = authorization
            .authorization_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| PortalClientError::unexpected(NO_AUTHORIZATION_URL_MESSAGE))?;

        Ok(Self {
            authorization_url: Url::parse(raw.trim())?,
            reference: authorization.reference,
        })
    }
}

/// A payment the API confirmed, resolved to the student who made it.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationOutcome {
    pub reference: String,
    pub matric_number: String,
    pub amount: Option<f64>,
}

impl VerificationOutcome {
    #[track_caller]
    pub(crate) fn from_envelope(
        reference: &str,
        envelope: ApiEnvelope<VerifiedPayment>,
    ) -> Result<Self, PortalClientError> {
        if !envelope.success {
            let message = envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| VERIFICATION_FAILED_MESSAGE.to_string());
            return Err(PortalClientError::unexpected(message));
        }

        let payment = envelope.data.unwrap_or_default();
        let matric_number = payment
            .matric_number
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| PortalClientError::unexpected(MISSING_MATRIC_MESSAGE))?;

        Ok(Self {
            reference: payment.reference.unwrap_or_else(|| reference.to_string()),
            matric_number,
            amount: payment.amount,
        })
    }
}

/// Reference from the gateway callback URL.
///
/// The first non-empty `reference` wins, then the first non-empty `tx_ref`.
#[track_caller]
pub fn extract_reference(callback: &Url) -> Result<String, ValidationError> {
    REFERENCE_PARAMS
        .iter()
        .find_map(|param| {
            callback
                .query_pairs()
                .find(|(key, value)| key == *param && !value.is_empty())
                .map(|(_, value)| value.into_owned())
        })
        .ok_or_else(|| ValidationError::form("reference", MISSING_REFERENCE_MESSAGE))
}

/// Accept either the full callback URL or a bare reference.
#[track_caller]
pub fn reference_from_input(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    match Url::parse(trimmed) {
        Ok(url) => extract_reference(&url),
        Err(_) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        Err(_) => Err(ValidationError::form("reference", MISSING_REFERENCE_MESSAGE)),
    }
}
