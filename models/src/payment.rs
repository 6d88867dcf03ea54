use serde::{Deserialize, Serialize};

/// Body of `POST api/payments/initialize`.
///
/// `studentId` carries the matric number; the API resolves it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializePaymentRequest {
    pub student_id: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Gateway checkout details. Field names follow the gateway, not the portal API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaymentAuthorization {
    #[serde(default)]
    pub authorization_url: Option<String>,
    #[serde(default)]
    pub access_code: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

/// `data` of `GET api/payments/verify`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedPayment {
    #[serde(default)]
    pub matric_number: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}
