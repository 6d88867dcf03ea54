use crate::admin::{AdminLoginForm, StudentQuery};
use crate::api_error::normalize_bytes;
use crate::config::PortalConfig;
use crate::error::portal_client::PortalClientError;
use crate::payment::{Checkout, VerificationOutcome};

use common::{ErrorLocation, HttpStatusCode, RedactedToken};
use models::{
    AdminSession, ApiEnvelope, IdentifyRequest, InitializePaymentRequest, Package,
    PaymentAuthorization, Student, StudentStatus, StudentsPage, VerifiedPayment,
};

use std::panic::Location;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

const PACKAGES_ENDPOINT: &str = "api/students/packages";
const IDENTIFY_ENDPOINT: &str = "api/students/identify";
const STUDENTS_ENDPOINT: &str = "api/students";
const PAYMENT_INITIALIZE_ENDPOINT: &str = "api/payments/initialize";
const PAYMENT_VERIFY_ENDPOINT: &str = "api/payments/verify";
const ADMIN_LOGIN_ENDPOINT: &str = "api/admin/auth/login";
const ADMIN_STUDENTS_ENDPOINT: &str = "api/admin/students";

const LOGIN_FAILED_MESSAGE: &str = "Login failed";
const MISSING_STUDENT_MESSAGE: &str = "Registration succeeded but no student was returned.";
const MISSING_DATA_MESSAGE: &str = "The server returned an empty response.";

/// Client for the portal REST API.
///
/// Every non-2xx answer becomes [`PortalClientError::Request`] carrying the
/// normalized, display-ready message. No retries.
#[derive(Clone)]
pub struct PortalClient {
    base_url: Url,
    client: Client,
}

impl PortalClient {
    pub fn new(base_url_str: &str) -> Result<Self, PortalClientError> {
        Self::with_timeout(base_url_str, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn from_config(config: &PortalConfig) -> Result<Self, PortalClientError> {
        Self::with_timeout(&config.api.base_url, config.request_timeout())
    }

    pub fn with_timeout(base_url_str: &str, timeout: Duration) -> Result<Self, PortalClientError> {
        let mut base_url = Url::parse(base_url_str)?;
        // `join` replaces the last segment unless the path ends in a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, PortalClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// `{endpoint}/{segment}` with the segment percent-encoded.
    #[track_caller]
    fn endpoint_with_segment(&self, path: &str, segment: &str) -> Result<Url, PortalClientError> {
        let mut url = self.endpoint(path)?;
        url.path_segments_mut()
            .map_err(|_| PortalClientError::UrlParse {
                message: format!("{} cannot carry path segments", self.base_url),
                location: ErrorLocation::from(Location::caller()),
            })?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// Send, and turn any non-2xx answer into a normalized `Request` error.
    async fn send(&self, request: RequestBuilder) -> Result<Response, PortalClientError> {
        let location = ErrorLocation::from(Location::caller());
        let response = request.send().await?;
        let status = HttpStatusCode(response.status().as_u16());

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let bytes = response.bytes().await.unwrap_or_default();
        let message = normalize_bytes(status, &bytes);

        warn!("{} failed: HTTP {} ({})", url.path(), status, message);

        Err(PortalClientError::Request {
            status,
            message,
            location,
        })
    }

    async fn read_json(response: Response) -> Result<Value, PortalClientError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Decode `data` out of the standard envelope.
    #[track_caller]
    fn envelope_data<T: DeserializeOwned>(json: Value) -> Result<T, PortalClientError> {
        let envelope: ApiEnvelope<T> = serde_json::from_value(json)?;
        envelope
            .data
            .ok_or_else(|| PortalClientError::unexpected(MISSING_DATA_MESSAGE))
    }

    /// `GET api/students/packages`. Accepts both `{ data: [...] }` and a bare array.
    pub async fn list_packages(&self) -> Result<Vec<Package>, PortalClientError> {
        let url = self.endpoint(PACKAGES_ENDPOINT)?;
        debug!("GET {url}");

        let response = self.send(self.client.get(url)).await?;
        let json = Self::read_json(response).await?;

        let packages_json = match json {
            Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
            other => other,
        };
        let packages: Vec<Package> = serde_json::from_value(packages_json)?;

        info!("Loaded {} packages", packages.len());
        Ok(packages)
    }

    /// `POST api/students/identify`: register (or re-identify) and attach the package.
    pub async fn identify(&self, request: &IdentifyRequest) -> Result<Student, PortalClientError> {
        let url = self.endpoint(IDENTIFY_ENDPOINT)?;
        debug!(
            "POST {url} (package {}, {} selected day(s))",
            request.package_code,
            request.selected_days.as_ref().map_or(0, Vec::len)
        );

        let response = self.send(self.client.post(url).json(request)).await?;
        let json = Self::read_json(response).await?;

        let student_json = locate_student(json)
            .ok_or_else(|| PortalClientError::unexpected(MISSING_STUDENT_MESSAGE))?;
        let student: Student = serde_json::from_value(student_json)?;

        info!("Identified student {}", student.matric_number);
        Ok(student)
    }

    /// `GET api/students/{matricNumber}`.
    pub async fn student_status(&self, matric_number: &str) -> Result<StudentStatus, PortalClientError> {
        let url = self.endpoint_with_segment(STUDENTS_ENDPOINT, matric_number.trim())?;
        debug!("GET {url}");

        let response = self.send(self.client.get(url)).await?;
        let json = Self::read_json(response).await?;

        Self::envelope_data(json)
    }

    /// `POST api/payments/initialize`; returns the gateway checkout URL.
    pub async fn initialize_payment(
        &self,
        request: &InitializePaymentRequest,
    ) -> Result<Checkout, PortalClientError> {
        let url = self.endpoint(PAYMENT_INITIALIZE_ENDPOINT)?;
        debug!("POST {url} (amount {})", request.amount);

        let response = self.send(self.client.post(url).json(request)).await?;
        let json = Self::read_json(response).await?;

        let envelope: ApiEnvelope<PaymentAuthorization> = serde_json::from_value(json)?;
        let checkout = Checkout::from_authorization(envelope.data.unwrap_or_default())?;

        info!("Payment initialized for {}", request.student_id);
        Ok(checkout)
    }

    /// `GET api/payments/verify?reference=…`.
    pub async fn verify_payment(&self, reference: &str) -> Result<VerificationOutcome, PortalClientError> {
        let mut url = self.endpoint(PAYMENT_VERIFY_ENDPOINT)?;
        url.query_pairs_mut().append_pair("reference", reference);
        debug!("GET {url}");

        let response = self.send(self.client.get(url)).await?;
        let json = Self::read_json(response).await?;

        let envelope: ApiEnvelope<VerifiedPayment> = serde_json::from_value(json)?;
        let outcome = VerificationOutcome::from_envelope(reference, envelope)?;

        info!(
            "Payment {} verified for {}",
            outcome.reference, outcome.matric_number
        );
        Ok(outcome)
    }

    /// `POST api/admin/auth/login`.
    pub async fn admin_login(&self, form: &AdminLoginForm) -> Result<AdminSession, PortalClientError> {
        let url = self.endpoint(ADMIN_LOGIN_ENDPOINT)?;
        debug!("POST {url} (admin {})", form.email.trim());

        let body = serde_json::json!({
            "email": form.email.trim(),
            "password": form.password.expose(),
        });

        let response = match self.send(self.client.post(url).json(&body)).await {
            Ok(response) => response,
            Err(PortalClientError::Request {
                status,
                message,
                location,
            }) => {
                return Err(PortalClientError::Request {
                    status,
                    message: login_failure_message(message),
                    location,
                });
            }
            Err(other) => return Err(other),
        };

        let json = Self::read_json(response).await?;
        let envelope: ApiEnvelope<AdminSession> = serde_json::from_value(json)?;

        match envelope.data {
            Some(session) if envelope.success && !session.token.is_empty() => {
                info!("Admin {} logged in", session.admin.email);
                Ok(session)
            }
            _ => Err(PortalClientError::unexpected(
                envelope
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string()),
            )),
        }
    }

    /// `GET api/admin/students` with filters, paging and the admin bearer token.
    pub async fn list_students(
        &self,
        query: &StudentQuery,
        token: Option<&RedactedToken>,
    ) -> Result<StudentsPage, PortalClientError> {
        let mut url = self.endpoint(ADMIN_STUDENTS_ENDPOINT)?;
        url.query_pairs_mut().extend_pairs(query.to_pairs());
        debug!("GET {url}");

        let mut request = self.client.get(url);
        if let Some(token) = token {
            request = request.bearer_auth(token.expose());
        }

        let response = self.send(request).await?;
        let json = Self::read_json(response).await?;

        let page: StudentsPage = Self::envelope_data(json)?;
        debug!("Fetched {} students", page.students.len());
        Ok(page)
    }
}

/// The identify response has shipped as `data.student`, `student`, and bare `data`.
fn locate_student(json: Value) -> Option<Value> {
    let Value::Object(mut root) = json else {
        return None;
    };

    let data = root.remove("data");
    let candidates = [
        data.as_ref().and_then(|d| d.get("student")).cloned(),
        root.remove("student"),
        data.filter(|d| d.get("matricNumber").is_some()),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|candidate| candidate.is_object())
}

/// A login rejection with nothing to say still reads as a login failure.
fn login_failure_message(normalized: String) -> String {
    if normalized == crate::api_error::GENERIC_FALLBACK_MESSAGE {
        LOGIN_FAILED_MESSAGE.to_string()
    } else {
        normalized
    }
}
