//! Shared building blocks for the Final Year Week portal.
//!
//! Nothing in here knows about students or packages. The crate carries the
//! plumbing every other crate leans on:
//!
//! - **ErrorLocation**: file/line/column captured at the point an error is built
//! - **HttpStatusCode**: the status classes the portal reacts to
//! - **RedactedToken**: bearer tokens and passwords that never reach a log line
//!
//! ## Architecture
//!
//! - **common** (this crate): cross-cutting utilities
//! - **models**: API data structures
//! - **portal-core**: API client and client-side rules
//! - **fyw**: command line front end

pub mod error;
pub mod http_status;
pub mod redacted_token;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;
