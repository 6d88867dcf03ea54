//! Domain models for the Final Year Week portal.
//!
//! Pure data structures mirroring the JSON the portal API sends and
//! accepts. Models carry parsing and labelling helpers but no workflow
//! logic - that lives in `portal-core`.

pub mod admin;
pub mod envelope;
pub mod error;
pub mod identify;
pub mod package;
pub mod payment;
pub mod student;
pub mod weekday;

#[cfg(test)]
mod tests;

pub use admin::{AdminProfile, AdminSession, Pagination, StudentsPage};
pub use envelope::ApiEnvelope;
pub use error::model_error::ModelError;
pub use identify::IdentifyRequest;
pub use identify::builder::IdentifyRequestBuilder;
pub use package::{Package, PackageCode, PackageType};
pub use payment::{InitializePaymentRequest, PaymentAuthorization, VerifiedPayment};
pub use student::{Gender, Invites, PackageRef, PaymentStatus, Student, StudentStatus};
pub use weekday::Weekday;

pub use common::ErrorLocation;
