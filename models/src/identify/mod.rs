pub mod builder;

use crate::{Gender, PackageCode, Weekday};

use serde::Serialize;

/// Body of `POST api/students/identify`: registers the student (or finds the
/// existing record) and attaches the chosen package.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyRequest {
    pub matric_number: String,
    pub full_name: String,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub package_code: PackageCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_days: Option<Vec<Weekday>>,
}
