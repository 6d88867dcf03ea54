use crate::{ErrorLocation, ModelError, Package, Weekday};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(ModelError::UnknownGender {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    NotPaid,
    PartiallyPaid,
    FullyPaid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::NotPaid => "NOT_PAID",
            PaymentStatus::PartiallyPaid => "PARTIALLY_PAID",
            PaymentStatus::FullyPaid => "FULLY_PAID",
        }
    }

    /// Short badge text for tables.
    pub fn badge(&self) -> &'static str {
        match self {
            PaymentStatus::NotPaid => "NOT PAID",
            PaymentStatus::PartiallyPaid => "PARTIAL",
            PaymentStatus::FullyPaid => "FULLY PAID",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().replace(['-', ' '], "_").as_str() {
            "NOT_PAID" => Ok(PaymentStatus::NotPaid),
            "PARTIALLY_PAID" | "PARTIAL" => Ok(PaymentStatus::PartiallyPaid),
            "FULLY_PAID" | "PAID" => Ok(PaymentStatus::FullyPaid),
            _ => Err(ModelError::UnknownPaymentStatus {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Generated invite files, present once a student is fully paid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invites {
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub generated_at: Option<String>,
}

/// `packageId` on a student is either the raw id or the populated document,
/// depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackageRef {
    Populated(Package),
    Id(String),
}

impl PackageRef {
    pub fn populated(&self) -> Option<&Package> {
        match self {
            PackageRef::Populated(package) => Some(package),
            PackageRef::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    pub matric_number: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub total_paid: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default, rename = "packageId")]
    pub package: Option<PackageRef>,
    #[serde(default)]
    pub invites: Option<Invites>,
    #[serde(default)]
    pub selected_days: Vec<Weekday>,
}

impl Student {
    pub fn is_fully_paid(&self) -> bool {
        self.payment_status == PaymentStatus::FullyPaid
    }
}

/// Payload of `GET api/students/{matricNumber}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentStatus {
    pub student: Student,
    pub package: Package,
    #[serde(default)]
    pub outstanding: f64,
}
