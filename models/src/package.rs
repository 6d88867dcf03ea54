use crate::{ErrorLocation, ModelError};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Purchasable tier, identified on the wire by a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageCode {
    /// Corporate Plus: corporate day plus exactly one chosen theme day.
    #[serde(rename = "T")]
    CorporatePlus,
    #[serde(rename = "C")]
    CorporateOwambe,
    #[serde(rename = "F")]
    FullExperience,
}

impl PackageCode {
    pub const ALL: [PackageCode; 3] = [
        PackageCode::CorporatePlus,
        PackageCode::CorporateOwambe,
        PackageCode::FullExperience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageCode::CorporatePlus => "T",
            PackageCode::CorporateOwambe => "C",
            PackageCode::FullExperience => "F",
        }
    }

    /// Label shown next to the package picker.
    pub fn label(&self) -> &'static str {
        match self {
            PackageCode::CorporatePlus => "Corporate Plus — ₦30,000",
            PackageCode::CorporateOwambe => "Corporate & Owambe — ₦40,000",
            PackageCode::FullExperience => "Full Experience — ₦60,000",
        }
    }

    /// The plus tier is the only one that asks the student to pick a day.
    pub fn requires_day_selection(&self) -> bool {
        matches!(self, PackageCode::CorporatePlus)
    }
}

impl fmt::Display for PackageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageCode {
    type Err = ModelError;

    /// Accepts the wire letter in any case, e.g. from a `?package=t` link.
    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "T" => Ok(PackageCode::CorporatePlus),
            "C" => Ok(PackageCode::CorporateOwambe),
            "F" => Ok(PackageCode::FullExperience),
            _ => Err(ModelError::UnknownPackageCode {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageType {
    CorporatePlus,
    CorporateOwambe,
    Full,
}

/// A package document from `api/students/packages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: PackageCode,
    pub name: String,
    #[serde(default)]
    pub package_type: Option<PackageType>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub benefits: Vec<String>,
}
