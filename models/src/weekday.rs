use crate::{ErrorLocation, ModelError};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Event days. The week runs Monday to Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Days a Corporate Plus student may add.
    pub const PLUS_TIER_DAYS: [Weekday; 3] = [Weekday::Tuesday, Weekday::Wednesday, Weekday::Thursday];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
        }
    }

    /// Picker label with the day's theme, for days that have one.
    pub fn theme_label(&self) -> Option<&'static str> {
        match self {
            Weekday::Tuesday => Some("Tuesday (Denim Day)"),
            Weekday::Wednesday => Some("Wednesday (Costume Day)"),
            Weekday::Thursday => Some("Thursday (Jersey Day)"),
            Weekday::Monday | Weekday::Friday => None,
        }
    }

    pub fn is_plus_tier_day(&self) -> bool {
        Self::PLUS_TIER_DAYS.contains(self)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "MONDAY" | "MON" => Ok(Weekday::Monday),
            "TUESDAY" | "TUE" => Ok(Weekday::Tuesday),
            "WEDNESDAY" | "WED" => Ok(Weekday::Wednesday),
            "THURSDAY" | "THU" => Ok(Weekday::Thursday),
            "FRIDAY" | "FRI" => Ok(Weekday::Friday),
            _ => Err(ModelError::UnknownWeekday {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
