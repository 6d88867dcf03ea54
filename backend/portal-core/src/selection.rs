//! Package and day selection rules for registration.
//!
//! Corporate Plus buys the corporate day plus exactly one theme day, chosen
//! from Tuesday, Wednesday or Thursday. The other tiers have fixed days and
//! never send a selection.

use crate::error::ValidationError;

use models::{PackageCode, Weekday};

use std::collections::BTreeSet;

/// Check a proposed day set against the package's day rule.
///
/// Runs on every picker interaction and once more right before the identify
/// request is built. Tiers without a day rule accept any set.
#[track_caller]
pub fn validate(code: PackageCode, selected_days: &BTreeSet<Weekday>) -> Result<(), ValidationError> {
    if !code.requires_day_selection() {
        return Ok(());
    }

    match single_day(selected_days) {
        Some(day) if day.is_plus_tier_day() => Ok(()),
        _ => Err(ValidationError::day_requirement()),
    }
}

fn single_day(days: &BTreeSet<Weekday>) -> Option<Weekday> {
    let mut iter = days.iter();
    match (iter.next(), iter.next()) {
        (Some(day), None) => Some(*day),
        _ => None,
    }
}

/// The theme day picked in the registration form.
///
/// Holds at most one day. Picking the current day again clears it; picking
/// another day replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaySelection {
    day: Option<Weekday>,
}

impl DaySelection {
    pub fn toggle(&mut self, day: Weekday) {
        self.day = match self.day {
            Some(current) if current == day => None,
            _ => Some(day),
        };
    }

    pub fn days(&self) -> BTreeSet<Weekday> {
        self.day.into_iter().collect()
    }
}

/// A package choice together with its day pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSelection {
    pub code: PackageCode,
    pub days: DaySelection,
}

impl PackageSelection {
    pub fn new(code: PackageCode) -> Self {
        Self {
            code,
            days: DaySelection::default(),
        }
    }

    pub fn with_day(mut self, day: Weekday) -> Self {
        self.days.toggle(day);
        self
    }

    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self.code, &self.days.days())
    }

    /// Days to send with the identify request; empty for tiers without a day rule.
    pub fn days_to_send(&self) -> Vec<Weekday> {
        if self.code.requires_day_selection() {
            self.days.days().into_iter().collect()
        } else {
            Vec::new()
        }
    }
}
