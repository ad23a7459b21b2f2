//! Profile loading and preparation.
//!
//! Profiles arrive as JSON records from whatever store the caller uses.
//! This module reads them, derives age from a birth date when needed, and
//! reports which required fields are missing.

use crate::{Error, Result, UserProfile};
use chrono::{Datelike, NaiveDate};
use std::path::Path;

impl UserProfile {
    /// Names of required fields that are absent, in a stable order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.weight.is_none() {
            missing.push("weight");
        }
        if self.height.is_none() {
            missing.push("height");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.activity_level.is_none() {
            missing.push("activity_level");
        }
        missing
    }

    /// Fill `age` from `date_of_birth` when no age is stored
    ///
    /// An explicit age always wins. Birth dates in the future are ignored.
    pub fn resolve_age(&mut self, today: NaiveDate) {
        if self.age.is_some() {
            return;
        }
        if let Some(born) = self.date_of_birth {
            self.age = age_on(born, today);
            if let Some(age) = self.age {
                tracing::debug!("Derived age {} from date of birth {}", age, born);
            }
        }
    }
}

/// Whole years between `born` and `today`
///
/// Returns None when `born` is after `today`.
pub fn age_on(born: NaiveDate, today: NaiveDate) -> Option<u32> {
    if born > today {
        return None;
    }
    let mut years = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Load a profile from a JSON file
///
/// Unlike optional signal files, a profile is the whole input, so a missing
/// or malformed file is an error.
pub fn load_profile(path: &Path) -> Result<UserProfile> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        Error::Profile(format!("Failed to read profile at {:?}: {}", path, e))
    })?;

    let profile: UserProfile = serde_json::from_str(&contents)?;

    tracing::info!(
        "Loaded profile from {:?} ({} required fields missing)",
        path,
        profile.missing_fields().len()
    );

    Ok(profile)
}
