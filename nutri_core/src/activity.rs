//! Activity level multipliers.

use crate::ActivityLevel;

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier applied to BMR
    ///
    /// - Sedentary (little or no exercise): 1.2
    /// - Light (1-3 days/week): 1.375
    /// - Moderate (3-5 days/week): 1.55
    /// - Active (6-7 days/week): 1.725
    /// - Very active (hard exercise and physical job): 1.9
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Parse a stored activity level string
    ///
    /// Returns None for anything that is not one of the five categories.
    pub fn from_category(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }
}

/// Resolve an activity level string, falling back to sedentary
///
/// The boolean is true when the fallback was used.
pub fn resolve_activity_level(s: &str) -> (ActivityLevel, bool) {
    match ActivityLevel::from_category(s) {
        Some(level) => (level, false),
        None => {
            tracing::warn!("Unknown activity level {:?}, defaulting to sedentary", s);
            (ActivityLevel::Sedentary, true)
        }
    }
}
