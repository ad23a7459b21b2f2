//! Basal metabolic rate estimation.
//!
//! Mifflin-St Jeor is the default. Harris-Benedict is kept for users who
//! configured it. Neither formula clamps: implausible inputs can produce a
//! negative BMR and it is passed through unchanged.

use crate::{Sex, UserBiometrics};
use serde::{Deserialize, Serialize};

/// BMR regression formula
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    #[default]
    MifflinStJeor,
    HarrisBenedict,
}

impl Sex {
    /// Parse a stored gender string
    ///
    /// Anything other than male or female falls into `Other`, which shares
    /// the female constants.
    pub fn from_category(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Sex::Male,
            "female" | "f" => Sex::Female,
            _ => Sex::Other,
        }
    }
}

/// Mifflin-St Jeor (1990)
///
/// `10w + 6.25h - 5a + 5` for men, `- 161` instead of `+ 5` otherwise.
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female | Sex::Other => base - 161.0,
    }
}

/// Harris-Benedict (revised coefficients)
pub fn harris_benedict(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let age = f64::from(age);
    match sex {
        Sex::Male => 66.5 + 13.75 * weight_kg + 5.003 * height_cm - 6.75 * age,
        Sex::Female | Sex::Other => 655.1 + 9.563 * weight_kg + 1.850 * height_cm - 4.676 * age,
    }
}

/// Compute BMR in kcal/day with the chosen formula
pub fn calculate_bmr(biometrics: &UserBiometrics, formula: BmrFormula) -> f64 {
    let UserBiometrics {
        weight_kg,
        height_cm,
        age,
        sex,
    } = *biometrics;

    match formula {
        BmrFormula::MifflinStJeor => mifflin_st_jeor(weight_kg, height_cm, age, sex),
        BmrFormula::HarrisBenedict => harris_benedict(weight_kg, height_cm, age, sex),
    }
}
