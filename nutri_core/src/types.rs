//! Core domain types for the nutrition goal engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Biometric inputs and the loose profile record callers hand us
//! - Activity and weight-goal categories
//! - The computed goals and the calculation report wrapped around them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Input Types
// ============================================================================

/// Biological sex category, used only to select the BMR formula branch
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Validated biometric inputs for a single calculation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserBiometrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: Sex,
}

/// Profile-shaped record as stored by callers
///
/// Every field is optional: the engine decides whether enough is present.
/// Category fields stay as raw strings so that legacy or unknown values can
/// be normalized (and reported) by the engine instead of failing to parse.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Age in whole years
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub weight_goal: Option<String>,
    /// Echoed into the goals, never used in the calculation
    pub target_weight: Option<f64>,
    /// Used to derive `age` when it is not stored directly
    pub date_of_birth: Option<NaiveDate>,
}

// ============================================================================
// Category Types
// ============================================================================

/// Habitual activity level, scales BMR into TDEE
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// Canonical weight-management goal (rate and direction per week)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WeightGoal {
    #[serde(rename = "lose_1")]
    LoseOne,
    #[serde(rename = "lose_0_75")]
    LoseThreeQuarters,
    #[serde(rename = "lose_0_5")]
    LoseHalf,
    #[serde(rename = "lose_0_25")]
    LoseQuarter,
    #[serde(rename = "maintain")]
    Maintain,
    #[serde(rename = "gain_0_25")]
    GainQuarter,
    #[serde(rename = "gain_0_5")]
    GainHalf,
}

/// Direction of a weight goal, drives the macro skew
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalDirection {
    Loss,
    Maintain,
    Gain,
}

// ============================================================================
// Output Types
// ============================================================================

/// Fraction of daily calories allotted to each macronutrient
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    pub protein_pct: f64,
    pub carb_pct: f64,
    pub fat_pct: f64,
}

impl MacroSplit {
    pub fn total(&self) -> f64 {
        self.protein_pct + self.carb_pct + self.fat_pct
    }
}

/// Secondary nutrient targets derived from calories and fat
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Micronutrients {
    pub fiber_g: u32,
    pub sugar_g: u32,
    pub sodium_mg: u32,
    pub potassium_mg: u32,
    pub saturated_fat_g: u32,
    pub cholesterol_mg: u32,
}

/// Daily nutrition targets handed to the caller for storage and display
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NutritionGoals {
    pub daily_calorie_goal: u32,
    pub protein_goal: u32,
    pub carb_goal: u32,
    pub fat_goal: u32,
    pub fiber_goal: u32,
    pub sugar_goal: u32,
    pub sodium_goal: u32,
    pub potassium_goal: u32,
    pub saturated_fat_goal: u32,
    pub cholesterol_goal: u32,
    pub target_weight: Option<f64>,
    pub weight_goal: WeightGoal,
    pub activity_level: ActivityLevel,
}

/// Which category inputs were replaced by their fallback value
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Defaulted {
    /// Activity level string was unrecognised, `sedentary` was used
    pub activity_level: bool,
    /// Weight goal string was unrecognised, `maintain` was used
    pub weight_goal: bool,
}

impl Defaulted {
    pub fn any(&self) -> bool {
        self.activity_level || self.weight_goal
    }
}

/// Full result of a profile calculation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GoalCalculation {
    pub goals: NutritionGoals,
    pub bmr: f64,
    pub tdee: f64,
    pub macro_split: MacroSplit,
    pub defaulted: Defaulted,
}
