//! Secondary nutrient targets.
//!
//! Population-level heuristics: fiber scales with calories, sugar is capped,
//! saturated fat is a third of total fat, and the mineral and cholesterol
//! targets are fixed public-health limits.

use crate::macronutrients::{round_non_negative, KCAL_PER_G_CARBS};
use crate::Micronutrients;

/// Fiber per 1000 kcal, grams
pub const FIBER_G_PER_1000_KCAL: f64 = 14.0;
/// Upper bound on added sugar, grams
pub const SUGAR_CAP_G: u32 = 50;
pub const SODIUM_MG: u32 = 2300;
pub const POTASSIUM_MG: u32 = 3500;
pub const CHOLESTEROL_MG: u32 = 300;
/// Share of total fat allowed as saturated fat
pub const SATURATED_FAT_SHARE: f64 = 0.33;

/// Estimate micronutrient targets from calories and fat grams
pub fn estimate_micronutrients(total_calories: f64, fat_g: u32) -> Micronutrients {
    let fiber_g = round_non_negative(FIBER_G_PER_1000_KCAL * total_calories / 1000.0);
    let sugar_g = round_non_negative(total_calories * 0.10 / KCAL_PER_G_CARBS).min(SUGAR_CAP_G);
    let saturated_fat_g = round_non_negative(f64::from(fat_g) * SATURATED_FAT_SHARE);

    Micronutrients {
        fiber_g,
        sugar_g,
        sodium_mg: SODIUM_MG,
        potassium_mg: POTASSIUM_MG,
        saturated_fat_g,
        cholesterol_mg: CHOLESTEROL_MG,
    }
}
