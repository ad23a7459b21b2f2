//! Macronutrient distribution.
//!
//! Protein is sized from body weight first (with goal-aware floors), then
//! expressed as a share of calories and capped. Carbs and fat come from a
//! fixed table per goal direction. When the three shares do not sum to one,
//! the remainder is split evenly between carbs and fat; protein is never
//! touched by the balancing step.

use crate::{GoalDirection, MacroSplit, WeightGoal};

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Upper bound on the protein share before balancing
pub const MAX_PROTEIN_PCT: f64 = 0.35;

/// Daily protein target in grams
///
/// Baseline is 1.8 g/kg with a 100 g floor. Loss goals raise this to
/// 2.0 g/kg with a 120 g floor, gain goals keep 1.8 g/kg with a 110 g floor.
pub fn protein_target_grams(weight_kg: f64, goal: WeightGoal) -> f64 {
    match goal.direction() {
        GoalDirection::Loss => (weight_kg * 2.0).max(120.0),
        GoalDirection::Gain => (weight_kg * 1.8).max(110.0),
        GoalDirection::Maintain => (weight_kg * 1.8).max(100.0),
    }
}

/// Carb and fat shares for a goal direction, before balancing
fn carb_fat_table(direction: GoalDirection) -> (f64, f64) {
    match direction {
        GoalDirection::Loss => (0.35, 0.30),
        GoalDirection::Gain => (0.50, 0.25),
        GoalDirection::Maintain => (0.45, 0.30),
    }
}

/// Compute the protein/carb/fat split for a day's calories
pub fn distribute_macros(total_calories: f64, goal: WeightGoal, weight_kg: f64) -> MacroSplit {
    let protein_g = protein_target_grams(weight_kg, goal);

    // A zero calorie budget yields +inf here, which the cap absorbs.
    let protein_pct = (protein_g * KCAL_PER_G_PROTEIN / total_calories).min(MAX_PROTEIN_PCT);
    let (carb_pct, fat_pct) = carb_fat_table(goal.direction());

    let mut split = MacroSplit {
        protein_pct,
        carb_pct,
        fat_pct,
    };

    let remainder = 1.0 - split.total();
    if remainder != 0.0 {
        split.carb_pct += remainder / 2.0;
        split.fat_pct += remainder / 2.0;
    }

    tracing::debug!(
        "Macro split for {} kcal ({}): protein {:.4}, carbs {:.4}, fat {:.4}",
        total_calories,
        goal,
        split.protein_pct,
        split.carb_pct,
        split.fat_pct
    );

    split
}

/// Macro grams (protein, carbs, fat) for a split, each rounded
pub fn macro_grams(total_calories: f64, split: &MacroSplit) -> (u32, u32, u32) {
    let grams = |pct: f64, kcal_per_g: f64| round_non_negative(total_calories * pct / kcal_per_g);

    (
        grams(split.protein_pct, KCAL_PER_G_PROTEIN),
        grams(split.carb_pct, KCAL_PER_G_CARBS),
        grams(split.fat_pct, KCAL_PER_G_FAT),
    )
}

/// Round half-to-even to an integer, clamping negatives (and NaN) to zero
///
/// Values beyond `u32::MAX` saturate there. Inputs are not range checked, so
/// absurd biometrics (e.g. a weight of 1e300 kg) produce a saturated goal
/// rather than an error.
pub(crate) fn round_non_negative(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.round_ties_even().min(f64::from(u32::MAX)) as u32
    }
}
