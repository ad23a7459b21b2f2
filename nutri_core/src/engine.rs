//! Nutrition goal engine.
//!
//! Composes the calculation steps into a single pure function:
//!
//! 1. Validate that weight, height, age, gender and activity level are present
//! 2. BMR (Mifflin-St Jeor unless configured otherwise)
//! 3. TDEE = BMR x activity multiplier
//! 4. Goal delta, rounded and clamped at zero (optionally floored)
//! 5. Macro split and gram targets
//! 6. Micronutrient heuristics
//!
//! Nothing is cached between calls; identical inputs give identical outputs.

use crate::activity::resolve_activity_level;
use crate::bmr::calculate_bmr;
use crate::macronutrients::{distribute_macros, macro_grams, round_non_negative};
use crate::micronutrients::estimate_micronutrients;
use crate::weight_goal::{apply_weight_goal_adjustment, resolve_weight_goal};
use crate::{
    ActivityLevel, Config, Defaulted, GoalCalculation, MacroSplit, NutritionGoals, Sex,
    UserBiometrics, UserProfile, WeightGoal,
};

/// Calculate goals for a profile with the default configuration
///
/// Returns None when the profile lacks any of weight, height, age, gender
/// or activity level. No range checks are applied to the numbers.
pub fn calculate(profile: &UserProfile) -> Option<GoalCalculation> {
    calculate_with(profile, &Config::default())
}

/// Calculate goals for a profile with an explicit configuration
pub fn calculate_with(profile: &UserProfile, config: &Config) -> Option<GoalCalculation> {
    let (weight_kg, height_cm, age, gender, activity) = match (
        profile.weight,
        profile.height,
        profile.age,
        profile.gender.as_deref(),
        profile.activity_level.as_deref(),
    ) {
        (Some(w), Some(h), Some(a), Some(g), Some(act)) => (w, h, a, g, act),
        _ => {
            tracing::debug!(
                "Insufficient profile data, missing: {:?}",
                profile.missing_fields()
            );
            return None;
        }
    };

    let biometrics = UserBiometrics {
        weight_kg,
        height_cm,
        age,
        sex: Sex::from_category(gender),
    };

    let (activity_level, activity_defaulted) = resolve_activity_level(activity);

    // An absent goal means maintain; only an unrecognised one counts as defaulted.
    let (weight_goal, goal_defaulted) = match profile.weight_goal.as_deref() {
        Some(goal) => resolve_weight_goal(goal),
        None => (WeightGoal::Maintain, false),
    };

    let breakdown = compute(
        &biometrics,
        activity_level,
        weight_goal,
        profile.target_weight,
        config,
    );

    Some(GoalCalculation {
        goals: breakdown.goals,
        bmr: breakdown.bmr,
        tdee: breakdown.tdee,
        macro_split: breakdown.split,
        defaulted: Defaulted {
            activity_level: activity_defaulted,
            weight_goal: goal_defaulted,
        },
    })
}

/// Calculate goals from already-canonical inputs
pub fn calculate_goals(
    biometrics: &UserBiometrics,
    activity_level: ActivityLevel,
    weight_goal: WeightGoal,
    target_weight: Option<f64>,
    config: &Config,
) -> NutritionGoals {
    compute(biometrics, activity_level, weight_goal, target_weight, config).goals
}

/// Intermediate values kept alongside the goals
struct Breakdown {
    goals: NutritionGoals,
    bmr: f64,
    tdee: f64,
    split: MacroSplit,
}

fn compute(
    biometrics: &UserBiometrics,
    activity_level: ActivityLevel,
    weight_goal: WeightGoal,
    target_weight: Option<f64>,
    config: &Config,
) -> Breakdown {
    let bmr = calculate_bmr(biometrics, config.engine.bmr_formula);
    let tdee = bmr * activity_level.multiplier();
    let adjusted = apply_weight_goal_adjustment(tdee, weight_goal);

    let mut calories = round_non_negative(adjusted);
    if let Some(minimum) = config.calories.minimum_for(biometrics.sex) {
        if calories < minimum {
            tracing::debug!(
                "Raising calorie goal from {} to configured minimum {}",
                calories,
                minimum
            );
            calories = minimum;
        }
    }

    tracing::debug!(
        "BMR {:.1} ({:?}), TDEE {:.1} ({}), goal {} -> {} kcal",
        bmr,
        config.engine.bmr_formula,
        tdee,
        activity_level.as_str(),
        weight_goal,
        calories
    );

    let total = f64::from(calories);
    let split = distribute_macros(total, weight_goal, biometrics.weight_kg);
    let (protein_goal, carb_goal, fat_goal) = macro_grams(total, &split);
    let micros = estimate_micronutrients(total, fat_goal);

    let goals = NutritionGoals {
        daily_calorie_goal: calories,
        protein_goal,
        carb_goal,
        fat_goal,
        fiber_goal: micros.fiber_g,
        sugar_goal: micros.sugar_g,
        sodium_goal: micros.sodium_mg,
        potassium_goal: micros.potassium_mg,
        saturated_fat_goal: micros.saturated_fat_g,
        cholesterol_goal: micros.cholesterol_mg,
        target_weight,
        weight_goal,
        activity_level,
    };

    Breakdown {
        goals,
        bmr,
        tdee,
        split,
    }
}
