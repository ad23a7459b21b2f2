//! Weight goal handling: caloric adjustment and legacy string normalization.
//!
//! Stored profiles carry goal strings from several schema generations
//! (`lose_heavy`, `gain`, `lose_0_5`, ...). Everything is funnelled into the
//! seven canonical [`WeightGoal`] values here.

use crate::{GoalDirection, WeightGoal};

impl WeightGoal {
    pub const ALL: [WeightGoal; 7] = [
        WeightGoal::LoseOne,
        WeightGoal::LoseThreeQuarters,
        WeightGoal::LoseHalf,
        WeightGoal::LoseQuarter,
        WeightGoal::Maintain,
        WeightGoal::GainQuarter,
        WeightGoal::GainHalf,
    ];

    /// Signed daily caloric delta in kcal
    ///
    /// Roughly 1000 kcal/day per kg/week of change.
    pub fn calorie_delta(self) -> i32 {
        match self {
            WeightGoal::LoseOne => -1000,
            WeightGoal::LoseThreeQuarters => -750,
            WeightGoal::LoseHalf => -500,
            WeightGoal::LoseQuarter => -250,
            WeightGoal::Maintain => 0,
            WeightGoal::GainQuarter => 250,
            WeightGoal::GainHalf => 500,
        }
    }

    pub fn direction(self) -> GoalDirection {
        match self {
            WeightGoal::LoseOne
            | WeightGoal::LoseThreeQuarters
            | WeightGoal::LoseHalf
            | WeightGoal::LoseQuarter => GoalDirection::Loss,
            WeightGoal::Maintain => GoalDirection::Maintain,
            WeightGoal::GainQuarter | WeightGoal::GainHalf => GoalDirection::Gain,
        }
    }

    /// Canonical storage name
    pub fn as_str(self) -> &'static str {
        match self {
            WeightGoal::LoseOne => "lose_1",
            WeightGoal::LoseThreeQuarters => "lose_0_75",
            WeightGoal::LoseHalf => "lose_0_5",
            WeightGoal::LoseQuarter => "lose_0_25",
            WeightGoal::Maintain => "maintain",
            WeightGoal::GainQuarter => "gain_0_25",
            WeightGoal::GainHalf => "gain_0_5",
        }
    }
}

impl std::fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a legacy or canonical goal string onto a canonical goal
///
/// Returns None for unrecognised input.
fn lookup_weight_goal(s: &str) -> Option<WeightGoal> {
    match s.trim().to_lowercase().as_str() {
        "lose_1" | "lose_extreme" => Some(WeightGoal::LoseOne),
        "lose_0_75" | "lose_heavy" => Some(WeightGoal::LoseThreeQuarters),
        "lose_0_5" | "lose_moderate" | "lose" => Some(WeightGoal::LoseHalf),
        "lose_0_25" | "lose_light" => Some(WeightGoal::LoseQuarter),
        "maintain" => Some(WeightGoal::Maintain),
        "gain_0_25" | "gain_light" | "gain" => Some(WeightGoal::GainQuarter),
        "gain_0_5" | "gain_moderate" => Some(WeightGoal::GainHalf),
        _ => None,
    }
}

/// Resolve a goal string, reporting whether the maintain fallback was used
pub fn resolve_weight_goal(s: &str) -> (WeightGoal, bool) {
    match lookup_weight_goal(s) {
        Some(goal) => (goal, false),
        None => {
            tracing::warn!("Unknown weight goal {:?}, defaulting to maintain", s);
            (WeightGoal::Maintain, true)
        }
    }
}

/// Normalize a legacy goal string; unrecognised input becomes `maintain`
pub fn map_weight_goal(legacy: &str) -> WeightGoal {
    resolve_weight_goal(legacy).0
}

/// Apply the goal's caloric delta to TDEE
pub fn apply_weight_goal_adjustment(tdee: f64, goal: WeightGoal) -> f64 {
    tdee + f64::from(goal.calorie_delta())
}
