#![forbid(unsafe_code)]

//! Offline nutrition goal engine.
//!
//! This crate provides:
//! - Domain types (biometrics, profiles, activity and weight-goal categories)
//! - BMR estimation and activity scaling
//! - Goal-driven calorie adjustment and macro distribution
//! - Micronutrient heuristics
//! - Legacy weight-goal normalization
//! - Profile loading, configuration and goal export

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod bmr;
pub mod activity;
pub mod weight_goal;
pub mod macronutrients;
pub mod micronutrients;
pub mod profile;
pub mod export;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use bmr::BmrFormula;
pub use weight_goal::map_weight_goal;
pub use profile::load_profile;
pub use export::save_goals;
pub use engine::{calculate, calculate_goals, calculate_with};
