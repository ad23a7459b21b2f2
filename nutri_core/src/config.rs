//! Configuration file support for nutri.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/nutri/config.toml`.
//! Every field has a default, and the defaults reproduce the reference
//! calculation exactly.

use crate::bmr::BmrFormula;
use crate::{Error, Result, Sex};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub calories: CalorieConfig,
}

/// Calculation engine configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub bmr_formula: BmrFormula,
}

/// Minimum daily calorie floor
///
/// Off by default. When enabled, the adjusted calorie budget never drops
/// below the minimum for the user's sex (male vs. everyone else).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalorieConfig {
    #[serde(default)]
    pub enforce_minimum: bool,

    #[serde(default = "default_male_minimum")]
    pub male_minimum: u32,

    #[serde(default = "default_female_minimum")]
    pub female_minimum: u32,
}

impl Default for CalorieConfig {
    fn default() -> Self {
        Self {
            enforce_minimum: false,
            male_minimum: default_male_minimum(),
            female_minimum: default_female_minimum(),
        }
    }
}

impl CalorieConfig {
    /// The floor for this sex, or None when the floor is disabled
    pub fn minimum_for(&self, sex: Sex) -> Option<u32> {
        if !self.enforce_minimum {
            return None;
        }
        match sex {
            Sex::Male => Some(self.male_minimum),
            Sex::Female | Sex::Other => Some(self.female_minimum),
        }
    }
}

// Default value functions
fn default_male_minimum() -> u32 {
    1500
}

fn default_female_minimum() -> u32 {
    1200
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("HOME environment variable not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("nutri").join("config.toml"))
    }

    /// Reject settings that would make the calorie floor meaningless
    pub fn validate(&self) -> Result<()> {
        let floor = &self.calories;
        if floor.enforce_minimum && (floor.male_minimum == 0 || floor.female_minimum == 0) {
            return Err(Error::Config(
                "calorie minimums must be positive when enforce_minimum is set".into(),
            ));
        }
        Ok(())
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
