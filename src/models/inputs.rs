use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FitboxError;

/// Biological sex, used only for the BMR constant offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Accepted canonical keys.
    pub const KEYS: [&'static str; 2] = ["male", "female"];

    /// Canonical lowercase key.
    pub fn key(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = FitboxError;

    /// Case-insensitive; accepts "m"/"f" as short forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(FitboxError::unknown_key("sex", s, &Sex::KEYS)),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The six raw fields a caller hands to the engine, before any validation.
///
/// Categorical fields stay as strings so that an unknown key is reported by the
/// engine rather than by the deserializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub age: u32,
    #[serde(alias = "gender")]
    pub sex: String,
    /// Kilograms.
    pub weight: f64,
    /// Meters.
    pub height: f64,
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
    #[serde(default = "default_goal")]
    pub goal: String,
}

/// Activity level assumed when a caller omits it.
pub const DEFAULT_ACTIVITY_LEVEL: &str = "moderately_active";

/// Goal assumed when a caller omits it.
pub const DEFAULT_GOAL: &str = "maintenance";

fn default_activity_level() -> String {
    DEFAULT_ACTIVITY_LEVEL.to_string()
}

fn default_goal() -> String {
    DEFAULT_GOAL.to_string()
}
