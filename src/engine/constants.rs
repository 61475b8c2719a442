use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FitboxError;

// ─────────────────────────────────────────────────────────────────────────────
// Input bounds (inclusive on both ends)
// ─────────────────────────────────────────────────────────────────────────────

pub const AGE_MIN: u32 = 15;
pub const AGE_MAX: u32 = 100;

pub const WEIGHT_MIN_KG: f64 = 30.0;
pub const WEIGHT_MAX_KG: f64 = 300.0;

pub const HEIGHT_MIN_M: f64 = 1.20;
pub const HEIGHT_MAX_M: f64 = 2.50;

// ─────────────────────────────────────────────────────────────────────────────
// Formula constants
// ─────────────────────────────────────────────────────────────────────────────

/// Mifflin-St Jeor constant offsets.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Reference BMI used to derive the ideal weight (middle of the normal band).
pub const REFERENCE_BMI: f64 = 22.0;

/// Energy density in kcal per gram.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity levels
// ─────────────────────────────────────────────────────────────────────────────

/// Daily activity tier, ordered from least to most active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// Every tier, least active first.
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Stable snake_case key used by callers and serialization.
    pub fn key(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }

    /// Multiplier applied to BMR to get TDEE.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Human-readable label for menus.
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "Lightly active (light exercise 1-3 days/week)",
            ActivityLevel::ModeratelyActive => "Moderately active (moderate exercise 3-5 days/week)",
            ActivityLevel::VeryActive => "Very active (hard exercise 6-7 days/week)",
            ActivityLevel::ExtraActive => "Extra active (very hard exercise or physical job)",
        }
    }

    /// All keys in tier order.
    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.key()).collect()
    }
}

impl FromStr for ActivityLevel {
    type Err = FitboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.key() == s)
            .ok_or_else(|| FitboxError::unknown_key("activity level", s, &Self::keys()))
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fitness goals
// ─────────────────────────────────────────────────────────────────────────────

/// Percent of calories from each macronutrient. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroRatio {
    pub protein: u8,
    pub carbs: u8,
    pub fat: u8,
}

impl MacroRatio {
    /// Sum of the three percentages.
    pub const fn total(&self) -> u16 {
        self.protein as u16 + self.carbs as u16 + self.fat as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    ModerateWeightLoss,
    Maintenance,
    MuscleGain,
    Bulking,
}

impl FitnessGoal {
    /// Every goal, from largest deficit to largest surplus.
    pub const ALL: [FitnessGoal; 5] = [
        FitnessGoal::WeightLoss,
        FitnessGoal::ModerateWeightLoss,
        FitnessGoal::Maintenance,
        FitnessGoal::MuscleGain,
        FitnessGoal::Bulking,
    ];

    /// Stable snake_case key used by callers and serialization.
    pub fn key(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::ModerateWeightLoss => "moderate_weight_loss",
            FitnessGoal::Maintenance => "maintenance",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Bulking => "bulking",
        }
    }

    /// Signed daily calorie adjustment applied to TDEE.
    pub fn calorie_adjustment(&self) -> i32 {
        match self {
            FitnessGoal::WeightLoss => -500,
            FitnessGoal::ModerateWeightLoss => -250,
            FitnessGoal::Maintenance => 0,
            FitnessGoal::MuscleGain => 300,
            FitnessGoal::Bulking => 500,
        }
    }

    /// Protein/carbs/fat split for this goal.
    pub fn macro_ratio(&self) -> MacroRatio {
        let (protein, carbs, fat) = match self {
            FitnessGoal::WeightLoss => (40, 30, 30),
            FitnessGoal::ModerateWeightLoss => (35, 35, 30),
            FitnessGoal::Maintenance => (30, 40, 30),
            FitnessGoal::MuscleGain => (30, 45, 25),
            FitnessGoal::Bulking => (25, 50, 25),
        };
        MacroRatio { protein, carbs, fat }
    }

    /// Human-readable label for menus.
    pub fn description(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight loss (-500 kcal/day)",
            FitnessGoal::ModerateWeightLoss => "Moderate weight loss (-250 kcal/day)",
            FitnessGoal::Maintenance => "Maintenance (no adjustment)",
            FitnessGoal::MuscleGain => "Muscle gain (+300 kcal/day)",
            FitnessGoal::Bulking => "Bulking (+500 kcal/day)",
        }
    }

    /// Short coaching advice shown next to a profile.
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            FitnessGoal::WeightLoss | FitnessGoal::ModerateWeightLoss => &[
                "Favor protein, it keeps you full longer",
                "Cut back on simple sugars",
                "Hold a steady calorie deficit",
                "Aim for 0.5-1 kg of loss per week",
            ],
            FitnessGoal::MuscleGain | FitnessGoal::Bulking => &[
                "Eat 1.6-2.2 g of protein per kg of body weight",
                "Get enough carbohydrates to fuel training",
                "Keep the calorie surplus moderate",
                "Prioritize strength training",
            ],
            FitnessGoal::Maintenance => &[
                "Keep meals balanced",
                "Vary your nutrient sources",
                "Listen to hunger and fullness cues",
                "Stay active on a regular schedule",
            ],
        }
    }

    /// All keys in menu order.
    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|g| g.key()).collect()
    }
}

impl FromStr for FitnessGoal {
    type Err = FitboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.key() == s)
            .ok_or_else(|| FitboxError::unknown_key("goal", s, &Self::keys()))
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// BMI bands
// ─────────────────────────────────────────────────────────────────────────────

/// BMI classification band. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObeseClassI,
    ObeseClassIi,
    ObeseClassIii,
}

impl BmiCategory {
    /// Half-open `[low, high)` range of this band.
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::ObeseClassI => (30.0, 35.0),
            BmiCategory::ObeseClassIi => (35.0, 40.0),
            BmiCategory::ObeseClassIii => (40.0, f64::INFINITY),
        }
    }

    /// Display name of the band.
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClassI => "Obese (class I)",
            BmiCategory::ObeseClassIi => "Obese (class II)",
            BmiCategory::ObeseClassIii => "Obese (class III)",
        }
    }

    /// Short tag distinguishing the band (`low`, `ok`, `high`, ...).
    pub fn indicator(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "low",
            BmiCategory::Normal => "ok",
            BmiCategory::Overweight => "high",
            BmiCategory::ObeseClassI => "very-high",
            BmiCategory::ObeseClassIi => "severe",
            BmiCategory::ObeseClassIii => "critical",
        }
    }

    /// Static advice for someone in this band.
    pub fn recommendation(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Consider a moderate calorie surplus and strength training to gain healthy mass."
            }
            BmiCategory::Normal => "Healthy range. Keep a balanced diet and regular activity.",
            BmiCategory::Overweight => {
                "A moderate calorie deficit combined with regular exercise is recommended."
            }
            BmiCategory::ObeseClassI => {
                "A structured weight-loss plan is recommended; consider professional guidance."
            }
            BmiCategory::ObeseClassIi => {
                "Medical follow-up is recommended alongside diet and activity changes."
            }
            BmiCategory::ObeseClassIii => {
                "Please consult a healthcare professional for a supervised plan."
            }
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_ratios_sum_to_100() {
        for goal in FitnessGoal::ALL {
            assert_eq!(goal.macro_ratio().total(), 100, "{}", goal);
        }
    }

    #[test]
    fn test_activity_factors_increase() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.factor()).collect();
        assert!(factors.windows(2).all(|w| w[0] < w[1]));
        assert!(factors[0] >= 1.0);
    }

    #[test]
    fn test_key_roundtrip() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.key().parse::<ActivityLevel>().unwrap(), level);
        }
        for goal in FitnessGoal::ALL {
            assert_eq!(goal.key().parse::<FitnessGoal>().unwrap(), goal);
        }
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!("super_active".parse::<ActivityLevel>().is_err());
        let err = "get_ripped".parse::<FitnessGoal>().unwrap_err();
        assert!(err.to_string().contains("muscle_gain"));
    }

    #[test]
    fn test_indicators_are_distinct() {
        let all = [
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::ObeseClassI,
            BmiCategory::ObeseClassIi,
            BmiCategory::ObeseClassIii,
        ];
        let indicators: std::collections::HashSet<_> = all.iter().map(|c| c.indicator()).collect();
        assert_eq!(indicators.len(), all.len());
    }
}
