use serde::{Deserialize, Serialize};

use crate::engine::constants::{ActivityLevel, BmiCategory, FitnessGoal};
use crate::models::Sex;

/// Validated inputs echoed back in the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub age: u32,
    pub sex: Sex,
    pub weight: f64,
    pub height: f64,
    pub activity_level: ActivityLevel,
    pub goal: FitnessGoal,
}

/// A BMI value with its band and advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiInterpretation {
    pub value: f64,
    pub category: BmiCategory,
    pub indicator: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightStatus {
    Above,
    Below,
    AtIdeal,
}

/// Current weight against the BMI-22 reference weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightAnalysis {
    pub current: f64,
    pub ideal: f64,
    /// `current - ideal`; positive means above the reference.
    pub difference: f64,
    pub status: WeightStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrSection {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdeeSection {
    pub value: f64,
}

/// Daily macronutrient split in grams and percent of calories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub protein_percent: u8,
    pub carbs_percent: u8,
    pub fat_percent: u8,
}

/// Result of applying a goal to a TDEE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieTarget {
    pub tdee: f64,
    pub adjustment: i32,
    pub target_calories: f64,
    pub macros: Macros,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSection {
    pub goal: FitnessGoal,
    pub adjustment: i32,
    pub target_calories: f64,
    pub macros: Macros,
}

/// The complete computed profile for one set of inputs.
///
/// Built in one step by [`crate::engine::calculate_complete_profile`]; never
/// partially populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysiologicalProfile {
    pub user_info: UserInfo,
    pub bmi: BmiInterpretation,
    pub weight_analysis: WeightAnalysis,
    pub bmr: BmrSection,
    pub tdee: TdeeSection,
    pub nutrition: NutritionSection,
}
