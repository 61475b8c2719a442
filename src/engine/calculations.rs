use crate::engine::constants::*;
use crate::engine::validation::{require, validate_age, validate_height, validate_weight};
use crate::error::Result;
use crate::models::{
    BmiInterpretation, CalorieTarget, Macros, Sex, WeightAnalysis, WeightStatus,
};

/// Round a float to n decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

// ─────────────────────────────────────────────────────────────────────────────
// BMI
// ─────────────────────────────────────────────────────────────────────────────

/// BMI = weight(kg) / height(m)², rounded to 2 decimals.
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> Result<f64> {
    require("weight", validate_weight(weight_kg))?;
    require("height", validate_height(height_m))?;

    Ok(round_to(weight_kg / (height_m * height_m), 2))
}

/// Classify a BMI value. A value on a boundary belongs to the higher band.
pub fn get_bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObeseClassI
    } else if bmi < 40.0 {
        BmiCategory::ObeseClassIi
    } else {
        BmiCategory::ObeseClassIii
    }
}

/// BMI value with its band, indicator tag and advice.
pub fn get_bmi_interpretation(bmi: f64) -> BmiInterpretation {
    let category = get_bmi_category(bmi);
    BmiInterpretation {
        value: bmi,
        category,
        indicator: category.indicator().to_string(),
        recommendation: category.recommendation().to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// BMR / TDEE
// ─────────────────────────────────────────────────────────────────────────────

/// Mifflin-St Jeor basal metabolic rate in kcal/day.
///
/// Formula: 10 × weight(kg) + 6.25 × height(cm) − 5 × age + C, where C is +5
/// for males and −161 for females.
pub fn bmr_mifflin(weight_kg: f64, height_m: f64, age: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * (height_m * 100.0) - 5.0 * age as f64;
    match sex {
        Sex::Male => base + BMR_MALE_OFFSET,
        Sex::Female => base + BMR_FEMALE_OFFSET,
    }
}

/// Validating form of [`bmr_mifflin`] taking a raw sex string.
pub fn calculate_bmr(weight_kg: f64, height_m: f64, age: u32, sex: &str) -> Result<f64> {
    require("age", validate_age(age))?;
    require("weight", validate_weight(weight_kg))?;
    require("height", validate_height(height_m))?;
    let sex: Sex = sex.parse()?;
    Ok(bmr_mifflin(weight_kg, height_m, age, sex))
}

/// BMR scaled by the activity factor.
pub fn tdee_for(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * level.factor()
}

/// TDEE = BMR × activity factor. Unrounded.
pub fn calculate_tdee(bmr: f64, activity_level: &str) -> Result<f64> {
    let level: ActivityLevel = activity_level.parse()?;
    Ok(tdee_for(bmr, level))
}

// ─────────────────────────────────────────────────────────────────────────────
// Calorie target and macros
// ─────────────────────────────────────────────────────────────────────────────

/// Split a calorie target into grams using the 4/4/9 kcal-per-gram rule.
pub fn macros_for(target_calories: f64, ratio: MacroRatio) -> Macros {
    let share = |percent: u8| target_calories * percent as f64 / 100.0;
    Macros {
        protein_g: share(ratio.protein) / KCAL_PER_G_PROTEIN,
        carbs_g: share(ratio.carbs) / KCAL_PER_G_CARBS,
        fat_g: share(ratio.fat) / KCAL_PER_G_FAT,
        protein_percent: ratio.protein,
        carbs_percent: ratio.carbs,
        fat_percent: ratio.fat,
    }
}

/// Apply a goal's calorie adjustment to a TDEE.
///
/// No minimum calorie floor is applied: a low TDEE with an aggressive loss
/// goal can produce a very low target.
pub fn target_for(tdee: f64, goal: FitnessGoal) -> CalorieTarget {
    let adjustment = goal.calorie_adjustment();
    let target_calories = tdee + adjustment as f64;
    CalorieTarget {
        tdee,
        adjustment,
        target_calories,
        macros: macros_for(target_calories, goal.macro_ratio()),
    }
}

/// Validating form of [`target_for`] taking a raw goal key.
pub fn calculate_target_calories(tdee: f64, goal: &str) -> Result<CalorieTarget> {
    let goal: FitnessGoal = goal.parse()?;
    Ok(target_for(tdee, goal))
}

// ─────────────────────────────────────────────────────────────────────────────
// Ideal weight
// ─────────────────────────────────────────────────────────────────────────────

/// Weight at the reference BMI for this height.
pub fn ideal_weight(height_m: f64) -> f64 {
    REFERENCE_BMI * height_m * height_m
}

/// Compare a weight to the ideal weight for the height.
///
/// Status comes from the sign of the difference; exactly zero is `AtIdeal`.
pub fn weight_analysis(weight_kg: f64, height_m: f64) -> WeightAnalysis {
    let ideal = ideal_weight(height_m);
    let difference = weight_kg - ideal;
    let status = if difference > 0.0 {
        WeightStatus::Above
    } else if difference < 0.0 {
        WeightStatus::Below
    } else {
        WeightStatus::AtIdeal
    };

    WeightAnalysis {
        current: weight_kg,
        ideal,
        difference,
        status,
    }
}
