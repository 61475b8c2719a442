use tracing::debug;

use crate::engine::calculations::{
    bmr_mifflin, calculate_bmi, get_bmi_interpretation, target_for, tdee_for, weight_analysis,
};
use crate::engine::constants::{ActivityLevel, FitnessGoal};
use crate::engine::validation::{require, validate_age};
use crate::error::Result;
use crate::models::{
    BmrSection, NutritionSection, PhysiologicalProfile, RawInputs, Sex, TdeeSection, UserInfo,
};

/// Compute a full profile from raw inputs.
///
/// Checks weight and height (BMI), then age, sex, activity level and goal,
/// returning the first failure; nothing is returned on error. Each key is
/// parsed once and the typed formulas run on the parsed values.
pub fn calculate_complete_profile(
    age: u32,
    sex: &str,
    weight: f64,
    height: f64,
    activity_level: &str,
    goal: &str,
) -> Result<PhysiologicalProfile> {
    let bmi = calculate_bmi(weight, height)?;
    require("age", validate_age(age))?;
    let sex: Sex = sex.parse()?;
    let activity_level: ActivityLevel = activity_level.parse()?;
    let goal: FitnessGoal = goal.parse()?;

    let bmr = bmr_mifflin(weight, height, age, sex);
    let tdee = tdee_for(bmr, activity_level);
    let target = target_for(tdee, goal);
    let analysis = weight_analysis(weight, height);

    let user_info = UserInfo {
        age,
        sex,
        weight,
        height,
        activity_level,
        goal,
    };

    debug!(
        age,
        sex = %user_info.sex,
        activity = %user_info.activity_level,
        goal = %user_info.goal,
        bmi,
        bmr,
        tdee,
        target_calories = target.target_calories,
        "computed profile"
    );

    Ok(PhysiologicalProfile {
        nutrition: NutritionSection {
            goal: user_info.goal,
            adjustment: target.adjustment,
            target_calories: target.target_calories,
            macros: target.macros,
        },
        user_info,
        bmi: get_bmi_interpretation(bmi),
        weight_analysis: analysis,
        bmr: BmrSection { value: bmr },
        tdee: TdeeSection { value: tdee },
    })
}

/// Same as [`calculate_complete_profile`], taking the caller's record.
pub fn calculate_profile_from(inputs: &RawInputs) -> Result<PhysiologicalProfile> {
    calculate_complete_profile(
        inputs.age,
        &inputs.sex,
        inputs.weight,
        inputs.height,
        &inputs.activity_level,
        &inputs.goal,
    )
}

/// Ordered `(key, description)` pairs for building activity menus.
pub fn get_available_activity_levels() -> Vec<(&'static str, &'static str)> {
    ActivityLevel::ALL
        .iter()
        .map(|l| (l.key(), l.description()))
        .collect()
}

/// Ordered `(key, description)` pairs for building goal menus.
pub fn get_available_goals() -> Vec<(&'static str, &'static str)> {
    FitnessGoal::ALL
        .iter()
        .map(|g| (g.key(), g.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitboxError;

    #[test]
    fn test_first_failure_wins() {
        // Weight is checked before the activity key.
        let err = calculate_complete_profile(25, "male", 10.0, 1.75, "nope", "maintenance")
            .unwrap_err();
        assert!(matches!(err, FitboxError::InvalidInput { field: "weight", .. }));

        let err = calculate_complete_profile(25, "male", 75.0, 1.75, "nope", "nope").unwrap_err();
        assert!(matches!(
            err,
            FitboxError::UnknownKey {
                kind: "activity level",
                ..
            }
        ));
    }

    #[test]
    fn test_typed_path_matches_keyed_entry_points() {
        use crate::engine::calculations::{
            calculate_bmr, calculate_target_calories, calculate_tdee,
        };

        let profile =
            calculate_complete_profile(41, "F", 67.3, 1.59, "very_active", "bulking").unwrap();

        let bmr = calculate_bmr(67.3, 1.59, 41, "female").unwrap();
        let tdee = calculate_tdee(bmr, "very_active").unwrap();
        let target = calculate_target_calories(tdee, "bulking").unwrap();

        assert_eq!(profile.bmr.value, bmr);
        assert_eq!(profile.tdee.value, tdee);
        assert_eq!(profile.nutrition.target_calories, target.target_calories);
        assert_eq!(profile.nutrition.macros, target.macros);
        assert_eq!(profile.user_info.sex, Sex::Female);
        assert_eq!(profile.user_info.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.user_info.goal, FitnessGoal::Bulking);
    }

    #[test]
    fn test_sex_checked_before_activity_and_goal() {
        let err = calculate_complete_profile(25, "x", 75.0, 1.75, "nope", "nope").unwrap_err();
        assert!(matches!(err, FitboxError::UnknownKey { kind: "sex", .. }));

        let err = calculate_complete_profile(10, "x", 75.0, 1.75, "nope", "nope").unwrap_err();
        assert!(matches!(err, FitboxError::InvalidInput { field: "age", .. }));
    }

    #[test]
    fn test_profile_from_raw_inputs() {
        let inputs = RawInputs {
            age: 30,
            sex: "F".to_string(),
            weight: 60.0,
            height: 1.65,
            activity_level: "lightly_active".to_string(),
            goal: "weight_loss".to_string(),
        };
        let profile = calculate_profile_from(&inputs).unwrap();
        assert_eq!(profile.user_info.sex, crate::models::Sex::Female);
        assert!(profile.nutrition.target_calories < profile.tdee.value);
    }

    #[test]
    fn test_menu_listings_are_ordered() {
        let levels = get_available_activity_levels();
        assert_eq!(levels.len(), 5);
        assert_eq!(levels[0].0, "sedentary");
        assert_eq!(levels[4].0, "extra_active");

        let goals = get_available_goals();
        assert_eq!(goals.len(), 5);
        assert_eq!(goals[0].0, "weight_loss");
        assert_eq!(goals[4].0, "bulking");
    }
}
