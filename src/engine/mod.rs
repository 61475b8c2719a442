pub mod calculations;
pub mod constants;
pub mod profile;
pub mod validation;

pub use calculations::{
    bmr_mifflin, calculate_bmi, calculate_bmr, calculate_target_calories, calculate_tdee,
    get_bmi_category, get_bmi_interpretation, ideal_weight, macros_for, round_to, target_for,
    tdee_for, weight_analysis,
};
pub use constants::{ActivityLevel, BmiCategory, FitnessGoal, MacroRatio};
pub use profile::{
    calculate_complete_profile, calculate_profile_from, get_available_activity_levels,
    get_available_goals,
};
pub use validation::{validate_age, validate_height, validate_sex, validate_weight};
