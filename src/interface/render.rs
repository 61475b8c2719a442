use crate::engine::constants::{ActivityLevel, FitnessGoal, REFERENCE_BMI};
use crate::models::{PhysiologicalProfile, WeightStatus};

const RULE_WIDTH: usize = 60;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(title.to_string());
    lines.push(light_rule());
}

/// Render a computed profile as a plain-text report.
///
/// Only reads the profile; output is identical for identical profiles.
pub fn format_profile_report(profile: &PhysiologicalProfile) -> String {
    let user = &profile.user_info;
    let bmi = &profile.bmi;
    let weight = &profile.weight_analysis;
    let nutrition = &profile.nutrition;
    let macros = &nutrition.macros;

    let mut lines = vec![heavy_rule(), "PHYSIOLOGICAL PROFILE".to_string(), heavy_rule()];

    section(&mut lines, "USER INFORMATION");
    lines.push(format!("Age: {} years | Sex: {}", user.age, user.sex));
    lines.push(format!(
        "Weight: {:.1} kg | Height: {:.2} m",
        user.weight, user.height
    ));
    lines.push(format!("Activity: {}", user.activity_level.description()));
    lines.push(format!("Goal: {}", user.goal.description()));

    section(&mut lines, "BMI");
    lines.push(format!("Value: {:.2} [{}]", bmi.value, bmi.indicator));
    lines.push(format!("Category: {}", bmi.category));
    lines.push(format!("Advice: {}", bmi.recommendation));

    section(&mut lines, "WEIGHT ANALYSIS");
    lines.push(format!("Current weight: {:.1} kg", weight.current));
    lines.push(format!("Ideal weight*: {:.1} kg", weight.ideal));
    lines.push(match weight.status {
        WeightStatus::Above => format!("{:.1} kg above the ideal weight", weight.difference.abs()),
        WeightStatus::Below => format!("{:.1} kg below the ideal weight", weight.difference.abs()),
        WeightStatus::AtIdeal => "At the ideal weight".to_string(),
    });
    lines.push(format!("*Based on BMI = {}", REFERENCE_BMI));

    section(&mut lines, "METABOLISM");
    lines.push(format!("BMR (resting): {:.0} kcal/day", profile.bmr.value));
    lines.push(format!("TDEE (with activity): {:.0} kcal/day", profile.tdee.value));

    section(&mut lines, "NUTRITION PLAN");
    lines.push(format!("Goal: {}", nutrition.goal.key().to_uppercase()));
    lines.push(if nutrition.adjustment > 0 {
        format!("Calorie surplus: +{} kcal/day", nutrition.adjustment)
    } else if nutrition.adjustment < 0 {
        format!("Calorie deficit: {} kcal/day", nutrition.adjustment)
    } else {
        "Maintenance: no adjustment".to_string()
    });
    lines.push(format!(
        "Target calories: {:.0} kcal/day",
        nutrition.target_calories
    ));

    section(&mut lines, "MACRONUTRIENTS");
    lines.push(format!(
        "Protein: {:>4.0} g/day ({}%)",
        macros.protein_g, macros.protein_percent
    ));
    lines.push(format!(
        "Carbs:   {:>4.0} g/day ({}%)",
        macros.carbs_g, macros.carbs_percent
    ));
    lines.push(format!(
        "Fat:     {:>4.0} g/day ({}%)",
        macros.fat_g, macros.fat_percent
    ));

    lines.push(heavy_rule());
    lines.join("\n")
}

/// Print a profile report followed by goal-specific tips.
pub fn display_profile(profile: &PhysiologicalProfile) {
    println!();
    println!("{}", format_profile_report(profile));
    println!();
    println!("Tips:");
    for tip in profile.user_info.goal.tips() {
        println!("  - {}", tip);
    }
    println!();
}

/// List activity levels with their multipliers.
pub fn display_activity_levels() {
    println!();
    println!("=== Activity levels ===");
    for (i, level) in ActivityLevel::ALL.iter().enumerate() {
        println!();
        println!("{}. {}", i + 1, level.description());
        println!("   Key: {}", level.key());
        println!("   Factor: x{}", level.factor());
    }
    println!();
}

/// List goals with their calorie adjustments and macro splits.
pub fn display_goals() {
    println!();
    println!("=== Goals ===");
    for (i, goal) in FitnessGoal::ALL.iter().enumerate() {
        let adj = goal.calorie_adjustment();
        let ratio = goal.macro_ratio();
        println!();
        println!("{}. {}", i + 1, goal.description());
        println!("   Key: {}", goal.key());
        if adj == 0 {
            println!("   Adjustment: maintenance");
        } else {
            println!("   Adjustment: {:+} kcal/day", adj);
        }
        println!(
            "   Macros: {}% protein / {}% carbs / {}% fat",
            ratio.protein, ratio.carbs, ratio.fat
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_complete_profile;

    #[test]
    fn test_report_has_all_sections() {
        let profile =
            calculate_complete_profile(25, "male", 75.0, 1.75, "moderately_active", "maintenance")
                .unwrap();
        let report = format_profile_report(&profile);

        for heading in [
            "PHYSIOLOGICAL PROFILE",
            "USER INFORMATION",
            "BMI",
            "WEIGHT ANALYSIS",
            "METABOLISM",
            "NUTRITION PLAN",
            "MACRONUTRIENTS",
        ] {
            assert!(report.contains(heading), "missing {heading}");
        }
        assert!(report.contains("Maintenance: no adjustment"));
    }

    #[test]
    fn test_report_shows_signed_adjustment() {
        let loss =
            calculate_complete_profile(30, "female", 60.0, 1.65, "lightly_active", "weight_loss")
                .unwrap();
        assert!(format_profile_report(&loss).contains("Calorie deficit: -500 kcal/day"));

        let gain =
            calculate_complete_profile(22, "male", 70.0, 1.80, "very_active", "muscle_gain")
                .unwrap();
        assert!(format_profile_report(&gain).contains("Calorie surplus: +300 kcal/day"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let profile =
            calculate_complete_profile(40, "f", 80.0, 1.60, "sedentary", "bulking").unwrap();
        assert_eq!(format_profile_report(&profile), format_profile_report(&profile));
    }
}
