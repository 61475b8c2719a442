use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::engine::constants::{ActivityLevel, FitnessGoal};
use crate::engine::validation::{validate_age, validate_height, validate_weight};
use crate::error::Result;
use crate::models::{RawInputs, Sex};

/// Minimum Jaro-Winkler similarity for a key suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Entries of the interactive main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FullProfile,
    BmiOnly,
    BmrOnly,
    TdeeOnly,
    ActivityLevels,
    Goals,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::FullProfile,
        MenuChoice::BmiOnly,
        MenuChoice::BmrOnly,
        MenuChoice::TdeeOnly,
        MenuChoice::ActivityLevels,
        MenuChoice::Goals,
        MenuChoice::Quit,
    ];

    /// Text shown in the menu.
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::FullProfile => "Compute my full physiological profile",
            MenuChoice::BmiOnly => "Compute my BMI only",
            MenuChoice::BmrOnly => "Compute my BMR only",
            MenuChoice::TdeeOnly => "Compute my TDEE only",
            MenuChoice::ActivityLevels => "Show activity levels",
            MenuChoice::Goals => "Show available goals",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Show the main menu and return the chosen entry.
pub fn prompt_menu() -> Result<MenuChoice> {
    let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuChoice::ALL[selection])
}

/// Prompt for age; re-asks until it passes `validate_age`.
pub fn prompt_age() -> Result<u32> {
    Ok(Input::<u32>::new()
        .with_prompt("Age (years)")
        .validate_with(|age: &u32| validate_age(*age))
        .interact_text()?)
}

/// Prompt for weight in kg; re-asks until it passes `validate_weight`.
pub fn prompt_weight() -> Result<f64> {
    Ok(Input::<f64>::new()
        .with_prompt("Weight (kg)")
        .validate_with(|w: &f64| validate_weight(*w))
        .interact_text()?)
}

/// Prompt for height in meters; re-asks until it passes `validate_height`.
pub fn prompt_height() -> Result<f64> {
    Ok(Input::<f64>::new()
        .with_prompt("Height (m, e.g. 1.75)")
        .validate_with(|h: &f64| validate_height(*h))
        .interact_text()?)
}

/// Prompt for sex from a two-item list.
pub fn prompt_sex() -> Result<Sex> {
    let options = [Sex::Male, Sex::Female];
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&Sex::KEYS)
        .default(0)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for an activity level from its descriptions.
pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.description()).collect();
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for a goal from its descriptions.
pub fn prompt_goal() -> Result<FitnessGoal> {
    let labels: Vec<&str> = FitnessGoal::ALL.iter().map(|g| g.description()).collect();
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&labels)
        .default(2) // maintenance
        .interact()?;

    Ok(FitnessGoal::ALL[selection])
}

/// Prompt for a BMR value in kcal/day.
pub fn prompt_bmr() -> Result<f64> {
    Ok(Input::<f64>::new()
        .with_prompt("BMR (kcal/day)")
        .validate_with(|bmr: &f64| {
            if bmr.is_finite() && *bmr > 0.0 {
                Ok(())
            } else {
                Err("BMR must be a positive number")
            }
        })
        .interact_text()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a file path, with a default.
pub fn prompt_path(prompt: &str, default: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?)
}

/// Collect all six profile fields, each validated as it is entered.
pub fn collect_user_inputs() -> Result<RawInputs> {
    let age = prompt_age()?;
    let sex = prompt_sex()?;
    let weight = prompt_weight()?;
    let height = prompt_height()?;
    let activity_level = prompt_activity_level()?;
    let goal = prompt_goal()?;

    Ok(RawInputs {
        age,
        sex: sex.key().to_string(),
        weight,
        height,
        activity_level: activity_level.key().to_string(),
        goal: goal.key().to_string(),
    })
}

/// Closest known key to a mistyped value, if any is similar enough.
pub fn suggest_key<'a>(input: &str, keys: &[&'a str]) -> Option<&'a str> {
    let input = input.trim().to_lowercase();
    keys.iter()
        .map(|k| (*k, jaro_winkler(k, &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(k, _)| k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_key_close_match() {
        let keys = ActivityLevel::keys();
        assert_eq!(suggest_key("moderatly_active", &keys), Some("moderately_active"));
        assert_eq!(suggest_key("Sedentry", &keys), Some("sedentary"));
    }

    #[test]
    fn test_suggest_key_no_match() {
        let keys = FitnessGoal::keys();
        assert_eq!(suggest_key("zzz", &keys), None);
    }

    #[test]
    fn test_menu_labels_unique() {
        let labels: std::collections::HashSet<_> =
            MenuChoice::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), MenuChoice::ALL.len());
    }
}
