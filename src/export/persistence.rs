use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::interface::render::format_profile_report;
use crate::models::PhysiologicalProfile;

/// Write the text report for a profile.
pub fn save_report<P: AsRef<Path>>(path: P, profile: &PhysiologicalProfile) -> Result<()> {
    fs::write(path, format_profile_report(profile))?;
    Ok(())
}

/// Write a profile as pretty-printed JSON.
pub fn save_profile_json<P: AsRef<Path>>(path: P, profile: &PhysiologicalProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a profile saved by [`save_profile_json`]. Floats reload bit-exact.
pub fn load_profile_json<P: AsRef<Path>>(path: P) -> Result<PhysiologicalProfile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_complete_profile;
    use tempfile::NamedTempFile;

    fn sample_profile() -> PhysiologicalProfile {
        calculate_complete_profile(28, "female", 58.0, 1.68, "moderately_active", "maintenance")
            .unwrap()
    }

    #[test]
    fn test_save_report_writes_text() {
        let profile = sample_profile();
        let file = NamedTempFile::new().unwrap();

        save_report(file.path(), &profile).unwrap();

        let written = fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, format_profile_report(&profile));
    }

    #[test]
    fn test_profile_json_uses_snake_case_keys() {
        let profile = sample_profile();
        let file = NamedTempFile::new().unwrap();
        save_profile_json(file.path(), &profile).unwrap();

        let raw = fs::read_to_string(file.path()).unwrap();
        assert!(raw.contains("\"target_calories\""));
        assert!(raw.contains("\"protein_percent\""));
        assert!(raw.contains("\"moderately_active\""));

        let reloaded = load_profile_json(file.path()).unwrap();
        assert_eq!(reloaded, profile);
    }

    #[test]
    fn test_reloaded_profile_renders_same_report() {
        let profile = calculate_complete_profile(
            22,
            "female",
            34.37,
            1.2433,
            "lightly_active",
            "moderate_weight_loss",
        )
        .unwrap();
        let file = NamedTempFile::new().unwrap();
        save_profile_json(file.path(), &profile).unwrap();

        let reloaded = load_profile_json(file.path()).unwrap();
        assert_eq!(format_profile_report(&reloaded), format_profile_report(&profile));
    }

    #[test]
    fn test_profile_json_reload_is_exact_across_inputs() {
        use crate::engine::constants::{ActivityLevel, FitnessGoal};

        let file = NamedTempFile::new().unwrap();
        let mut checked = 0;

        for age in [15, 22, 47, 100] {
            for sex in ["male", "female"] {
                for i in 0..9 {
                    let weight = 30.0 + i as f64 * 7.31 + 4.37;
                    for j in 0..9 {
                        let height = 1.20 + j as f64 * 0.1433 + 0.0433;
                        for level in ActivityLevel::ALL {
                            for goal in FitnessGoal::ALL {
                                let profile = calculate_complete_profile(
                                    age,
                                    sex,
                                    weight,
                                    height,
                                    level.key(),
                                    goal.key(),
                                )
                                .unwrap();

                                let json = serde_json::to_string(&profile).unwrap();
                                let reloaded: PhysiologicalProfile =
                                    serde_json::from_str(&json).unwrap();
                                assert_eq!(reloaded, profile, "{json}");
                                checked += 1;
                            }
                        }
                    }
                }
            }
        }
        assert_eq!(checked, 4 * 2 * 9 * 9 * 5 * 5);

        // The value that used to lose its last digit.
        let profile = calculate_complete_profile(
            22,
            "female",
            34.37,
            1.2433,
            "lightly_active",
            "moderate_weight_loss",
        )
        .unwrap();
        save_profile_json(file.path(), &profile).unwrap();
        assert_eq!(load_profile_json(file.path()).unwrap(), profile);
    }
}
