//! Batch profiling of gym-member CSV exports.
//!
//! Each row is mapped onto the engine's inputs (workout frequency drives the
//! activity level, workout type drives the goal) and profiled independently.
//! Rows the engine rejects are skipped and counted, never fatal.

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::calculate_complete_profile;
use crate::engine::constants::{ActivityLevel, FitnessGoal};
use crate::error::Result;
use crate::models::PhysiologicalProfile;

/// One input row. Columns not listed here are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberRow {
    #[serde(rename = "Age")]
    pub age: u32,

    #[serde(rename = "Gender")]
    pub gender: String,

    #[serde(rename = "Weight (kg)")]
    pub weight_kg: f64,

    #[serde(rename = "Height (m)")]
    pub height_m: f64,

    #[serde(rename = "Workout_Type")]
    pub workout_type: String,

    #[serde(rename = "Workout_Frequency (days/week)")]
    pub workout_frequency: u32,
}

/// One output row: a flattened profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRow {
    pub age: u32,
    pub sex: String,
    pub weight: f64,
    pub height: f64,
    pub activity_level: String,
    pub goal: String,
    pub bmi: f64,
    pub bmi_category: String,
    pub ideal_weight: f64,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl From<&PhysiologicalProfile> for ProfileRow {
    fn from(p: &PhysiologicalProfile) -> Self {
        let macros = &p.nutrition.macros;
        Self {
            age: p.user_info.age,
            sex: p.user_info.sex.key().to_string(),
            weight: p.user_info.weight,
            height: p.user_info.height,
            activity_level: p.user_info.activity_level.key().to_string(),
            goal: p.user_info.goal.key().to_string(),
            bmi: p.bmi.value,
            bmi_category: p.bmi.category.label().to_string(),
            ideal_weight: round1(p.weight_analysis.ideal),
            bmr: round1(p.bmr.value),
            tdee: round1(p.tdee.value),
            target_calories: round1(p.nutrition.target_calories),
            protein_g: round1(macros.protein_g),
            carbs_g: round1(macros.carbs_g),
            fat_g: round1(macros.fat_g),
        }
    }
}

fn round1(value: f64) -> f64 {
    crate::engine::round_to(value, 1)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
}

/// Training frequency to activity tier.
pub fn activity_from_frequency(days_per_week: u32) -> ActivityLevel {
    match days_per_week {
        0..=2 => ActivityLevel::Sedentary,
        3..=4 => ActivityLevel::ModeratelyActive,
        _ => ActivityLevel::VeryActive,
    }
}

/// Workout type to goal (case-insensitive substring match).
pub fn goal_from_workout_type(workout_type: &str) -> FitnessGoal {
    let lower = workout_type.to_lowercase();
    if lower.contains("cardio") || lower.contains("hiit") {
        FitnessGoal::WeightLoss
    } else if lower.contains("strength") {
        FitnessGoal::MuscleGain
    } else {
        FitnessGoal::Maintenance
    }
}

pub fn profile_member(row: &MemberRow) -> Result<PhysiologicalProfile> {
    calculate_complete_profile(
        row.age,
        &row.gender,
        row.weight_kg,
        row.height_m,
        activity_from_frequency(row.workout_frequency).key(),
        goal_from_workout_type(&row.workout_type).key(),
    )
}

/// Profile every member row from `input` and write one CSV row per success.
pub fn run_batch<R: Read, W: Write>(input: R, output: W) -> Result<BatchSummary> {
    let mut reader = csv::Reader::from_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    let mut summary = BatchSummary::default();

    for (idx, record) in reader.deserialize::<MemberRow>().enumerate() {
        // Data rows start on line 2, after the header.
        let line = idx + 2;
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                warn!(line, error = %e, "skipping unreadable row");
                summary.skipped += 1;
                continue;
            }
        };

        match profile_member(&row) {
            Ok(profile) => {
                writer.serialize(ProfileRow::from(&profile))?;
                summary.processed += 1;
            }
            Err(e) => {
                warn!(line, error = %e, "skipping row");
                summary.skipped += 1;
            }
        }
    }

    writer.flush()?;
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        "batch complete"
    );
    Ok(summary)
}

/// File-path wrapper around [`run_batch`].
pub fn run_batch_files<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<BatchSummary> {
    let input = std::fs::File::open(input)?;
    let output = std::fs::File::create(output)?;
    run_batch(input, output)
}
