pub mod cli;
pub mod engine;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;

pub use engine::{calculate_complete_profile, ActivityLevel, BmiCategory, FitnessGoal};
pub use error::{FitboxError, Result};
pub use models::{PhysiologicalProfile, RawInputs, Sex};
