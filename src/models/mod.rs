pub mod inputs;
pub mod profile;

pub use inputs::{RawInputs, Sex};
pub use profile::{
    BmiInterpretation, BmrSection, CalorieTarget, Macros, NutritionSection, PhysiologicalProfile,
    TdeeSection, UserInfo, WeightAnalysis, WeightStatus,
};
