//! Field-level validators.
//!
//! Each validator classifies a single raw value: `Ok(())` when it is
//! acceptable, otherwise `Err` with a human-readable reason. They never panic,
//! so callers can use them for per-field feedback before running the engine.

use crate::engine::constants::{
    AGE_MAX, AGE_MIN, HEIGHT_MAX_M, HEIGHT_MIN_M, WEIGHT_MAX_KG, WEIGHT_MIN_KG,
};
use crate::error::{FitboxError, Result};
use crate::models::Sex;

/// Age in whole years, 15 to 100 inclusive.
pub fn validate_age(age: u32) -> std::result::Result<(), String> {
    if age < AGE_MIN {
        return Err(format!("Age must be at least {} years", AGE_MIN));
    }
    if age > AGE_MAX {
        return Err(format!("Age must not exceed {} years", AGE_MAX));
    }
    Ok(())
}

/// Weight in kg, 30 to 300 inclusive. Rejects NaN and infinities.
pub fn validate_weight(weight_kg: f64) -> std::result::Result<(), String> {
    if !weight_kg.is_finite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < WEIGHT_MIN_KG {
        return Err(format!("Weight must be at least {} kg", WEIGHT_MIN_KG));
    }
    if weight_kg > WEIGHT_MAX_KG {
        return Err(format!("Weight must not exceed {} kg", WEIGHT_MAX_KG));
    }
    Ok(())
}

/// Height in meters, 1.20 to 2.50 inclusive. Rejects NaN and infinities.
pub fn validate_height(height_m: f64) -> std::result::Result<(), String> {
    if !height_m.is_finite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_m < HEIGHT_MIN_M {
        return Err(format!("Height must be at least {:.2} m", HEIGHT_MIN_M));
    }
    if height_m > HEIGHT_MAX_M {
        return Err(format!("Height must not exceed {:.2} m", HEIGHT_MAX_M));
    }
    Ok(())
}

/// Accepts "male"/"m" and "female"/"f", case-insensitively.
pub fn validate_sex(value: &str) -> std::result::Result<(), String> {
    value
        .parse::<Sex>()
        .map(|_| ())
        .map_err(|_| "Sex must be 'male' or 'female'".to_string())
}

/// Lift a validator outcome into the crate error, tagging the field.
pub(crate) fn require(field: &'static str, outcome: std::result::Result<(), String>) -> Result<()> {
    outcome.map_err(|reason| FitboxError::InvalidInput { field, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bounds_inclusive() {
        assert!(validate_age(15).is_ok());
        assert!(validate_age(100).is_ok());
        assert!(validate_age(25).is_ok());

        let low = validate_age(14).unwrap_err();
        assert!(low.contains("at least"));
        let high = validate_age(101).unwrap_err();
        assert!(high.contains("not exceed"));
    }

    #[test]
    fn test_weight_bounds() {
        assert!(validate_weight(70.5).is_ok());
        assert!(validate_weight(30.0).is_ok());
        assert!(validate_weight(300.0).is_ok());
        assert!(validate_weight(20.0).unwrap_err().contains("at least"));
        assert!(validate_weight(300.1).unwrap_err().contains("not exceed"));
        assert!(validate_weight(f64::NAN).is_err());
    }

    #[test]
    fn test_height_bounds() {
        assert!(validate_height(1.75).is_ok());
        assert!(validate_height(1.20).is_ok());
        assert!(validate_height(2.50).is_ok());
        assert!(validate_height(0.5).unwrap_err().contains("at least"));
        assert!(validate_height(2.51).unwrap_err().contains("not exceed"));
        assert!(validate_height(f64::NAN).unwrap_err().contains("valid number"));
        assert!(validate_height(f64::INFINITY).is_err());
        assert!(validate_height(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_sex_validation() {
        assert!(validate_sex("male").is_ok());
        assert!(validate_sex("FEMALE").is_ok());
        assert!(validate_sex("m").is_ok());

        let msg = validate_sex("other").unwrap_err();
        assert!(msg.contains("male"));
        assert!(msg.contains("female"));
    }

    #[test]
    fn test_require_tags_field() {
        let err = require("age", validate_age(10)).unwrap_err();
        match err {
            FitboxError::InvalidInput { field, reason } => {
                assert_eq!(field, "age");
                assert!(reason.contains("15"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
