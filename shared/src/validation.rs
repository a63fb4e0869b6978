//! Validation utilities for the fertilizer advisor
//!
//! The engine itself accepts any numbers; these checks guard the form and API
//! boundary before values reach it.

use thiserror::Error;

use crate::models::{CropType, FieldInput, Observation, SoilType};

/// A single rejected input field
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct InvalidField {
    pub field: &'static str,
    pub message: &'static str,
}

impl InvalidField {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

fn check(field: &'static str, result: Result<(), &'static str>) -> Result<(), InvalidField> {
    result.map_err(|message| InvalidField::new(field, message))
}

// ============================================================================
// Reading Validations
// ============================================================================

/// Reject NaN and infinities
pub fn validate_finite(value: f64) -> Result<(), &'static str> {
    if value.is_finite() {
        Ok(())
    } else {
        Err("Value must be a finite number")
    }
}

/// Validate a percentage reading (humidity, soil moisture)
pub fn validate_percentage(value: f64) -> Result<(), &'static str> {
    validate_finite(value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Validate soil pH is on the 0-14 scale
pub fn validate_soil_ph(ph: f64) -> Result<(), &'static str> {
    validate_finite(ph)?;
    if !(0.0..=14.0).contains(&ph) {
        return Err("Soil pH must be between 0 and 14");
    }
    Ok(())
}

/// Nutrient levels are mg/kg and cannot be negative
pub fn validate_nutrient(value: f64) -> Result<(), &'static str> {
    validate_finite(value)?;
    if value < 0.0 {
        return Err("Nutrient level cannot be negative");
    }
    Ok(())
}

pub fn validate_crop_code(code: i32) -> Result<(), &'static str> {
    CropType::from_code(code)
        .map(|_| ())
        .ok_or("Unknown crop type")
}

pub fn validate_soil_code(code: i32) -> Result<(), &'static str> {
    SoilType::from_code(code)
        .map(|_| ())
        .ok_or("Unknown soil type")
}

// ============================================================================
// Field Validations
// ============================================================================

/// Validate field size is a positive area
pub fn validate_field_size(size: f64) -> Result<(), &'static str> {
    validate_finite(size)?;
    if size <= 0.0 {
        return Err("Field size must be greater than zero");
    }
    Ok(())
}

pub fn validate_field_name(name: Option<&str>) -> Result<(), &'static str> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(()),
        _ => Err("Field name is required"),
    }
}

// ============================================================================
// Composite Validations
// ============================================================================

/// Validate every reading in an observation, stopping at the first bad field
pub fn validate_observation(obs: &Observation) -> Result<(), InvalidField> {
    check("temperature", validate_finite(obs.temperature))?;
    check("humidity", validate_percentage(obs.humidity))?;
    check("soil_moisture", validate_percentage(obs.soil_moisture))?;
    check("soil_type", validate_soil_code(obs.soil_type))?;
    check("crop_type", validate_crop_code(obs.crop_type))?;
    check("nitrogen", validate_nutrient(obs.nitrogen))?;
    check("phosphorus", validate_nutrient(obs.phosphorus))?;
    check("potassium", validate_nutrient(obs.potassium))?;
    Ok(())
}

/// Validate a full recommendation form
pub fn validate_field_input(input: &FieldInput) -> Result<(), InvalidField> {
    check("field_name", validate_field_name(input.field_name.as_deref()))?;
    check("field_size", validate_field_size(input.field_size))?;
    check("soil_ph", validate_soil_ph(input.soil_ph))?;
    validate_observation(&input.observation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldSizeUnit;

    fn observation() -> Observation {
        Observation {
            temperature: 24.0,
            humidity: 70.0,
            soil_moisture: 65.0,
            soil_type: 2,
            crop_type: 10,
            nitrogen: 25.0,
            phosphorus: 10.0,
            potassium: 130.0,
        }
    }

    fn field_input() -> FieldInput {
        FieldInput {
            field_name: Some("North Field".to_string()),
            field_size: 2.0,
            size_unit: FieldSizeUnit::Hectares,
            soil_ph: 6.8,
            observation: observation(),
        }
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(validate_percentage(0.0).is_ok());
        assert!(validate_percentage(100.0).is_ok());
        assert!(validate_percentage(-0.1).is_err());
        assert!(validate_percentage(100.1).is_err());
        assert!(validate_percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_soil_ph_bounds() {
        assert!(validate_soil_ph(0.0).is_ok());
        assert!(validate_soil_ph(14.0).is_ok());
        assert!(validate_soil_ph(14.5).is_err());
        assert!(validate_soil_ph(f64::INFINITY).is_err());
    }

    #[test]
    fn test_codes() {
        assert!(validate_crop_code(0).is_ok());
        assert!(validate_crop_code(16).is_ok());
        assert!(validate_crop_code(17).is_err());
        assert!(validate_soil_code(4).is_ok());
        assert!(validate_soil_code(-1).is_err());
    }

    #[test]
    fn test_field_size_and_name() {
        assert!(validate_field_size(0.5).is_ok());
        assert!(validate_field_size(0.0).is_err());
        assert!(validate_field_name(Some("Plot A")).is_ok());
        assert!(validate_field_name(Some("   ")).is_err());
        assert!(validate_field_name(None).is_err());
    }

    #[test]
    fn test_valid_observation_and_form() {
        assert!(validate_observation(&observation()).is_ok());
        assert!(validate_field_input(&field_input()).is_ok());
    }

    #[test]
    fn test_first_bad_field_reported() {
        let mut obs = observation();
        obs.humidity = 120.0;
        obs.crop_type = 40;
        let err = validate_observation(&obs).unwrap_err();
        assert_eq!(err.field, "humidity");
        assert_eq!(err.to_string(), "humidity: Percentage must be between 0 and 100");
    }

    #[test]
    fn test_form_rejects_missing_name_and_bad_ph() {
        let mut input = field_input();
        input.field_name = None;
        assert_eq!(validate_field_input(&input).unwrap_err().field, "field_name");

        let mut input = field_input();
        input.soil_ph = 15.0;
        assert_eq!(validate_field_input(&input).unwrap_err().field, "soil_ph");

        let mut input = field_input();
        input.observation.potassium = -3.0;
        assert_eq!(validate_field_input(&input).unwrap_err().field, "potassium");
    }
}
