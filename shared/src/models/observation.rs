//! Field observation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::FieldSizeUnit;

/// Soil, crop and environment readings used by the classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Soil moisture in %
    pub soil_moisture: f64,
    pub soil_type: i32,
    pub crop_type: i32,
    /// mg/kg
    pub nitrogen: f64,
    /// mg/kg
    pub phosphorus: f64,
    /// mg/kg
    pub potassium: f64,
}

/// Everything the plan builder needs about a field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldInput {
    #[serde(default)]
    pub field_name: Option<String>,
    pub field_size: f64,
    #[serde(default)]
    pub size_unit: FieldSizeUnit,
    pub soil_ph: f64,
    #[serde(flatten)]
    pub observation: Observation,
}

impl FieldInput {
    /// Field area converted to hectares
    pub fn hectares(&self) -> f64 {
        self.size_unit.to_hectares(self.field_size)
    }
}

/// A reading from the in-field sensor station
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub soil_moisture: f64,
    pub soil_ph: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub timestamp: DateTime<Utc>,
}

impl SensorReading {
    /// Fixed reading shown when the sensor feed is unavailable
    pub fn demo(timestamp: DateTime<Utc>) -> Self {
        Self {
            nitrogen: 45.2,
            phosphorus: 23.8,
            potassium: 156.4,
            soil_moisture: 68.5,
            soil_ph: 6.8,
            temperature: 24.3,
            humidity: 72.1,
            timestamp,
        }
    }
}
