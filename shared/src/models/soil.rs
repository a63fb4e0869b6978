//! Soil condition diagnostics and sensor health scoring

use serde::{Deserialize, Serialize};

use super::observation::SensorReading;

/// Nitrogen level (mg/kg) below which a field is treated as deficient
pub const NITROGEN_DEFICIENCY_THRESHOLD: f64 = 30.0;
/// Phosphorus level (mg/kg) below which a field is treated as deficient
pub const PHOSPHORUS_DEFICIENCY_THRESHOLD: f64 = 15.0;
/// Potassium level (mg/kg) below which a field is treated as deficient
pub const POTASSIUM_DEFICIENCY_THRESHOLD: f64 = 120.0;

/// Soil pH classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PhStatus {
    Acidic,
    Optimal,
    Alkaline,
}

impl PhStatus {
    pub fn from_ph(ph: f64) -> Self {
        if ph < 6.0 {
            PhStatus::Acidic
        } else if ph > 7.5 {
            PhStatus::Alkaline
        } else {
            PhStatus::Optimal
        }
    }
}

/// Soil moisture classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MoistureStatus {
    Low,
    Optimal,
    High,
}

impl MoistureStatus {
    pub fn from_moisture(moisture: f64) -> Self {
        if moisture < 40.0 {
            MoistureStatus::Low
        } else if moisture > 80.0 {
            MoistureStatus::High
        } else {
            MoistureStatus::Optimal
        }
    }
}

/// Primary macronutrients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nutrient::Nitrogen => write!(f, "Nitrogen"),
            Nutrient::Phosphorus => write!(f, "Phosphorus"),
            Nutrient::Potassium => write!(f, "Potassium"),
        }
    }
}

/// Deficient nutrients, always in N, P, K order
pub fn nutrient_deficiencies(nitrogen: f64, phosphorus: f64, potassium: f64) -> Vec<Nutrient> {
    let mut deficient = Vec::with_capacity(3);
    if nitrogen < NITROGEN_DEFICIENCY_THRESHOLD {
        deficient.push(Nutrient::Nitrogen);
    }
    if phosphorus < PHOSPHORUS_DEFICIENCY_THRESHOLD {
        deficient.push(Nutrient::Phosphorus);
    }
    if potassium < POTASSIUM_DEFICIENCY_THRESHOLD {
        deficient.push(Nutrient::Potassium);
    }
    deficient
}

/// Soil diagnostics attached to every recommendation plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilConditionAnalysis {
    pub ph_status: PhStatus,
    pub moisture_status: MoistureStatus,
    pub nutrient_deficiency: Vec<Nutrient>,
    pub recommendations: Vec<String>,
}

/// Diagnose pH, moisture and nutrient levels and produce farmer advice
pub fn analyze_soil_condition(
    soil_ph: f64,
    soil_moisture: f64,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
) -> SoilConditionAnalysis {
    let ph_status = PhStatus::from_ph(soil_ph);
    let moisture_status = MoistureStatus::from_moisture(soil_moisture);
    let nutrient_deficiency = nutrient_deficiencies(nitrogen, phosphorus, potassium);

    let ph_advice = match ph_status {
        PhStatus::Acidic => "Adjust soil pH using lime".to_string(),
        PhStatus::Alkaline => "Adjust soil pH using sulfur".to_string(),
        PhStatus::Optimal => "Maintain current pH levels".to_string(),
    };

    let moisture_advice = match moisture_status {
        MoistureStatus::Low => "Increase irrigation frequency",
        MoistureStatus::High => "Improve drainage",
        MoistureStatus::Optimal => "Maintain current moisture levels",
    };

    let nutrient_advice = if nutrient_deficiency.is_empty() {
        "Nutrient levels are adequate".to_string()
    } else {
        let names: Vec<String> = nutrient_deficiency.iter().map(|n| n.to_string()).collect();
        format!("Address {} deficiency", names.join(", "))
    };

    SoilConditionAnalysis {
        ph_status,
        moisture_status,
        nutrient_deficiency,
        recommendations: vec![
            ph_advice,
            moisture_advice.to_string(),
            nutrient_advice,
            "Regular soil testing every 6 months is recommended".to_string(),
            "Consider crop rotation to maintain soil health".to_string(),
        ],
    }
}

// ============================================================================
// Sensor reading health
// ============================================================================

/// Status of a single reading against its optimal band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParameterStatus {
    Optimal,
    Warning,
    Critical,
}

/// Optimal when inside `[min, max]`, critical when more than 20% outside it
pub fn parameter_status(value: f64, min: f64, max: f64) -> ParameterStatus {
    if value >= min && value <= max {
        ParameterStatus::Optimal
    } else if value < min * 0.8 || value > max * 1.2 {
        ParameterStatus::Critical
    } else {
        ParameterStatus::Warning
    }
}

/// Optimal bands used on the live soil dashboard
pub mod optimal_range {
    pub const NITROGEN: (f64, f64) = (30.0, 60.0);
    pub const PHOSPHORUS: (f64, f64) = (15.0, 35.0);
    pub const POTASSIUM: (f64, f64) = (120.0, 180.0);
    pub const SOIL_PH: (f64, f64) = (6.0, 7.5);
    pub const SOIL_MOISTURE: (f64, f64) = (40.0, 80.0);
    pub const TEMPERATURE: (f64, f64) = (15.0, 35.0);
    pub const HUMIDITY: (f64, f64) = (50.0, 80.0);
}

/// Overall soil health in percent (0-100)
pub fn soil_health_score(reading: &SensorReading) -> u8 {
    let ph = if (6.0..=7.5).contains(&reading.soil_ph) {
        20
    } else if (5.5..=8.0).contains(&reading.soil_ph) {
        15
    } else {
        5
    };

    let nitrogen = tiered(reading.nitrogen, 40.0, 20.0);
    let phosphorus = tiered(reading.phosphorus, 20.0, 10.0);
    let potassium = tiered(reading.potassium, 150.0, 100.0);

    let moisture = if (60.0..=80.0).contains(&reading.soil_moisture) {
        20
    } else if (40.0..=90.0).contains(&reading.soil_moisture) {
        15
    } else {
        5
    };

    (ph + nitrogen + phosphorus + potassium + moisture).min(100)
}

fn tiered(value: f64, good: f64, fair: f64) -> u8 {
    if value >= good {
        20
    } else if value >= fair {
        15
    } else {
        5
    }
}

/// Per-parameter statuses for a sensor reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterStatuses {
    pub nitrogen: ParameterStatus,
    pub phosphorus: ParameterStatus,
    pub potassium: ParameterStatus,
    pub soil_ph: ParameterStatus,
    pub soil_moisture: ParameterStatus,
    pub temperature: ParameterStatus,
    pub humidity: ParameterStatus,
}

/// Health score plus per-parameter status for a sensor reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilHealthAssessment {
    pub health_score: u8,
    pub statuses: ParameterStatuses,
}

pub fn assess_reading(reading: &SensorReading) -> SoilHealthAssessment {
    use optimal_range as r;
    let status = |value: f64, range: (f64, f64)| parameter_status(value, range.0, range.1);

    SoilHealthAssessment {
        health_score: soil_health_score(reading),
        statuses: ParameterStatuses {
            nitrogen: status(reading.nitrogen, r::NITROGEN),
            phosphorus: status(reading.phosphorus, r::PHOSPHORUS),
            potassium: status(reading.potassium, r::POTASSIUM),
            soil_ph: status(reading.soil_ph, r::SOIL_PH),
            soil_moisture: status(reading.soil_moisture, r::SOIL_MOISTURE),
            temperature: status(reading.temperature, r::TEMPERATURE),
            humidity: status(reading.humidity, r::HUMIDITY),
        },
    }
}
