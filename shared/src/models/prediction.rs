//! Fertilizer classifier
//!
//! A fixed decision tree keyed first on crop type, then on nutrient
//! thresholds. The environmental confidence adjustment is a separate step
//! so the tree can be exercised on its own.

use serde::{Deserialize, Serialize};

use super::observation::Observation;
use super::reference::CropType;

/// Lowest confidence ever reported
pub const MIN_CONFIDENCE: i32 = 75;
/// Highest confidence ever reported
pub const MAX_CONFIDENCE: i32 = 98;

/// Classifier output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionResult {
    pub fertilizer: String,
    /// Percentage, always within 75..=98
    pub confidence: u8,
}

/// The branch of the decision tree that fired, before adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchSelection {
    pub fertilizer: &'static str,
    pub base_confidence: i32,
}

impl BranchSelection {
    const fn new(fertilizer: &'static str, base_confidence: i32) -> Self {
        Self {
            fertilizer,
            base_confidence,
        }
    }
}

/// Pick a fertilizer and base confidence for an observation
pub fn select_branch(obs: &Observation) -> BranchSelection {
    let (n, p, k) = (obs.nitrogen, obs.phosphorus, obs.potassium);

    match CropType::from_code(obs.crop_type) {
        Some(CropType::Rice) | Some(CropType::Paddy) => {
            if n < 50.0 {
                BranchSelection::new("Urea", 92)
            } else if p < 30.0 {
                BranchSelection::new("DAP", 88)
            } else {
                BranchSelection::new("TSP", 85)
            }
        }
        Some(CropType::Wheat) => {
            if p < 20.0 {
                BranchSelection::new("DAP", 94)
            } else if n < 30.0 {
                BranchSelection::new("28-28", 89)
            } else {
                BranchSelection::new("20-20", 86)
            }
        }
        Some(CropType::Cotton) => {
            if k < 30.0 {
                BranchSelection::new("Potassium sulfate", 91)
            } else if n > 100.0 {
                BranchSelection::new("DAP", 87)
            } else {
                BranchSelection::new("14-35-14", 84)
            }
        }
        Some(CropType::Orange) | Some(CropType::Pomegranate) | Some(CropType::Watermelon) => {
            if p > 30.0 {
                BranchSelection::new("14-14-14", 90)
            } else if k < 20.0 {
                BranchSelection::new("10-26-26", 88)
            } else {
                BranchSelection::new("TSP", 85)
            }
        }
        Some(CropType::KidneyBeans) => BranchSelection::new("15-15-15", 93),
        Some(CropType::Coffee) => {
            if n > 80.0 {
                BranchSelection::new("Urea", 95)
            } else {
                BranchSelection::new("DAP", 89)
            }
        }
        // General crops, including codes outside the table
        _ => {
            if n < 20.0 && p < 20.0 && k < 20.0 {
                BranchSelection::new("17-17-17", 87)
            } else if n < 15.0 {
                BranchSelection::new("Urea", 90)
            } else if p < 15.0 {
                BranchSelection::new("DAP", 88)
            } else if k < 15.0 {
                BranchSelection::new("Potassium sulfate", 86)
            } else {
                BranchSelection::new("14-14-14", 83)
            }
        }
    }
}

/// Total penalty for out-of-range growing conditions
pub fn environmental_penalty(obs: &Observation) -> i32 {
    let mut penalty = 0;
    if obs.temperature < 15.0 || obs.temperature > 40.0 {
        penalty += 5;
    }
    if obs.humidity < 30.0 || obs.humidity > 90.0 {
        penalty += 3;
    }
    if obs.soil_moisture < 20.0 || obs.soil_moisture > 90.0 {
        penalty += 4;
    }
    penalty
}

/// Apply the environmental penalty and clamp into the reportable range
pub fn adjust_confidence(base: i32, obs: &Observation) -> u8 {
    (base - environmental_penalty(obs)).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8
}

/// Classify an observation into a fertilizer recommendation
pub fn classify(obs: &Observation) -> PredictionResult {
    let branch = select_branch(obs);
    PredictionResult {
        fertilizer: branch.fertilizer.to_string(),
        confidence: adjust_confidence(branch.base_confidence, obs),
    }
}
