//! API models for the fertilizer advisor
//!
//! Re-exports the engine models from the shared crate and adds the request
//! and response shapes the HTTP layer needs

pub use shared::models::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use shared::types::FieldSizeUnit;

/// Raw classifier input as posted by a client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PredictRequest {
    pub temperature: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Humidity must be between 0 and 100"))]
    pub humidity: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Soil moisture must be between 0 and 100"))]
    pub soil_moisture: f64,
    pub soil_type: i32,
    pub crop_type: i32,
    #[validate(range(min = 0.0, message = "Nitrogen cannot be negative"))]
    pub nitrogen: f64,
    #[validate(range(min = 0.0, message = "Phosphorus cannot be negative"))]
    pub phosphorus: f64,
    #[validate(range(min = 0.0, message = "Potassium cannot be negative"))]
    pub potassium: f64,
}

impl From<&PredictRequest> for Observation {
    fn from(req: &PredictRequest) -> Self {
        Observation {
            temperature: req.temperature,
            humidity: req.humidity,
            soil_moisture: req.soil_moisture,
            soil_type: req.soil_type,
            crop_type: req.crop_type,
            nitrogen: req.nitrogen,
            phosphorus: req.phosphorus,
            potassium: req.potassium,
        }
    }
}

/// Recommendation form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecommendationRequest {
    /// Caller identity, when the client has one
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[validate(length(min = 1, max = 200, message = "Field name is required"))]
    pub field_name: String,
    #[validate(range(min = 0.0001, message = "Field size must be greater than zero"))]
    pub field_size: f64,
    #[serde(default)]
    pub size_unit: FieldSizeUnit,
    #[validate(range(min = 0.0, max = 14.0, message = "Soil pH must be between 0 and 14"))]
    pub soil_ph: f64,
    #[serde(flatten)]
    #[validate]
    pub readings: PredictRequest,
}

impl From<&RecommendationRequest> for FieldInput {
    fn from(req: &RecommendationRequest) -> Self {
        FieldInput {
            field_name: Some(req.field_name.clone()),
            field_size: req.field_size,
            size_unit: req.size_unit,
            soil_ph: req.soil_ph,
            observation: Observation::from(&req.readings),
        }
    }
}

/// Plan returned to the client together with the history outcome
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    #[serde(flatten)]
    pub plan: RecommendationPlan,
    /// Id of the stored history row, if persistence succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_id: Option<Uuid>,
    pub history_saved: bool,
}

/// Where a sensor reading came from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReadingSource {
    Live,
    Demo,
}

/// Latest field station reading with its health assessment
#[derive(Debug, Serialize)]
pub struct SensorSnapshot {
    pub reading: SensorReading,
    pub assessment: SoilHealthAssessment,
    pub source: ReadingSource,
}
