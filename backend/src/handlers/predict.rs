//! Fertilizer prediction handler

use std::time::Duration;

use axum::{extract::State, Json};
use validator::Validate;

use crate::error::AppResult;
use crate::models::{classify, Observation, PredictRequest, PredictionResult};
use crate::AppState;

/// Classify raw readings into a fertilizer with a confidence score
pub async fn predict(
    State(state): State<AppState>,
    Json(input): Json<PredictRequest>,
) -> AppResult<Json<PredictionResult>> {
    input.validate()?;
    let observation = Observation::from(&input);
    shared::validate_observation(&observation)?;

    let latency = state.config.engine.simulated_latency_ms;
    if latency > 0 {
        tokio::time::sleep(Duration::from_millis(latency)).await;
    }

    let prediction = classify(&observation);
    tracing::debug!(
        crop_type = observation.crop_type,
        fertilizer = %prediction.fertilizer,
        confidence = prediction.confidence,
        "Prediction computed"
    );

    Ok(Json(prediction))
}
