//! Field sensor handlers

use axum::{extract::State, Json};

use crate::models::{assess_reading, SensorSnapshot};
use crate::AppState;

/// Latest station reading, falling back to the demo reading when the feed is down
pub async fn get_latest_reading(State(state): State<AppState>) -> Json<SensorSnapshot> {
    let (reading, source) = state.sensor_feed.latest_or_demo().await;
    let assessment = assess_reading(&reading);

    Json(SensorSnapshot {
        reading,
        assessment,
        source,
    })
}
