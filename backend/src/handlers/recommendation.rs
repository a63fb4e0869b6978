//! Recommendation plan and history handlers

use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::models::{
    build_plan, classify, FieldInput, RecommendationRequest, RecommendationResponse,
};
use crate::services::recommendation::{
    clamp_limit, RecommendationRecord, RecommendationService, RecommendationStatus,
};
use crate::AppState;

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub user_id: Uuid,
    pub limit: Option<i64>,
    pub format: Option<String>, // "json" or "csv"
}

#[derive(Deserialize)]
pub struct UpdateStatusInput {
    pub user_id: Uuid,
    pub status: RecommendationStatus,
}

/// Generate a full fertilizer plan for a field and record it in history
pub async fn create_recommendation(
    State(state): State<AppState>,
    Json(input): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    input.validate()?;
    let field = FieldInput::from(&input);
    shared::validate_field_input(&field)?;

    let latency = state.config.engine.simulated_latency_ms;
    if latency > 0 {
        tokio::time::sleep(Duration::from_millis(latency)).await;
    }

    let prediction = classify(&field.observation);
    let plan = build_plan(&field, prediction);

    tracing::info!(
        field = %input.field_name,
        fertilizer = %plan.primary_fertilizer.name,
        confidence = plan.ml_prediction.confidence,
        "Recommendation generated"
    );

    // History is best effort; the plan is returned either way
    let history_id = match input.user_id {
        Some(user_id) => {
            let record = RecommendationRecord::from_plan(Some(user_id), &field, &plan);
            let service = RecommendationService::new(state.db.clone());
            match service.create(&record).await {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!(%user_id, "Recommendation generated but not saved to history: {}", e);
                    None
                }
            }
        }
        None => None,
    };

    Ok(Json(RecommendationResponse {
        plan,
        history_saved: history_id.is_some(),
        history_id,
    }))
}

/// Recent recommendations for a user as JSON or CSV
pub async fn list_recommendations(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<impl IntoResponse> {
    let service = RecommendationService::new(state.db.clone());
    let records = service
        .list_recent(query.user_id, clamp_limit(query.limit))
        .await?;

    if query.format.as_deref() == Some("csv") {
        let csv = RecommendationService::export_to_csv(&records)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"fertilizer_recommendations.csv\"",
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(records).into_response())
    }
}

/// Mark a stored recommendation as scheduled or applied
pub async fn update_recommendation_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateStatusInput>,
) -> AppResult<Json<RecommendationRecord>> {
    let service = RecommendationService::new(state.db.clone());
    let record = service.update_status(id, input.user_id, input.status).await?;
    Ok(Json(record))
}
