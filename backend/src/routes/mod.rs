//! Route definitions for the fertilizer advisor API

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/reference", reference_routes())
        .route("/predict", post(handlers::predict))
        .nest("/recommendations", recommendation_routes())
        .route("/sensors/latest", get(handlers::get_latest_reading))
}

/// Static crop, soil and fertilizer tables
fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/crops", get(handlers::list_crops))
        .route("/soils", get(handlers::list_soils))
        .route("/fertilizers", get(handlers::get_fertilizers))
        .route("/fertilizers/:name", get(handlers::get_fertilizer))
}

fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_recommendations).post(handlers::create_recommendation),
        )
        .route("/:id/status", patch(handlers::update_recommendation_status))
}
