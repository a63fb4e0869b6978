//! Reference data handlers for building the field form

use axum::{extract::Path, Json};

use crate::error::{AppError, AppResult};
use crate::models::{
    list_crop_types, list_fertilizers, list_soil_types, lookup_fertilizer, CodeEntry,
    FertilizerRecord,
};

/// Crop types in form order
pub async fn list_crops() -> Json<&'static [CodeEntry]> {
    Json(list_crop_types())
}

/// Soil types in form order
pub async fn list_soils() -> Json<&'static [CodeEntry]> {
    Json(list_soil_types())
}

pub async fn get_fertilizers() -> Json<&'static [FertilizerRecord]> {
    Json(list_fertilizers())
}

/// Look up a single fertilizer by its exact name
pub async fn get_fertilizer(Path(name): Path<String>) -> AppResult<Json<FertilizerRecord>> {
    lookup_fertilizer(&name)
        .copied()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Fertilizer '{}'", name)))
}
