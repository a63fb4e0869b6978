//! Recommendation history service
//!
//! Stores a flattened summary of every generated plan so farmers can review
//! what was recommended for each field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{FieldInput, RecommendationPlan};

/// Default number of rows returned by history queries
pub const DEFAULT_HISTORY_LIMIT: i64 = 5;
/// Upper bound on rows returned by a single history query
pub const MAX_HISTORY_LIMIT: i64 = 100;

/// Recommendation history service
#[derive(Clone)]
pub struct RecommendationService {
    db: PgPool,
}

/// Lifecycle of a stored recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    Pending,
    Scheduled,
    Applied,
}

impl RecommendationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationStatus::Pending => "pending",
            RecommendationStatus::Scheduled => "scheduled",
            RecommendationStatus::Applied => "applied",
        }
    }
}

/// Stored history row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RecommendationRecord {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub field_name: String,
    pub field_size: f64,
    pub field_size_unit: String,
    pub crop_type: i32,
    pub soil_type: i32,
    pub soil_ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub primary_fertilizer: String,
    pub secondary_fertilizer: String,
    pub ml_prediction: String,
    pub confidence_score: i32,
    pub cost_estimate: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl RecommendationRecord {
    /// Flatten a generated plan into a new pending history row
    pub fn from_plan(
        user_id: Option<Uuid>,
        input: &FieldInput,
        plan: &RecommendationPlan,
    ) -> Self {
        let obs = &input.observation;
        Self {
            id: Uuid::new_v4(),
            user_id,
            field_name: input.field_name.clone().unwrap_or_default(),
            field_size: input.field_size,
            field_size_unit: input.size_unit.as_str().to_string(),
            crop_type: obs.crop_type,
            soil_type: obs.soil_type,
            soil_ph: input.soil_ph,
            nitrogen: obs.nitrogen,
            phosphorus: obs.phosphorus,
            potassium: obs.potassium,
            temperature: obs.temperature,
            humidity: obs.humidity,
            soil_moisture: obs.soil_moisture,
            primary_fertilizer: plan.primary_fertilizer.name.clone(),
            secondary_fertilizer: plan.secondary_fertilizer.name.clone(),
            ml_prediction: plan.ml_prediction.fertilizer.clone(),
            confidence_score: i32::from(plan.ml_prediction.confidence),
            cost_estimate: plan.cost_estimate.total.clone(),
            status: RecommendationStatus::Pending.as_str().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Clamp a requested page size into the supported range
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT)
}

impl RecommendationService {
    /// Create a new RecommendationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Persist a history row
    pub async fn create(&self, record: &RecommendationRecord) -> AppResult<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO fertilizer_recommendations (
                id, user_id, field_name, field_size, field_size_unit,
                crop_type, soil_type, soil_ph, nitrogen, phosphorus, potassium,
                temperature, humidity, soil_moisture,
                primary_fertilizer, secondary_fertilizer, ml_prediction,
                confidence_score, cost_estimate, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                    $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
            RETURNING id
            "#,
        )
        .bind(record.id)
        .bind(record.user_id)
        .bind(&record.field_name)
        .bind(record.field_size)
        .bind(&record.field_size_unit)
        .bind(record.crop_type)
        .bind(record.soil_type)
        .bind(record.soil_ph)
        .bind(record.nitrogen)
        .bind(record.phosphorus)
        .bind(record.potassium)
        .bind(record.temperature)
        .bind(record.humidity)
        .bind(record.soil_moisture)
        .bind(&record.primary_fertilizer)
        .bind(&record.secondary_fertilizer)
        .bind(&record.ml_prediction)
        .bind(record.confidence_score)
        .bind(&record.cost_estimate)
        .bind(&record.status)
        .bind(record.created_at)
        .fetch_one(&self.db)
        .await?;

        Ok(id)
    }

    /// Most recent recommendations for a user, newest first
    pub async fn list_recent(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<RecommendationRecord>> {
        let records = sqlx::query_as::<_, RecommendationRecord>(
            r#"
            SELECT id, user_id, field_name, field_size, field_size_unit,
                   crop_type, soil_type, soil_ph, nitrogen, phosphorus, potassium,
                   temperature, humidity, soil_moisture,
                   primary_fertilizer, secondary_fertilizer, ml_prediction,
                   confidence_score, cost_estimate, status, created_at
            FROM fertilizer_recommendations
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    /// Move a stored recommendation to a new status
    pub async fn update_status(
        &self,
        id: Uuid,
        user_id: Uuid,
        status: RecommendationStatus,
    ) -> AppResult<RecommendationRecord> {
        let record = sqlx::query_as::<_, RecommendationRecord>(
            r#"
            UPDATE fertilizer_recommendations
            SET status = $3
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, field_name, field_size, field_size_unit,
                      crop_type, soil_type, soil_ph, nitrogen, phosphorus, potassium,
                      temperature, humidity, soil_moisture,
                      primary_fertilizer, secondary_fertilizer, ml_prediction,
                      confidence_score, cost_estimate, status, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(status.as_str())
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Recommendation".to_string()))?;

        Ok(record)
    }

    /// Export history rows as CSV
    pub fn export_to_csv(records: &[RecommendationRecord]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in records {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{build_plan, classify, Observation};
    use shared::types::FieldSizeUnit;

    fn wheat_field() -> FieldInput {
        FieldInput {
            field_name: Some("North Field".to_string()),
            field_size: 2.0,
            size_unit: FieldSizeUnit::Acres,
            soil_ph: 6.8,
            observation: Observation {
                temperature: 24.0,
                humidity: 70.0,
                soil_moisture: 65.0,
                soil_type: 2,
                crop_type: 10,
                nitrogen: 25.0,
                phosphorus: 10.0,
                potassium: 130.0,
            },
        }
    }

    #[test]
    fn test_record_from_plan() {
        let input = wheat_field();
        let plan = build_plan(&input, classify(&input.observation));
        let user = Uuid::new_v4();
        let record = RecommendationRecord::from_plan(Some(user), &input, &plan);

        assert_eq!(record.user_id, Some(user));
        assert_eq!(record.field_size_unit, "acres");
        assert_eq!(record.primary_fertilizer, "DAP");
        assert_eq!(record.secondary_fertilizer, "DAP");
        assert_eq!(record.ml_prediction, "DAP");
        assert_eq!(record.confidence_score, 94);
        assert_eq!(record.cost_estimate, plan.cost_estimate.total);
        assert_eq!(record.status, "pending");
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(None), 5);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(20)), 20);
        assert_eq!(clamp_limit(Some(10_000)), 100);
    }

    #[test]
    fn test_status_wire_names() {
        let status: RecommendationStatus = serde_json::from_str("\"scheduled\"").unwrap();
        assert_eq!(status, RecommendationStatus::Scheduled);
        assert_eq!(RecommendationStatus::Applied.as_str(), "applied");
        assert!(serde_json::from_str::<RecommendationStatus>("\"archived\"").is_err());
    }

    #[test]
    fn test_export_to_csv() {
        let input = wheat_field();
        let plan = build_plan(&input, classify(&input.observation));
        let record = RecommendationRecord::from_plan(None, &input, &plan);

        let csv = RecommendationService::export_to_csv(&[record]).unwrap();
        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("id,user_id,field_name,field_size,field_size_unit"));
        assert!(header.ends_with("cost_estimate,status,created_at"));
        let row = lines.next().unwrap();
        assert!(row.contains("North Field"));
        assert!(row.contains(",DAP,DAP,DAP,94,"));
        assert!(lines.next().is_none());
    }
}
