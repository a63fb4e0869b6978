//! WebAssembly module for the fertilizer advisor
//!
//! Provides client-side computation for:
//! - Fertilizer classification
//! - Full recommendation plans from the field form
//! - Soil health scoring for sensor readings
//! - Form option lists and unit conversion

use rust_decimal::Decimal;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Error payload handed back to JavaScript as a JSON string
#[derive(Debug, Serialize, PartialEq)]
struct FormError {
    field: Option<String>,
    message: String,
}

impl FormError {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }
}

impl From<InvalidField> for FormError {
    fn from(err: InvalidField) -> Self {
        Self {
            field: Some(err.field.to_string()),
            message: err.message.to_string(),
        }
    }
}

fn to_js_error(err: FormError) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&err.message));
    JsValue::from_str(&err.to_json())
}

/// Classify readings into a fertilizer; returns `{"fertilizer", "confidence"}` JSON
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn classify_fertilizer(
    temperature: f64,
    humidity: f64,
    soil_moisture: f64,
    soil_type: i32,
    crop_type: i32,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
) -> String {
    let prediction = classify(&Observation {
        temperature,
        humidity,
        soil_moisture,
        soil_type,
        crop_type,
        nitrogen,
        phosphorus,
        potassium,
    });
    serde_json::to_string(&prediction).unwrap_or_default()
}

fn plan_from_form(form_json: &str) -> Result<String, FormError> {
    let input: FieldInput = serde_json::from_str(form_json).map_err(|e| FormError {
        field: None,
        message: format!("Invalid form JSON: {}", e),
    })?;
    validate_field_input(&input)?;

    let plan = build_plan(&input, classify(&input.observation));
    serde_json::to_string(&plan).map_err(|e| FormError {
        field: None,
        message: format!("Failed to serialize plan: {}", e),
    })
}

/// Build a full recommendation plan from the field form JSON
#[wasm_bindgen]
pub fn build_recommendation_plan(form_json: &str) -> Result<String, JsValue> {
    plan_from_form(form_json).map_err(to_js_error)
}

/// Soil health score (0-100) for a set of readings
#[wasm_bindgen]
pub fn calculate_soil_health_score(
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    soil_moisture: f64,
    soil_ph: f64,
) -> u8 {
    soil_health_score(&SensorReading {
        nitrogen,
        phosphorus,
        potassium,
        soil_moisture,
        soil_ph,
        temperature: 0.0,
        humidity: 0.0,
        timestamp: chrono::DateTime::default(),
    })
}

/// Status label ("optimal", "warning", "critical") for a single reading
#[wasm_bindgen]
pub fn reading_status(value: f64, min: f64, max: f64) -> String {
    match parameter_status(value, min, max) {
        ParameterStatus::Optimal => "optimal",
        ParameterStatus::Warning => "warning",
        ParameterStatus::Critical => "critical",
    }
    .to_string()
}

/// Crop select options as `[{"name", "code"}]` JSON
#[wasm_bindgen]
pub fn crop_options() -> String {
    serde_json::to_string(list_crop_types()).unwrap_or_default()
}

/// Soil select options as `[{"name", "code"}]` JSON
#[wasm_bindgen]
pub fn soil_options() -> String {
    serde_json::to_string(list_soil_types()).unwrap_or_default()
}

/// Convert a field size to hectares; unknown units count as hectares
#[wasm_bindgen]
pub fn convert_to_hectares(size: f64, unit: &str) -> f64 {
    FieldSizeUnit::from(unit).to_hectares(size)
}

/// Format a rupee amount with Indian digit grouping
#[wasm_bindgen]
pub fn format_rupees(amount: f64) -> String {
    let decimal = Decimal::try_from(amount).unwrap_or(Decimal::ZERO);
    format_inr(decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM: &str = r#"{
        "field_name": "North Field",
        "field_size": 2.0,
        "size_unit": "hectares",
        "soil_ph": 6.8,
        "temperature": 24.0,
        "humidity": 70.0,
        "soil_moisture": 65.0,
        "soil_type": 2,
        "crop_type": 10,
        "nitrogen": 25.0,
        "phosphorus": 10.0,
        "potassium": 130.0
    }"#;

    #[test]
    fn test_classify_fertilizer_json() {
        let json = classify_fertilizer(25.0, 60.0, 50.0, 0, 12, 10.0, 10.0, 10.0);
        assert_eq!(json, r#"{"fertilizer":"15-15-15","confidence":93}"#);
    }

    #[test]
    fn test_plan_from_form() {
        let json = plan_from_form(FORM).unwrap();
        let plan: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(plan["primary_fertilizer"]["name"], "DAP");
        assert_eq!(plan["secondary_fertilizer"]["amount"], 100);
        assert_eq!(plan["cost_estimate"]["total"], "₹17,000");
    }

    #[test]
    fn test_plan_from_form_rejects_bad_ph() {
        let form = FORM.replace("6.8", "15.2");
        let err = plan_from_form(&form).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("soil_ph"));
        assert!(err.to_json().contains("\"field\":\"soil_ph\""));
    }

    #[test]
    fn test_plan_from_form_rejects_malformed_json() {
        let err = plan_from_form("{not json").unwrap_err();
        assert!(err.field.is_none());
        assert!(err.message.starts_with("Invalid form JSON"));
    }

    #[test]
    fn test_soil_health_score() {
        assert_eq!(calculate_soil_health_score(45.2, 23.8, 156.4, 68.5, 6.8), 100);
        assert_eq!(calculate_soil_health_score(5.0, 2.0, 50.0, 10.0, 4.5), 25);
    }

    #[test]
    fn test_reading_status() {
        assert_eq!(reading_status(45.0, 30.0, 60.0), "optimal");
        assert_eq!(reading_status(25.0, 30.0, 60.0), "warning");
        assert_eq!(reading_status(10.0, 30.0, 60.0), "critical");
    }

    #[test]
    fn test_options_and_units() {
        assert!(crop_options().starts_with(r#"[{"name":"Barley","code":0}"#));
        assert!(soil_options().contains(r#"{"name":"Sandy","code":4}"#));
        assert!((convert_to_hectares(10.0, "acres") - 4.04686).abs() < 1e-9);
        assert_eq!(convert_to_hectares(3.0, "rai"), 3.0);
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(123456.0), "₹1,23,456");
        assert_eq!(format_rupees(f64::NAN), "₹0");
    }
}
