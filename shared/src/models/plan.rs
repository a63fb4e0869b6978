//! Recommendation plan built around a classifier prediction

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::observation::FieldInput;
use super::prediction::PredictionResult;
use super::reference::{crop_name, lookup_fertilizer, soil_name};
use super::soil::{analyze_soil_condition, Nutrient, SoilConditionAnalysis};
use crate::types::{format_inr, round_half_up, Kilograms};

/// Application rates in kg per hectare
pub mod rates {
    pub const PRIMARY: f64 = 100.0;
    pub const SECONDARY_DAP: f64 = 50.0;
    pub const SECONDARY_POTASSIUM_SULFATE: f64 = 40.0;
    pub const SECONDARY_COMPOST: f64 = 1000.0;
    pub const VERMICOMPOST: f64 = 1000.0;
    pub const NEEM_CAKE: f64 = 200.0;
    pub const BONE_MEAL: f64 = 150.0;
}

/// Input costs in rupees per hectare
pub mod costs {
    pub const PRIMARY: f64 = 4000.0;
    pub const SECONDARY: f64 = 2500.0;
    pub const ORGANIC: f64 = 2000.0;
}

/// A chemical fertilizer line in the plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FertilizerApplication {
    pub name: String,
    pub amount: Kilograms,
    pub reason: String,
    pub application_method: String,
}

/// An organic amendment suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganicOption {
    pub name: String,
    pub amount: Kilograms,
    pub benefits: String,
    pub application_timing: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationTiming {
    pub primary: String,
    pub secondary: String,
    pub organic: String,
}

/// Projected input cost for the field, formatted in rupees
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostEstimate {
    pub primary: String,
    pub secondary: String,
    pub organic: String,
    pub total: String,
    pub total_amount: Decimal,
}

/// Full fertilizer plan for one field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationPlan {
    pub primary_fertilizer: FertilizerApplication,
    pub secondary_fertilizer: FertilizerApplication,
    pub organic_options: Vec<OrganicOption>,
    pub application_timing: ApplicationTiming,
    pub cost_estimate: CostEstimate,
    pub soil_condition_analysis: SoilConditionAnalysis,
    pub ml_prediction: PredictionResult,
}

/// Expand a prediction into a complete plan for the field
pub fn build_plan(input: &FieldInput, prediction: PredictionResult) -> RecommendationPlan {
    let hectares = input.hectares();
    let obs = &input.observation;

    let soil_condition_analysis = analyze_soil_condition(
        input.soil_ph,
        obs.soil_moisture,
        obs.nitrogen,
        obs.phosphorus,
        obs.potassium,
    );

    RecommendationPlan {
        primary_fertilizer: primary_fertilizer(input, &prediction.fertilizer, hectares),
        secondary_fertilizer: secondary_fertilizer(
            &soil_condition_analysis.nutrient_deficiency,
            hectares,
        ),
        organic_options: organic_options(hectares),
        application_timing: ApplicationTiming {
            primary: "Apply 1-2 weeks before planting for optimal nutrient availability"
                .to_string(),
            secondary: "Apply during active growth phase or as recommended for specific fertilizer"
                .to_string(),
            organic: "Apply 3-4 weeks before planting to allow decomposition".to_string(),
        },
        cost_estimate: cost_estimate(hectares),
        soil_condition_analysis,
        ml_prediction: prediction,
    }
}

fn primary_fertilizer(input: &FieldInput, name: &str, hectares: f64) -> FertilizerApplication {
    let amount = Kilograms::per_hectare(rates::PRIMARY, hectares);

    match lookup_fertilizer(name) {
        Some(record) => FertilizerApplication {
            name: name.to_string(),
            amount,
            reason: record.description.to_string(),
            application_method: record.application.to_string(),
        },
        None => {
            let crop = crop_name(input.observation.crop_type).unwrap_or("Unknown");
            let soil = soil_name(input.observation.soil_type).unwrap_or("Unknown");
            FertilizerApplication {
                name: name.to_string(),
                amount,
                reason: format!(
                    "ML model recommends this fertilizer for {} in {} soil",
                    crop, soil
                ),
                application_method: "Apply as per standard agricultural practices".to_string(),
            }
        }
    }
}

/// Phosphorus deficiency takes precedence over potassium
fn secondary_fertilizer(deficiencies: &[Nutrient], hectares: f64) -> FertilizerApplication {
    if deficiencies.contains(&Nutrient::Phosphorus) {
        FertilizerApplication {
            name: "DAP".to_string(),
            amount: Kilograms::per_hectare(rates::SECONDARY_DAP, hectares),
            reason: "Addresses phosphorus deficiency identified in soil analysis".to_string(),
            application_method: "Apply as basal dose during soil preparation".to_string(),
        }
    } else if deficiencies.contains(&Nutrient::Potassium) {
        FertilizerApplication {
            name: "Potassium sulfate".to_string(),
            amount: Kilograms::per_hectare(rates::SECONDARY_POTASSIUM_SULFATE, hectares),
            reason: "Addresses potassium deficiency for better fruit quality".to_string(),
            application_method: "Apply during fruit development stage".to_string(),
        }
    } else {
        FertilizerApplication {
            name: "Organic Compost".to_string(),
            amount: Kilograms::per_hectare(rates::SECONDARY_COMPOST, hectares),
            reason: "Improves soil structure and provides slow-release nutrients".to_string(),
            application_method: "Apply 2-3 weeks before planting and incorporate into soil"
                .to_string(),
        }
    }
}

fn organic_options(hectares: f64) -> Vec<OrganicOption> {
    vec![
        OrganicOption {
            name: "Vermicompost".to_string(),
            amount: Kilograms::per_hectare(rates::VERMICOMPOST, hectares),
            benefits: "Rich in nutrients, improves soil structure and water retention".to_string(),
            application_timing: "Apply 3-4 weeks before planting".to_string(),
        },
        OrganicOption {
            name: "Neem Cake".to_string(),
            amount: Kilograms::per_hectare(rates::NEEM_CAKE, hectares),
            benefits: "Natural pest deterrent and slow-release nitrogen source".to_string(),
            application_timing: "Apply at the time of land preparation".to_string(),
        },
        OrganicOption {
            name: "Bone Meal".to_string(),
            amount: Kilograms::per_hectare(rates::BONE_MEAL, hectares),
            benefits: "Excellent source of phosphorus and calcium".to_string(),
            application_timing: "Apply as basal dose before sowing".to_string(),
        },
    ]
}

fn cost_estimate(hectares: f64) -> CostEstimate {
    let line = |per_hectare: f64| Decimal::from(round_half_up(hectares * per_hectare) as i64);

    let primary = line(costs::PRIMARY);
    let secondary = line(costs::SECONDARY);
    let organic = line(costs::ORGANIC);
    let total = primary + secondary + organic;

    CostEstimate {
        primary: format_inr(primary),
        secondary: format_inr(secondary),
        organic: format_inr(organic),
        total: format_inr(total),
        total_amount: total,
    }
}
