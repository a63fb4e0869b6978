//! Soil health integration tests
//!
//! Tests for sensor reading assessment including:
//! - Health score tiers
//! - Parameter status bands

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use shared::models::{
    assess_reading, parameter_status, soil_health_score, ParameterStatus, SensorReading,
};

fn timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-06-01T06:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn reading(n: f64, p: f64, k: f64, moisture: f64, ph: f64) -> SensorReading {
    SensorReading {
        nitrogen: n,
        phosphorus: p,
        potassium: k,
        soil_moisture: moisture,
        soil_ph: ph,
        temperature: 24.0,
        humidity: 70.0,
        timestamp: timestamp(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_demo_reading_is_healthy() {
        let assessment = assess_reading(&SensorReading::demo(timestamp()));
        assert_eq!(assessment.health_score, 100);
        assert_eq!(assessment.statuses.nitrogen, ParameterStatus::Optimal);
        assert_eq!(assessment.statuses.potassium, ParameterStatus::Optimal);
        assert_eq!(assessment.statuses.humidity, ParameterStatus::Optimal);
    }

    /// Second tier in every parameter
    #[test]
    fn test_middle_tier_score() {
        assert_eq!(soil_health_score(&reading(25.0, 12.0, 110.0, 85.0, 5.7)), 75);
    }

    /// Worst tier in every parameter
    #[test]
    fn test_lowest_tier_score() {
        assert_eq!(soil_health_score(&reading(5.0, 2.0, 50.0, 10.0, 4.5)), 25);
    }

    /// Status bands around a 30-60 optimal range
    #[test]
    fn test_parameter_status_bands() {
        assert_eq!(parameter_status(30.0, 30.0, 60.0), ParameterStatus::Optimal);
        assert_eq!(parameter_status(60.0, 30.0, 60.0), ParameterStatus::Optimal);
        assert_eq!(parameter_status(25.0, 30.0, 60.0), ParameterStatus::Warning);
        assert_eq!(parameter_status(23.9, 30.0, 60.0), ParameterStatus::Critical);
        assert_eq!(parameter_status(70.0, 30.0, 60.0), ParameterStatus::Warning);
        assert_eq!(parameter_status(72.1, 30.0, 60.0), ParameterStatus::Critical);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Scores are sums of 5, 15 or 20 point tiers over five parameters
        #[test]
        fn prop_score_in_tier_range(
            n in 0.0..120.0f64,
            p in 0.0..60.0f64,
            k in 0.0..300.0f64,
            moisture in 0.0..=100.0f64,
            ph in 3.0..10.0f64
        ) {
            let score = soil_health_score(&reading(n, p, k, moisture, ph));
            prop_assert!((25..=100).contains(&score));
            prop_assert_eq!(score % 5, 0);
        }

        /// Values inside the optimal range are always optimal
        #[test]
        fn prop_inside_range_is_optimal(min in 1.0..100.0f64, width in 0.0..100.0f64, t in 0.0..=1.0f64) {
            let max = min + width;
            let value = min + t * width;
            prop_assert_eq!(parameter_status(value, min, max), ParameterStatus::Optimal);
        }
    }
}
