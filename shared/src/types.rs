//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Area unit of a field as entered by the farmer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FieldSizeUnit {
    #[default]
    Hectares,
    Acres,
    Bigha,
}

impl FieldSizeUnit {
    /// Hectares per unit
    pub fn hectare_factor(&self) -> f64 {
        match self {
            FieldSizeUnit::Hectares => 1.0,
            FieldSizeUnit::Acres => 0.404686,
            FieldSizeUnit::Bigha => 0.1338,
        }
    }

    pub fn to_hectares(&self, size: f64) -> f64 {
        match self {
            FieldSizeUnit::Hectares => size,
            _ => size * self.hectare_factor(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSizeUnit::Hectares => "hectares",
            FieldSizeUnit::Acres => "acres",
            FieldSizeUnit::Bigha => "bigha",
        }
    }
}

/// Unknown units are treated as hectares
impl From<&str> for FieldSizeUnit {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "acres" | "acre" => FieldSizeUnit::Acres,
            "bigha" => FieldSizeUnit::Bigha,
            _ => FieldSizeUnit::Hectares,
        }
    }
}

impl From<String> for FieldSizeUnit {
    fn from(s: String) -> Self {
        FieldSizeUnit::from(s.as_str())
    }
}

impl std::fmt::Display for FieldSizeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round half toward positive infinity, like JavaScript's `Math.round`
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// A rounded mass in kilograms
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Kilograms(pub u64);

impl Kilograms {
    /// Scale a per-hectare rate to a field, rounding to whole kilograms
    pub fn per_hectare(rate: f64, hectares: f64) -> Self {
        Kilograms(round_half_up(rate * hectares).max(0.0) as u64)
    }
}

impl std::fmt::Display for Kilograms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kg", self.0)
    }
}

/// Format a rupee amount with Indian digit grouping, e.g. `₹1,23,456`
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_factors() {
        assert_eq!(FieldSizeUnit::Hectares.to_hectares(2.5), 2.5);
        assert!((FieldSizeUnit::Acres.to_hectares(1.0) - 0.404686).abs() < 1e-12);
        assert!((FieldSizeUnit::Bigha.to_hectares(1.0) - 0.1338).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_unit_is_hectares() {
        assert_eq!(FieldSizeUnit::from("rai"), FieldSizeUnit::Hectares);
        assert_eq!(FieldSizeUnit::from("Acres"), FieldSizeUnit::Acres);
        let unit: FieldSizeUnit = serde_json::from_str("\"furlongs\"").unwrap();
        assert_eq!(unit, FieldSizeUnit::Hectares);
        assert_eq!(serde_json::to_string(&FieldSizeUnit::Bigha).unwrap(), "\"bigha\"");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn test_kilograms() {
        assert_eq!(Kilograms::per_hectare(100.0, 2.0), Kilograms(200));
        assert_eq!(Kilograms::per_hectare(50.0, 0.404686), Kilograms(20));
        assert_eq!(Kilograms(135).to_string(), "135 kg");
    }

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(Decimal::from(0)), "₹0");
        assert_eq!(format_inr(Decimal::from(999)), "₹999");
        assert_eq!(format_inr(Decimal::from(1000)), "₹1,000");
        assert_eq!(format_inr(Decimal::from(17000)), "₹17,000");
        assert_eq!(format_inr(Decimal::from(123456)), "₹1,23,456");
        assert_eq!(format_inr(Decimal::from(12345678)), "₹1,23,45,678");
        assert_eq!(format_inr(Decimal::from(-4500)), "-₹4,500");
    }
}
