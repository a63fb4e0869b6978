//! Crop, soil and fertilizer reference tables

use serde::Serialize;

/// A name/code pair as presented in the field form
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CodeEntry {
    pub name: &'static str,
    pub code: i32,
}

/// Crop types known to the recommendation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropType {
    Barley,
    Cotton,
    GroundNuts,
    Maize,
    Millets,
    OilSeeds,
    Paddy,
    Pulses,
    Sugarcane,
    Tobacco,
    Wheat,
    Coffee,
    KidneyBeans,
    Orange,
    Pomegranate,
    Rice,
    Watermelon,
}

impl CropType {
    pub const ALL: [CropType; 17] = [
        CropType::Barley,
        CropType::Cotton,
        CropType::GroundNuts,
        CropType::Maize,
        CropType::Millets,
        CropType::OilSeeds,
        CropType::Paddy,
        CropType::Pulses,
        CropType::Sugarcane,
        CropType::Tobacco,
        CropType::Wheat,
        CropType::Coffee,
        CropType::KidneyBeans,
        CropType::Orange,
        CropType::Pomegranate,
        CropType::Rice,
        CropType::Watermelon,
    ];

    pub fn code(&self) -> i32 {
        match self {
            CropType::Barley => 0,
            CropType::Cotton => 1,
            CropType::GroundNuts => 2,
            CropType::Maize => 3,
            CropType::Millets => 4,
            CropType::OilSeeds => 5,
            CropType::Paddy => 6,
            CropType::Pulses => 7,
            CropType::Sugarcane => 8,
            CropType::Tobacco => 9,
            CropType::Wheat => 10,
            CropType::Coffee => 11,
            CropType::KidneyBeans => 12,
            CropType::Orange => 13,
            CropType::Pomegranate => 14,
            CropType::Rice => 15,
            CropType::Watermelon => 16,
        }
    }

    /// Display name as it appears in the model's training data
    pub fn name(&self) -> &'static str {
        match self {
            CropType::Barley => "Barley",
            CropType::Cotton => "Cotton",
            CropType::GroundNuts => "Ground Nuts",
            CropType::Maize => "Maize",
            CropType::Millets => "Millets",
            CropType::OilSeeds => "Oil Seeds",
            CropType::Paddy => "Paddy",
            CropType::Pulses => "Pulses",
            CropType::Sugarcane => "Sugarcane",
            CropType::Tobacco => "Tobacco",
            CropType::Wheat => "Wheat",
            CropType::Coffee => "coffee",
            CropType::KidneyBeans => "kidneybeans",
            CropType::Orange => "orange",
            CropType::Pomegranate => "pomegranate",
            CropType::Rice => "rice",
            CropType::Watermelon => "watermelon",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }
}

/// Soil types known to the recommendation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilType {
    Black,
    Clayey,
    Loamy,
    Red,
    Sandy,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Black,
        SoilType::Clayey,
        SoilType::Loamy,
        SoilType::Red,
        SoilType::Sandy,
    ];

    pub fn code(&self) -> i32 {
        match self {
            SoilType::Black => 0,
            SoilType::Clayey => 1,
            SoilType::Loamy => 2,
            SoilType::Red => 3,
            SoilType::Sandy => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SoilType::Black => "Black",
            SoilType::Clayey => "Clayey",
            SoilType::Loamy => "Loamy",
            SoilType::Red => "Red",
            SoilType::Sandy => "Sandy",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }
}

static CROP_TYPES: [CodeEntry; 17] = [
    CodeEntry { name: "Barley", code: 0 },
    CodeEntry { name: "Cotton", code: 1 },
    CodeEntry { name: "Ground Nuts", code: 2 },
    CodeEntry { name: "Maize", code: 3 },
    CodeEntry { name: "Millets", code: 4 },
    CodeEntry { name: "Oil Seeds", code: 5 },
    CodeEntry { name: "Paddy", code: 6 },
    CodeEntry { name: "Pulses", code: 7 },
    CodeEntry { name: "Sugarcane", code: 8 },
    CodeEntry { name: "Tobacco", code: 9 },
    CodeEntry { name: "Wheat", code: 10 },
    CodeEntry { name: "coffee", code: 11 },
    CodeEntry { name: "kidneybeans", code: 12 },
    CodeEntry { name: "orange", code: 13 },
    CodeEntry { name: "pomegranate", code: 14 },
    CodeEntry { name: "rice", code: 15 },
    CodeEntry { name: "watermelon", code: 16 },
];

static SOIL_TYPES: [CodeEntry; 5] = [
    CodeEntry { name: "Black", code: 0 },
    CodeEntry { name: "Clayey", code: 1 },
    CodeEntry { name: "Loamy", code: 2 },
    CodeEntry { name: "Red", code: 3 },
    CodeEntry { name: "Sandy", code: 4 },
];

/// Ordered crop options for the field form
pub fn list_crop_types() -> &'static [CodeEntry] {
    &CROP_TYPES
}

/// Ordered soil options for the field form
pub fn list_soil_types() -> &'static [CodeEntry] {
    &SOIL_TYPES
}

/// Crop name for a code, if the code is in the table
pub fn crop_name(code: i32) -> Option<&'static str> {
    CropType::from_code(code).map(|c| c.name())
}

/// Soil name for a code, if the code is in the table
pub fn soil_name(code: i32) -> Option<&'static str> {
    SoilType::from_code(code).map(|s| s.name())
}

/// Agronomic reference entry for a fertilizer product
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FertilizerRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub application: &'static str,
    pub benefits: &'static str,
    pub precautions: &'static str,
    pub npk: &'static str,
}

static FERTILIZERS: [FertilizerRecord; 14] = [
    FertilizerRecord {
        name: "Urea",
        description: "High nitrogen content fertilizer (46% N)",
        application: "Apply 2-3 weeks before planting or as top dressing during vegetative growth",
        benefits: "Promotes leaf growth and green color",
        precautions: "Avoid over-application to prevent burning",
        npk: "46-0-0",
    },
    FertilizerRecord {
        name: "DAP",
        description: "Diammonium Phosphate (18% N, 46% P2O5)",
        application: "Apply at planting time or during soil preparation",
        benefits: "Excellent for root development and early plant growth",
        precautions: "Best applied in slightly acidic to neutral soils",
        npk: "18-46-0",
    },
    FertilizerRecord {
        name: "TSP",
        description: "Triple Super Phosphate (46% P2O5)",
        application: "Apply during soil preparation, 2-3 weeks before planting",
        benefits: "Promotes strong root system and flowering",
        precautions: "May reduce availability in alkaline soils",
        npk: "0-46-0",
    },
    FertilizerRecord {
        name: "Superphosphate",
        description: "Single Super Phosphate (16% P2O5, 12% S)",
        application: "Apply during soil preparation or at planting",
        benefits: "Provides phosphorus and sulfur for plant growth",
        precautions: "Less concentrated than other phosphate fertilizers",
        npk: "0-16-0",
    },
    FertilizerRecord {
        name: "Potassium sulfate",
        description: "Sulfate of Potash (50% K2O, 18% S)",
        application: "Apply during fruit development stage",
        benefits: "Improves fruit quality and disease resistance",
        precautions: "Suitable for chloride-sensitive crops",
        npk: "0-0-50",
    },
    FertilizerRecord {
        name: "Potassium chloride",
        description: "Muriate of Potash (60% K2O)",
        application: "Apply 2-4 weeks before planting",
        benefits: "Enhances water regulation and disease resistance",
        precautions: "Avoid for salt-sensitive crops",
        npk: "0-0-60",
    },
    FertilizerRecord {
        name: "28-28",
        description: "Balanced NPK fertilizer (28% N, 28% P2O5)",
        application: "Apply at planting and during active growth periods",
        benefits: "Provides balanced nutrition for overall plant health",
        precautions: "Monitor soil pH for optimal nutrient uptake",
        npk: "28-28-0",
    },
    FertilizerRecord {
        name: "20-20",
        description: "Balanced fertilizer (20% N, 20% P2O5)",
        application: "Apply during planting and early growth stages",
        benefits: "Good starter fertilizer for young plants",
        precautions: "May need supplementation during peak growth",
        npk: "20-20-0",
    },
    FertilizerRecord {
        name: "17-17-17",
        description: "Complete NPK fertilizer (17% each of N, P2O5, K2O)",
        application: "Apply throughout the growing season",
        benefits: "Provides complete nutrition for all growth stages",
        precautions: "Adjust application rate based on soil test results",
        npk: "17-17-17",
    },
    FertilizerRecord {
        name: "15-15-15",
        description: "Balanced NPK fertilizer (15% each of N, P2O5, K2O)",
        application: "Apply at regular intervals during growing season",
        benefits: "Suitable for maintenance feeding of established plants",
        precautions: "Monitor for nutrient deficiencies in heavy feeders",
        npk: "15-15-15",
    },
    FertilizerRecord {
        name: "14-35-14",
        description: "High phosphorus fertilizer (14% N, 35% P2O5, 14% K2O)",
        application: "Apply during flowering and fruit set stages",
        benefits: "Promotes flowering, fruiting, and root development",
        precautions: "Best used when soil phosphorus levels are low",
        npk: "14-35-14",
    },
    FertilizerRecord {
        name: "14-14-14",
        description: "Balanced NPK fertilizer (14% each of N, P2O5, K2O)",
        application: "Apply as general purpose fertilizer throughout season",
        benefits: "Good all-around fertilizer for various crops",
        precautions: "May need supplementation for specific nutrient needs",
        npk: "14-14-14",
    },
    FertilizerRecord {
        name: "10-26-26",
        description: "High P-K fertilizer (10% N, 26% P2O5, 26% K2O)",
        application: "Apply during reproductive growth stages",
        benefits: "Excellent for fruit and seed development",
        precautions: "Use when nitrogen requirements are lower",
        npk: "10-26-26",
    },
    FertilizerRecord {
        name: "10-10-10",
        description: "Balanced NPK fertilizer (10% each of N, P2O5, K2O)",
        application: "Apply as maintenance fertilizer for established crops",
        benefits: "Gentle, balanced nutrition for sensitive plants",
        precautions: "May need higher rates for heavy feeding crops",
        npk: "10-10-10",
    },
];

/// All fertilizer records in table order
pub fn list_fertilizers() -> &'static [FertilizerRecord] {
    &FERTILIZERS
}

/// Look up a fertilizer record by exact product name
pub fn lookup_fertilizer(name: &str) -> Option<&'static FertilizerRecord> {
    FERTILIZERS.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_table_matches_enum() {
        assert_eq!(list_crop_types().len(), CropType::ALL.len());
        for (entry, crop) in list_crop_types().iter().zip(CropType::ALL.iter()) {
            assert_eq!(entry.code, crop.code());
            assert_eq!(entry.name, crop.name());
        }
    }

    #[test]
    fn test_soil_table_matches_enum() {
        for (entry, soil) in list_soil_types().iter().zip(SoilType::ALL.iter()) {
            assert_eq!(entry.code, soil.code());
            assert_eq!(entry.name, soil.name());
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(CropType::from_code(99), None);
        assert_eq!(SoilType::from_code(-1), None);
        assert_eq!(crop_name(15), Some("rice"));
        assert_eq!(soil_name(2), Some("Loamy"));
    }

    #[test]
    fn test_fertilizer_lookup() {
        assert_eq!(list_fertilizers().len(), 14);
        assert_eq!(lookup_fertilizer("DAP").map(|f| f.npk), Some("18-46-0"));
        assert!(lookup_fertilizer("dap").is_none());
        assert!(lookup_fertilizer("Organic Compost").is_none());
    }
}
