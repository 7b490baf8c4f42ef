//! Crop recommendation models

use serde::{Deserialize, Serialize};

use super::{IrrigationType, SoilType, WeatherReading};
use crate::types::Location;

/// Number of crops in every recommendation batch
pub const RECOMMENDATION_COUNT: usize = 3;

/// One ranked crop suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    /// 1 is the most suitable crop
    pub rank: u8,
    pub name: String,
    /// Percentage, 0-100
    pub confidence: u8,
    pub reason: String,
    /// Kharif, Rabi or Zaid
    pub growing_season: String,
    /// Low, Medium or High
    pub water_requirement: String,
}

impl CropRecommendation {
    /// Badge text shown next to a crop card
    pub fn rank_label(&self) -> String {
        match self.rank {
            1 => "Most Recommended".to_string(),
            2 => "Highly Suitable".to_string(),
            3 => "Good Alternative".to_string(),
            n => format!("Option {}", n),
        }
    }
}

/// Everything the advisor needs to rank crops for one farm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationInput {
    pub soil_type: SoilType,
    #[serde(rename = "soilPH")]
    pub soil_ph: f64,
    pub irrigation_type: IrrigationType,
    pub location: Location,
    pub weather: WeatherReading,
}

/// Body returned by the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationBatch {
    pub recommendations: Vec<CropRecommendation>,
}

impl RecommendationBatch {
    /// A batch is usable when it holds exactly three crops ranked 1, 2 and 3
    /// with confidence no higher than 100.
    pub fn is_well_formed(&self) -> bool {
        if self.recommendations.len() != RECOMMENDATION_COUNT {
            return false;
        }
        let mut ranks: Vec<u8> = self.recommendations.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        ranks == [1, 2, 3] && self.recommendations.iter().all(|r| r.confidence <= 100)
    }

    /// Order crops by rank, most suitable first
    pub fn into_ranked(mut self) -> Vec<CropRecommendation> {
        self.recommendations.sort_by_key(|r| r.rank);
        self.recommendations
    }

    /// Static suggestions used when the advisor's answer cannot be parsed
    pub fn fallback() -> Self {
        Self {
            recommendations: vec![
                CropRecommendation {
                    rank: 1,
                    name: "Wheat".to_string(),
                    confidence: 75,
                    reason: "Suitable for the given soil and climate conditions".to_string(),
                    growing_season: "Rabi".to_string(),
                    water_requirement: "Medium".to_string(),
                },
                CropRecommendation {
                    rank: 2,
                    name: "Rice".to_string(),
                    confidence: 70,
                    reason: "Good option with adequate irrigation".to_string(),
                    growing_season: "Kharif".to_string(),
                    water_requirement: "High".to_string(),
                },
                CropRecommendation {
                    rank: 3,
                    name: "Maize".to_string(),
                    confidence: 65,
                    reason: "Versatile crop suitable for various conditions".to_string(),
                    growing_season: "Kharif".to_string(),
                    water_requirement: "Medium".to_string(),
                },
            ],
        }
    }
}
