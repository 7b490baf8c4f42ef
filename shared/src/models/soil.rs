//! Soil and irrigation models

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Minimum soil pH accepted by the input form
pub const SOIL_PH_MIN: f64 = 3.0;
/// Maximum soil pH accepted by the input form
pub const SOIL_PH_MAX: f64 = 11.0;
/// pH shown before the farmer adjusts the slider
pub const SOIL_PH_DEFAULT: f64 = 7.0;

/// Error returned when parsing an unknown option value
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

/// Soil types found across Indian farmland
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Black,
    Red,
    Alluvial,
    Laterite,
    Sandy,
    Clay,
    Loamy,
    Saline,
}

impl SoilType {
    pub const ALL: [SoilType; 8] = [
        SoilType::Black,
        SoilType::Red,
        SoilType::Alluvial,
        SoilType::Laterite,
        SoilType::Sandy,
        SoilType::Clay,
        SoilType::Loamy,
        SoilType::Saline,
    ];

    /// Wire value, also used verbatim in the advisor prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Black => "black",
            SoilType::Red => "red",
            SoilType::Alluvial => "alluvial",
            SoilType::Laterite => "laterite",
            SoilType::Sandy => "sandy",
            SoilType::Clay => "clay",
            SoilType::Loamy => "loamy",
            SoilType::Saline => "saline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Black => "Black Soil (Regur)",
            SoilType::Red => "Red Soil",
            SoilType::Alluvial => "Alluvial Soil",
            SoilType::Laterite => "Laterite Soil",
            SoilType::Sandy => "Sandy Soil",
            SoilType::Clay => "Clay Soil",
            SoilType::Loamy => "Loamy Soil",
            SoilType::Saline => "Saline Soil",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SoilType::Black => "Rich in calcium, magnesium, potash",
            SoilType::Red => "Rich in iron, low in nitrogen",
            SoilType::Alluvial => "Most fertile, found in river plains",
            SoilType::Laterite => "Rich in iron and aluminum",
            SoilType::Sandy => "Well-drained, low water retention",
            SoilType::Clay => "Heavy, high water retention",
            SoilType::Loamy => "Balanced mixture, ideal for most crops",
            SoilType::Saline => "High salt content, coastal areas",
        }
    }
}

impl FromStr for SoilType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoilType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownOption {
                kind: "soil type",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Irrigation available on the farm
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationType {
    Drip,
    Sprinkler,
    Flood,
    Canal,
    Well,
    Rainfed,
}

impl IrrigationType {
    pub const ALL: [IrrigationType; 6] = [
        IrrigationType::Drip,
        IrrigationType::Sprinkler,
        IrrigationType::Flood,
        IrrigationType::Canal,
        IrrigationType::Well,
        IrrigationType::Rainfed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationType::Drip => "drip",
            IrrigationType::Sprinkler => "sprinkler",
            IrrigationType::Flood => "flood",
            IrrigationType::Canal => "canal",
            IrrigationType::Well => "well",
            IrrigationType::Rainfed => "rainfed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IrrigationType::Drip => "Drip Irrigation",
            IrrigationType::Sprinkler => "Sprinkler Irrigation",
            IrrigationType::Flood => "Flood/Surface Irrigation",
            IrrigationType::Canal => "Canal Irrigation",
            IrrigationType::Well => "Well/Tube Well",
            IrrigationType::Rainfed => "Rain-fed (No Irrigation)",
        }
    }
}

impl FromStr for IrrigationType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IrrigationType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownOption {
                kind: "irrigation type",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for IrrigationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Soil and irrigation inputs as submitted for a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoilProfile {
    pub soil_type: SoilType,
    #[serde(rename = "soilPH")]
    pub soil_ph: f64,
    pub irrigation_type: IrrigationType,
}

/// Qualitative acidity class for a pH reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PhClass {
    StronglyAcidic,
    ModeratelyAcidic,
    Neutral,
    ModeratelyAlkaline,
    StronglyAlkaline,
}

impl PhClass {
    pub fn classify(ph: f64) -> Self {
        if ph < 5.5 {
            PhClass::StronglyAcidic
        } else if ph < 6.5 {
            PhClass::ModeratelyAcidic
        } else if ph < 7.5 {
            PhClass::Neutral
        } else if ph < 8.5 {
            PhClass::ModeratelyAlkaline
        } else {
            PhClass::StronglyAlkaline
        }
    }
}

impl std::fmt::Display for PhClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhClass::StronglyAcidic => write!(f, "Strongly Acidic"),
            PhClass::ModeratelyAcidic => write!(f, "Moderately Acidic"),
            PhClass::Neutral => write!(f, "Neutral"),
            PhClass::ModeratelyAlkaline => write!(f, "Moderately Alkaline"),
            PhClass::StronglyAlkaline => write!(f, "Strongly Alkaline"),
        }
    }
}
