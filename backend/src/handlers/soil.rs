//! HTTP handlers for soil and irrigation option lists

use axum::Json;
use serde::Serialize;
use shared::{IrrigationType, SoilType};

#[derive(Debug, Serialize)]
pub struct SoilTypeOption {
    pub value: SoilType,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct IrrigationOption {
    pub value: IrrigationType,
    pub label: &'static str,
}

pub async fn list_soil_types() -> Json<Vec<SoilTypeOption>> {
    let options = SoilType::ALL
        .iter()
        .map(|&soil| SoilTypeOption {
            value: soil,
            label: soil.label(),
            description: soil.description(),
        })
        .collect();
    Json(options)
}

pub async fn list_irrigation_types() -> Json<Vec<IrrigationOption>> {
    let options = IrrigationType::ALL
        .iter()
        .map(|&irrigation| IrrigationOption {
            value: irrigation,
            label: irrigation.label(),
        })
        .collect();
    Json(options)
}
