//! HTTP handlers for Minimum Support Price lookups

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use shared::catalog::{all_msp_records, find_msp, format_msp, msp_by_season};
use shared::MspRecord;

use crate::error::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct MspListQuery {
    pub season: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MspLookupQuery {
    pub crop: String,
}

#[derive(Debug, Serialize)]
pub struct MspLookupResponse {
    pub record: MspRecord,
    pub formatted: String,
}

/// List MSP records, optionally for one season
pub async fn list_msp(Query(query): Query<MspListQuery>) -> Json<Vec<MspRecord>> {
    let records = match query.season.as_deref() {
        Some(season) if !season.trim().is_empty() => {
            msp_by_season(season.trim()).into_iter().copied().collect()
        }
        _ => all_msp_records().to_vec(),
    };
    Json(records)
}

/// Find the MSP for a recommended crop name
pub async fn lookup_msp(Query(query): Query<MspLookupQuery>) -> AppResult<Json<MspLookupResponse>> {
    let record = find_msp(&query.crop)
        .ok_or_else(|| AppError::NotFound(format!("MSP for '{}'", query.crop.trim())))?;

    Ok(Json(MspLookupResponse {
        record: *record,
        formatted: format_msp(record.msp),
    }))
}
