//! HTTP handlers for the cascading location selectors
//!
//! Unknown or missing parents yield empty lists, never errors.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use shared::catalog;

#[derive(Debug, Serialize)]
pub struct StatesResponse {
    pub states: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct DistrictsResponse {
    pub districts: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct TehsilsResponse {
    pub tehsils: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct VillagesResponse {
    pub villages: Vec<&'static str>,
}

/// Query parameters for location lookups
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LocationQuery {
    pub state: String,
    pub district: String,
    pub tehsil: String,
}

pub async fn list_states() -> Json<StatesResponse> {
    Json(StatesResponse {
        states: catalog::list_states(),
    })
}

pub async fn list_districts(Query(query): Query<LocationQuery>) -> Json<DistrictsResponse> {
    Json(DistrictsResponse {
        districts: catalog::list_districts(&query.state),
    })
}

pub async fn list_tehsils(Query(query): Query<LocationQuery>) -> Json<TehsilsResponse> {
    Json(TehsilsResponse {
        tehsils: catalog::list_tehsils(&query.state, &query.district),
    })
}

pub async fn list_villages(Query(query): Query<LocationQuery>) -> Json<VillagesResponse> {
    Json(VillagesResponse {
        villages: catalog::list_villages(&query.state, &query.district, &query.tehsil),
    })
}
