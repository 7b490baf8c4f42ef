//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::WeatherReading;

use crate::error::AppResult;
use crate::AppState;

/// Query parameters for the current reading
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WeatherQuery {
    pub state: String,
    pub district: String,
}

/// Get the simulated current weather for a district
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherReading>> {
    let reading = state.weather.current(&query.state, &query.district).await?;
    Ok(Json(reading))
}
