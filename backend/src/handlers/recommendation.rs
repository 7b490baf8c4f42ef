//! HTTP handlers for crop recommendations

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use shared::{validate_recommendation_input, RecommendationBatch, RecommendationInput};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Rank three crops for the submitted farm conditions
pub async fn create_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationInput>, JsonRejection>,
) -> AppResult<Json<RecommendationBatch>> {
    let Json(input) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    validate_recommendation_input(&input)?;

    let recommendations = state.recommendations.recommend(&input).await?;
    Ok(Json(RecommendationBatch { recommendations }))
}
