//! Route definitions for KrishiMitra

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::api_health))
        .nest("/locations", location_routes())
        .nest("/soil", soil_routes())
        .route("/weather", get(handlers::get_current_weather))
        .route("/recommendations", post(handlers::create_recommendations))
        .nest("/msp", msp_routes())
}

/// Cascading location lookups
fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/states", get(handlers::list_states))
        .route("/districts", get(handlers::list_districts))
        .route("/tehsils", get(handlers::list_tehsils))
        .route("/villages", get(handlers::list_villages))
}

/// Soil and irrigation option lists
fn soil_routes() -> Router<AppState> {
    Router::new()
        .route("/types", get(handlers::list_soil_types))
        .route("/irrigation-types", get(handlers::list_irrigation_types))
}

/// Minimum Support Price routes
fn msp_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_msp))
        .route("/lookup", get(handlers::lookup_msp))
}
