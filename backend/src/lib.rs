//! KrishiMitra - Backend Server
//!
//! Crop advisory service for Indian farmers: location and soil catalogs,
//! simulated weather, AI-ranked crop recommendations and MSP lookups.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{AiGatewayClient, ChatCompletion};
use services::{RecommendationService, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub recommendations: RecommendationService,
    pub weather: WeatherService,
}

impl AppState {
    /// Build state backed by the configured AI gateway
    pub fn new(config: Config) -> error::AppResult<Self> {
        let gateway = AiGatewayClient::new(&config.gateway)?;
        Ok(Self::with_completion(config, Arc::new(gateway)))
    }

    /// Build state around any chat-completion backend
    pub fn with_completion(config: Config, completion: Arc<dyn ChatCompletion>) -> Self {
        Self {
            weather: WeatherService::new(&config.weather),
            recommendations: RecommendationService::new(completion),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
