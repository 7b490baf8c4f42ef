//! Business logic services for KrishiMitra

pub mod recommendation;
pub mod weather;

pub use recommendation::RecommendationService;
pub use weather::WeatherService;
