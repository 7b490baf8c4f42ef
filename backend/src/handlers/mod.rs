//! HTTP handlers for KrishiMitra

pub mod health;
pub mod location;
pub mod msp;
pub mod recommendation;
pub mod soil;
pub mod weather;

pub use health::{api_health, health_check, root};
pub use location::{list_districts, list_states, list_tehsils, list_villages};
pub use msp::{list_msp, lookup_msp};
pub use recommendation::create_recommendations;
pub use soil::{list_irrigation_types, list_soil_types};
pub use weather::get_current_weather;
