//! Shared types and logic for the KrishiMitra crop advisory platform
//!
//! This crate contains the catalogs, models, weather simulation and form
//! orchestration shared between the backend, the browser (via WASM), and
//! other components of the system.

pub mod catalog;
pub mod models;
pub mod orchestrator;
pub mod simulator;
pub mod types;
pub mod validation;

pub use models::*;
pub use orchestrator::{FormEffect, FormEvent, FormStage, FormState, Transition};
pub use types::*;
pub use validation::*;
