//! Validation utilities for KrishiMitra
//!
//! Checks shared by the HTTP handlers and the browser bindings so both reject
//! the same inputs with the same messages.

use crate::catalog::location_exists;
use crate::models::{RecommendationInput, SOIL_PH_MAX, SOIL_PH_MIN};
use crate::types::Location;

// ============================================================================
// Soil Validations
// ============================================================================

/// Validate soil pH is inside the selectable 3.0 - 11.0 range
pub fn validate_soil_ph(ph: f64) -> Result<(), &'static str> {
    if ph.is_nan() || !(SOIL_PH_MIN..=SOIL_PH_MAX).contains(&ph) {
        return Err("Soil pH must be between 3.0 and 11.0");
    }
    Ok(())
}

/// Check if pH is in the near-neutral band most field crops prefer
pub fn is_ideal_ph(ph: f64) -> bool {
    (6.0..=7.5).contains(&ph)
}

// ============================================================================
// Location Validations
// ============================================================================

/// Validate that a location query parameter was supplied
pub fn validate_location_part(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("State and district are required");
    }
    Ok(())
}

/// Validate every level of the location is selected
pub fn validate_location_complete(location: &Location) -> Result<(), &'static str> {
    if location.state.is_empty() {
        return Err("State is required");
    }
    if location.district.is_empty() {
        return Err("District is required");
    }
    if location.tehsil.is_empty() {
        return Err("Tehsil is required");
    }
    if location.village.is_empty() {
        return Err("Village is required");
    }
    Ok(())
}

/// Validate the location is one the catalog knows about
pub fn validate_location_known(location: &Location) -> Result<(), &'static str> {
    validate_location_complete(location)?;
    if !location_exists(location) {
        return Err("Unknown location");
    }
    Ok(())
}

// ============================================================================
// Recommendation Validations
// ============================================================================

/// Validate a recommendation request before it reaches the advisor
pub fn validate_recommendation_input(input: &RecommendationInput) -> Result<(), &'static str> {
    validate_location_complete(&input.location)?;
    validate_soil_ph(input.soil_ph)?;
    Ok(())
}
