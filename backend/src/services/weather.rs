//! Weather service serving simulated readings
//!
//! There is no live weather provider; readings come from the seasonal
//! simulator after an artificial delay that mimics a network round trip.

use std::time::Duration;

use chrono::Month;
use shared::simulator::{current_month, simulate};
use shared::{validate_location_part, WeatherReading};

use crate::config::WeatherConfig;
use crate::error::AppResult;

/// Weather service
#[derive(Debug, Clone)]
pub struct WeatherService {
    latency: Duration,
}

impl WeatherService {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.simulated_latency_ms),
        }
    }

    /// Current reading for a district, using this month's season
    pub async fn current(&self, state: &str, district: &str) -> AppResult<WeatherReading> {
        self.for_month(state, district, current_month()).await
    }

    /// Reading for a district as it would look in the given month
    pub async fn for_month(
        &self,
        state: &str,
        district: &str,
        month: Month,
    ) -> AppResult<WeatherReading> {
        validate_location_part(state)?;
        validate_location_part(district)?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        // Readings vary by state only; the district is informational
        let reading = simulate(state, month);
        tracing::debug!(
            state,
            district,
            temperature = reading.temperature,
            "Simulated weather reading"
        );
        Ok(reading)
    }
}
