//! Weather data models

use serde::{Deserialize, Serialize};

/// Icon hint for the weather card
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    #[default]
    Sun,
    Cloud,
    Rain,
}

/// A (simulated) current weather reading for the selected district.
///
/// Readings are derived on every location change and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    /// Degrees Celsius
    pub temperature: i32,
    /// Relative humidity, percent
    pub humidity: i32,
    /// Millimetres
    pub rainfall: i32,
    /// Kilometres per hour
    pub wind_speed: i32,
    pub description: String,
    /// Absent when a client echoes the reading back without it
    #[serde(default)]
    pub icon: WeatherIcon,
}
