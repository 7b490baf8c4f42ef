//! Configuration management for KrishiMitra
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with KRISHI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_GATEWAY_ENDPOINT: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_GATEWAY_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_WEATHER_LATENCY_MS: u64 = 800;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// AI gateway configuration
    pub gateway: GatewayConfig,

    /// Simulated weather configuration
    pub weather: WeatherConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    /// Chat completions endpoint
    pub endpoint: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Bearer credential. Requests fail with a configuration error when unset.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Artificial delay before a simulated reading is returned
    pub simulated_latency_ms: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("KRISHI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("gateway.endpoint", DEFAULT_GATEWAY_ENDPOINT)?
            .set_default("gateway.model", DEFAULT_GATEWAY_MODEL)?
            .set_default("weather.simulated_latency_ms", DEFAULT_WEATHER_LATENCY_MS)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (KRISHI_ prefix)
            .add_source(
                Environment::with_prefix("KRISHI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GATEWAY_ENDPOINT.to_string(),
            model: DEFAULT_GATEWAY_MODEL.to_string(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: DEFAULT_WEATHER_LATENCY_MS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            gateway: GatewayConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}
