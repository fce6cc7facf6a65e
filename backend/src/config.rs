//! Configuration management for the Assistant Agricole server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix
//!
//! The `OPENWEATHER_API_KEY` and `HF_API_TOKEN` variables used by earlier
//! deployments are honored as seed values for the API keys.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// IP geolocation configuration
    pub geo: GeoConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Language-model API configuration
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeoConfig {
    /// IP geolocation endpoint
    pub endpoint: String,

    /// City identifier used when detection fails ("City,CC")
    pub fallback_city: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    /// Chat-completions endpoint (OpenAI-compatible)
    pub api_endpoint: String,

    /// API key sent as a bearer token
    pub api_key: String,

    /// Model identifier
    pub model: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let weather_key = std::env::var("OPENWEATHER_API_KEY").unwrap_or_default();
        let llm_key = std::env::var("HF_API_TOKEN").unwrap_or_default();

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("geo.endpoint", "http://ip-api.com/json")?
            .set_default("geo.fallback_city", "Antananarivo,MG")?
            .set_default("weather.api_endpoint", "https://api.openweathermap.org/data/2.5")?
            .set_default("weather.api_key", weather_key)?
            .set_default("llm.api_endpoint", "https://router.huggingface.co/v1")?
            .set_default("llm.api_key", llm_key)?
            .set_default("llm.model", "openai/gpt-oss-20b:together")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
