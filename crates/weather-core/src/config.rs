use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Default weatherstack endpoint for current conditions
pub const DEFAULT_WEATHERSTACK_URL: &str = "http://api.weatherstack.com/current";

/// Default port the API server listens on
pub const DEFAULT_API_PORT: u16 = 8080;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// weatherstack access key
    pub weather_api_key: String,

    /// weatherstack "current" endpoint
    pub weatherstack_url: String,

    /// API server port
    pub api_port: u16,
}

impl Config {
    /// Load configuration from `.env` and environment variables
    ///
    /// Meant to be called once at startup. A missing `WEATHER_API_KEY` is an
    /// error here so that request handling never has to deal with it.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(dotenvy::Error::Io(e)) => return Err(Error::Io(e)),
            Err(e) => return Err(Error::Config(format!("Invalid .env file: {}", e))),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            weather_api_key: lookup("WEATHER_API_KEY")
                .filter(|key| !key.is_empty())
                .ok_or_else(|| Error::Config("WEATHER_API_KEY not set".to_string()))?,

            weatherstack_url: lookup("WEATHERSTACK_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_WEATHERSTACK_URL.to_string()),

            api_port: lookup("API_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_API_PORT),
        })
    }

    /// Create a test configuration
    pub fn test(weatherstack_url: impl Into<String>) -> Self {
        Self {
            weather_api_key: "test-key".to_string(),
            weatherstack_url: weatherstack_url.into(),
            api_port: DEFAULT_API_PORT,
        }
    }
}
