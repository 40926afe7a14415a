use crate::error::{FetchError, Result};
use crate::response::ProviderResponse;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use weather_core::{Config, WeatherData};

/// Client for weatherstack's current-conditions endpoint
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Create a new WeatherClient
    ///
    /// # Arguments
    /// * `base_url` - Full URL of the `/current` endpoint
    /// * `api_key` - weatherstack access key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("weather-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.weatherstack_url, &config.weather_api_key)
    }

    /// Fetch current conditions for a location query
    ///
    /// The query is passed through unvalidated; weatherstack rejects bad
    /// queries with a structured error, surfaced as `FetchError::Provider`.
    pub async fn fetch(&self, query: &str) -> Result<WeatherData> {
        debug!(query = query, "Requesting current weather");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("access_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(status.to_string()));
        }

        let body = response.text().await?;
        let parsed: ProviderResponse = serde_json::from_str(&body)?;

        if parsed.error.code == 0 {
            debug!(
                name = %parsed.location.name,
                country = %parsed.location.country,
                "Resolved location"
            );
        }

        parsed.into_result().map_err(|e| {
            warn!(
                code = e.code,
                error_type = %e.error_type,
                message = %e.message,
                "Provider returned an error"
            );
            FetchError::Provider(e)
        })
    }
}
