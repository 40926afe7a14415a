use serde::{Deserialize, Serialize};

/// Current conditions for one location, as served to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub temperature: f64,

    /// First provider description, or empty when the provider sent none
    pub condition: String,
}

impl WeatherData {
    pub fn new(temperature: f64, condition: impl Into<String>) -> Self {
        Self {
            temperature,
            condition: condition.into(),
        }
    }
}
