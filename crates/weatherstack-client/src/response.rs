use crate::error::ProviderError;
use serde::{Deserialize, Deserializer};
use weather_core::WeatherData;

/// Body of weatherstack's `/current` endpoint
///
/// Every field is defaulted, and an explicit `null` decodes as the default:
/// success bodies carry no `error` object and error bodies carry no
/// `current` object.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProviderResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub error: ErrorBody,
    #[serde(deserialize_with = "null_as_default")]
    pub location: Location,
    #[serde(deserialize_with = "null_as_default")]
    pub current: Current,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    #[serde(deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub error_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub info: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Current {
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub weather_descriptions: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProviderResponse {
    /// Map the raw body onto either weather data or the provider's error
    ///
    /// A non-zero `error.code` wins regardless of `success`.
    pub fn into_result(self) -> Result<WeatherData, ProviderError> {
        if self.error.code != 0 {
            return Err(ProviderError {
                code: self.error.code,
                error_type: self.error.error_type,
                message: self.error.info,
            });
        }

        let condition = self
            .current
            .weather_descriptions
            .into_iter()
            .next()
            .unwrap_or_default();

        Ok(WeatherData::new(self.current.temperature, condition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ProviderResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_minimal_success_body() {
        let response =
            parse(r#"{"current":{"temperature":21.5,"weather_descriptions":["Sunny"]}}"#);

        assert_eq!(response.into_result().unwrap(), WeatherData::new(21.5, "Sunny"));
    }

    #[test]
    fn test_takes_first_description_only() {
        let response = parse(
            r#"{"current":{"temperature":3,"weather_descriptions":["Light Rain","Mist"]}}"#,
        );

        let data = response.into_result().unwrap();
        assert_eq!(data.condition, "Light Rain");
        assert_eq!(data.temperature, 3.0);
    }

    #[test]
    fn test_empty_or_null_descriptions() {
        let empty = parse(r#"{"current":{"temperature":10,"weather_descriptions":[]}}"#);
        assert_eq!(empty.into_result().unwrap().condition, "");

        let null = parse(r#"{"current":{"temperature":10,"weather_descriptions":null}}"#);
        assert_eq!(null.into_result().unwrap().condition, "");
    }

    #[test]
    fn test_null_error_object() {
        let response = parse(
            r#"{"success":true,"error":null,"current":{"temperature":21.5,"weather_descriptions":["Sunny"]}}"#,
        );

        assert_eq!(response.into_result().unwrap(), WeatherData::new(21.5, "Sunny"));
    }

    #[test]
    fn test_null_location_and_current() {
        let response = parse(r#"{"location":null,"current":null}"#);

        assert_eq!(response.location.name, "");
        assert_eq!(response.into_result().unwrap(), WeatherData::new(0.0, ""));
    }

    #[test]
    fn test_null_temperature() {
        let response =
            parse(r#"{"current":{"temperature":null,"weather_descriptions":["Fog"]}}"#);

        assert_eq!(response.into_result().unwrap(), WeatherData::new(0.0, "Fog"));
    }

    #[test]
    fn test_null_fields_inside_error() {
        let response =
            parse(r#"{"success":null,"error":{"code":104,"type":null,"info":null}}"#);

        let err = response.into_result().unwrap_err();
        assert_eq!(err.code, 104);
        assert_eq!(err.error_type, "");
        assert_eq!(err.message, "");
    }

    #[test]
    fn test_null_location_strings() {
        let response = parse(
            r#"{"location":{"name":null,"country":"Peru"},"current":{"temperature":9,"weather_descriptions":["Clear"]}}"#,
        );

        assert_eq!(response.location.name, "");
        assert_eq!(response.location.country, "Peru");
        assert_eq!(response.into_result().unwrap().condition, "Clear");
    }

    #[test]
    fn test_error_body() {
        let response = parse(
            r#"{"success":false,"error":{"code":101,"type":"invalid_access_key","info":"bad key"}}"#,
        );

        let err = response.into_result().unwrap_err();
        assert_eq!(err.code, 101);
        assert_eq!(err.error_type, "invalid_access_key");
        assert_eq!(err.message, "bad key");
        assert_eq!(err.to_string(), "bad key");
    }

    #[test]
    fn test_full_body_with_location() {
        let response = parse(
            r#"{
                "request": {"type": "City", "query": "London, United Kingdom"},
                "location": {"name": "London", "country": "United Kingdom"},
                "current": {"temperature": 13, "weather_descriptions": ["Overcast"], "humidity": 81}
            }"#,
        );

        assert_eq!(response.location.name, "London");
        assert_eq!(response.location.country, "United Kingdom");
        assert_eq!(response.into_result().unwrap(), WeatherData::new(13.0, "Overcast"));
    }
}
