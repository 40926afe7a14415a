mod client;
mod error;
pub mod response;

pub use client::WeatherClient;
pub use error::{FetchError, ProviderError, Result};
pub use response::ProviderResponse;
