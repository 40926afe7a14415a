use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_core::Config;
use weatherstack_client::WeatherClient;

mod error;
mod routes;

/// Shared application state
pub struct AppState {
    pub client: WeatherClient,
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/weather", get(routes::weather::weather))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fails before binding when WEATHER_API_KEY is missing
    let config = Config::from_env()?;

    info!(endpoint = %config.weatherstack_url, "Using weatherstack");

    let client = WeatherClient::from_config(&config)?;
    let state = Arc::new(AppState { client });

    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.api_port);
    info!(address = addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
