use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use weatherstack_client::FetchError;

const FETCH_FAILED: &str = "Error fetching weather data";
const ENCODE_FAILED: &str = "Error encoding response";

#[derive(Serialize)]
pub struct ProviderErrorResponse {
    pub error_code: i64,
    pub error_type: String,
    pub error_message: String,
}

/// Errors a weather request can end in
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Fetch(FetchError::Provider(e)) => json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ProviderErrorResponse {
                    error_code: e.code,
                    error_type: e.error_type,
                    error_message: e.message,
                },
            ),
            // Detail stays in the logs only
            ApiError::Fetch(
                e @ (FetchError::Transport(_)
                | FetchError::UnexpectedStatus(_)
                | FetchError::Decode(_)),
            ) => {
                warn!(error = %e, "Weather fetch failed");
                (StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED).into_response()
            }
        }
    }
}

/// Serialize `body` as JSON with the given status
///
/// Falls back to a plain-text 500 when serialization fails.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to encode response");
            (StatusCode::INTERNAL_SERVER_ERROR, ENCODE_FAILED).into_response()
        }
    }
}
