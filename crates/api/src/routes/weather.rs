use crate::error::{json_response, ApiError};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use std::sync::Arc;

/// First `query` value in the request, or empty when absent
///
/// Repeated keys are allowed; later values are ignored.
fn location_query(params: Vec<(String, String)>) -> String {
    params
        .into_iter()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Current weather for a location
pub async fn weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let query = location_query(params);
    let data = state.client.fetch(&query).await?;

    Ok(json_response(StatusCode::OK, &data))
}
