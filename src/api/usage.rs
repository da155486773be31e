//! Usage endpoint

use axum::{extract::State, Json};
use tracing::error;

use super::state::AppState;
use super::types::{ApiError, UsageResponse};

/// Message returned for every failure of `/usage`
pub const USAGE_UNAVAILABLE_MESSAGE: &str =
    "Unexpected error while fetching usage. Try again later.";

/// GET /usage - credit usage of every message in the current period
pub async fn get_usage(State(state): State<AppState>) -> Result<Json<UsageResponse>, ApiError> {
    match state.usage_service.compute_usage().await {
        Ok(usage) => Ok(Json(usage.into())),
        Err(e) => {
            error!(error = %e, "Failed to compute usage");
            Err(ApiError::unavailable(USAGE_UNAVAILABLE_MESSAGE))
        }
    }
}
