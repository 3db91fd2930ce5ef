//! System health and status handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use super::animals::ErrorResponse;
use crate::api::AppState;
use crate::db::Database;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "ok")]
    pub status: String,
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Service name and version", body = String)
    )
)]
#[instrument]
pub async fn root() -> &'static str {
    concat!("menagerie ", env!("CARGO_PKG_VERSION"))
}

/// Health check endpoint
///
/// Round-trips to the store, so reachability problems show up here and not
/// only on the first real request.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service and store are healthy", body = HealthResponse),
        (status = 500, description = "Store unreachable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<ErrorResponse>)> {
    state.db().ping().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
