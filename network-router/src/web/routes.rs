//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", get(route_query))
        .route("/stations/:name", get(get_station))
        .route("/lines", get(list_lines))
        .route("/lines/:name", get(get_line))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find a route between two stations.
///
/// Unknown stations and unreachable destinations are ordinary outcomes and
/// come back as `success: false` with a message, not as HTTP errors.
async fn route_query(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Json<RouteResponse> {
    let result = state.network.route(&req.from, &req.to);

    match &result {
        Ok(route) => debug!(
            from = %req.from,
            to = %req.to,
            stations = route.len(),
            total_time = route.total_time(),
            "route found"
        ),
        Err(e) => debug!(from = %req.from, to = %req.to, error = %e, "no route"),
    }

    Json(RouteResponse::from_result(&result))
}

/// Look up a station by name (any case).
async fn get_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationResult>, AppError> {
    let station = state
        .network
        .station(&name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown station: {name}"),
        })?;

    Ok(Json(StationResult::from_station(station, &state.network)))
}

/// List every line name, sorted.
async fn list_lines(State(state): State<AppState>) -> Json<Vec<String>> {
    let mut names: Vec<String> = state
        .network
        .lines()
        .map(|(name, _)| name.to_string())
        .collect();
    names.sort_unstable();
    Json(names)
}

/// Look up a line's metadata by exact name.
async fn get_line(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LineResult>, AppError> {
    let metadata = state
        .network
        .line_data(&name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown line: {name}"),
        })?;

    Ok(Json(LineResult {
        metadata: metadata.clone(),
        name,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(status = %status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
