//! HTTP API routes
//!
//! Defines the REST endpoints a search widget calls.

use crate::coord::Coordinate;
use crate::error::Error;
use crate::geocode::GeocodeBackend;
use crate::search::binding::{HostResult, HostSuggestion, ResultParams, SuggestParams};
use crate::server::state::AppState;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Create the API router
pub fn create_router<B>(state: Arc<AppState<B>>) -> Router
where
    B: GeocodeBackend + Clone + 'static,
{
    Router::new()
        .route("/api/suggestions", get(suggestions_handler::<B>))
        .route("/api/results", post(results_handler::<B>))
        .route("/api/status", get(status_handler::<B>))
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip)]
    status: StatusCode,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let (status, code) = match &err {
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Error::InvalidCoordinates(_) => (StatusCode::BAD_REQUEST, "INVALID_COORDINATES"),
            Error::Transport { .. } => (StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR"),
            Error::Decode(_) => (StatusCode::BAD_GATEWAY, "DECODE_ERROR"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
            status,
        }
    }
}

/// Suggestion query string
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// Text typed so far
    pub term: String,
    /// View center longitude; the configured center is used when absent
    pub lon: Option<f64>,
    /// View center latitude
    pub lat: Option<f64>,
    #[serde(default)]
    pub source_index: usize,
}

/// Suggestions endpoint
///
/// GET /api/suggestions?term=..&lon=..&lat=..
async fn suggestions_handler<B>(
    State(state): State<Arc<AppState<B>>>,
    Query(req): Query<SuggestRequest>,
) -> Result<Json<Vec<HostSuggestion>>, ApiError>
where
    B: GeocodeBackend + Clone + 'static,
{
    let view_center = match (req.lon, req.lat) {
        (Some(lon), Some(lat)) => Coordinate::new(lon, lat)?,
        (None, None) => state.view_center,
        _ => {
            return Err(Error::Validation("lon and lat must be given together".to_string()).into())
        }
    };

    let params = SuggestParams {
        suggest_term: req.term,
        source_index: req.source_index,
    };
    let suggestions = state.source.get_suggestions(&params, view_center).await?;
    Ok(Json(suggestions))
}

/// Results endpoint
///
/// POST /api/results
async fn results_handler<B>(
    State(state): State<Arc<AppState<B>>>,
    Json(params): Json<ResultParams>,
) -> Result<Json<Vec<HostResult>>, ApiError>
where
    B: GeocodeBackend + Clone + 'static,
{
    let results = state.source.get_results(&params).await?;
    Ok(Json(results))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Address API base URL
    pub provider: String,
    /// Search box placeholder
    pub placeholder: String,
    pub suggestion_limit: usize,
    pub result_limit: usize,
    pub buffer_meters: f64,
    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler<B>(State(state): State<Arc<AppState<B>>>) -> Json<StatusResponse>
where
    B: GeocodeBackend + Clone + 'static,
{
    let settings = state.source.settings();
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: state.config.api.base_url.clone(),
        placeholder: state.source.placeholder().to_string(),
        suggestion_limit: settings.suggestion_limit,
        result_limit: settings.result_limit,
        buffer_meters: settings.buffer_meters,
        uptime_secs: state.uptime_secs(),
    })
}
