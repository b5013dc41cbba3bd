//! HTTP route handlers.

use std::sync::Arc;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::debug;

use crate::schedule::{self, Anchor, AnchorError};

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/itinerary", get(itinerary_view))
        .route("/api/config/icons", get(icon_map))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page: the map and sidebar shell.
async fn index_page() -> Result<Response, AppError> {
    let html = IndexTemplate.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html).into_response())
}

/// The icon map, verbatim, for the frontend to pick marker badges from.
async fn icon_map(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::Value::Object((*state.icons).clone()))
}

/// The computed itinerary.
///
/// The anchor comes from the query when supplied, else from the document's
/// own defaults. The pristine itinerary is cloned per computation so
/// re-running with a different anchor overwrites rather than compounds.
async fn itinerary_view(
    State(state): State<AppState>,
    Query(req): Query<ItineraryRequest>,
) -> Result<Json<ItineraryView>, AppError> {
    let anchor = Anchor::for_itinerary(
        &state.itinerary,
        req.landing_date.as_deref(),
        req.landing_time.as_deref(),
    )?;

    let key = anchor.map(|a| a.landing_time());
    if let Some(view) = state.cache.get(&key).await {
        debug!(?key, "itinerary view served from cache");
        return Ok(Json(view.as_ref().clone()));
    }

    let mut itinerary = (*state.itinerary).clone();
    schedule::propagate(&mut itinerary, anchor, &state.durations);

    let view = Arc::new(ItineraryView::from_itinerary(&itinerary, anchor));
    state.cache.insert(key, view.clone()).await;

    Ok(Json(view.as_ref().clone()))
}

/// Application error type for handlers.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<AnchorError> for AppError {
    fn from(e: AnchorError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_errors_become_bad_requests() {
        let err: AppError = AnchorError::InvalidTime("2pm".into()).into();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }
}
