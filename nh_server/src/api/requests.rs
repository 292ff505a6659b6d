//! Request catalog API handlers.
//!
//! The feed is public; posting a request requires a session. Search and
//! filter query parameters are the HTTP rendering of the feed intents: a
//! `GET /requests` call replaces the app's search term and filter and
//! returns the derived feed.
//!
//! # Examples
//!
//! Filtered feed:
//! ```bash
//! curl "http://localhost:8080/api/v1/requests?search=grocery&category=errands"
//! ```

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use neighborly::catalog::{
    Category, CatalogError, HelpRequest, NewHelpRequest, PaymentType, RequestId, RequestStatus,
    Urgency,
};
use neighborly::{AppError, Filter, MapMarker};
use serde::Deserialize;

use super::{error_response, AppState, ErrorResponse};
use crate::metrics;

/// Feed search and filter parameters. Absent fields impose no constraint.
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub payment_type: Option<PaymentType>,
    #[serde(default)]
    pub radius_km: Option<f64>,
}

/// The visible feed for the given search term and filter.
///
/// Replaces the app's feed state with the supplied parameters, so a later
/// map-marker call reflects the same subset. Calling with no parameters
/// clears search and filters.
pub async fn list_requests(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Json<Vec<HelpRequest>> {
    let app = &state.app;
    app.set_search_term(query.search.unwrap_or_default()).await;
    app.set_filter(Filter {
        category: query.category,
        urgency: query.urgency,
        status: query.status,
        payment_type: query.payment_type,
        radius_km: query.radius_km,
    })
    .await;

    Json(app.visible_requests().await)
}

/// Create a help request owned by the session user.
///
/// # Response
///
/// `201 Created` with the stored request; the feed view is current again.
///
/// # Errors
///
/// - `401 Unauthorized`: no session (the sign-in prompt is raised)
/// - `400 Bad Request`: validation failed (blank title, oversized
///   description, missing paid amount, ...)
pub async fn create_request(
    State(state): State<AppState>,
    Json(form): Json<NewHelpRequest>,
) -> Result<(StatusCode, Json<HelpRequest>), (StatusCode, Json<ErrorResponse>)> {
    match state.app.create_request(form).await {
        Ok(request) => {
            metrics::requests_created_total(request.category);
            Ok((StatusCode::CREATED, Json(request)))
        }
        Err(e) => Err(error_response(e)),
    }
}

/// Requests owned by the session user, newest first.
///
/// # Errors
///
/// - `401 Unauthorized`: no session
pub async fn my_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<HelpRequest>>, (StatusCode, Json<ErrorResponse>)> {
    if !state.app.sessions.is_authenticated().await {
        return Err(error_response(AppError::SignInRequired));
    }
    Ok(Json(state.app.my_requests().await))
}

/// A single request by id.
///
/// # Errors
///
/// - `404 Not Found`: no such request
pub async fn get_request(
    State(state): State<AppState>,
    Path(request_id): Path<RequestId>,
) -> Result<Json<HelpRequest>, (StatusCode, Json<ErrorResponse>)> {
    state
        .app
        .catalog
        .get(request_id)
        .await
        .map(Json)
        .ok_or_else(|| error_response(AppError::Catalog(CatalogError::RequestNotFound(request_id))))
}

/// Map pins for the currently visible requests that carry coordinates.
/// Free-text locations are display-only and never geocoded.
pub async fn map_markers(State(state): State<AppState>) -> Json<Vec<MapMarker>> {
    Json(state.app.map_markers().await)
}
