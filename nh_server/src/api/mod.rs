//! HTTP REST API for the community help platform.
//!
//! The API is a thin surface over the shared [`neighborly::App`] context:
//! handlers translate HTTP intents into controller calls and render the
//! results as JSON. The app context is constructed once in `main` and
//! shared by every handler.
//!
//! # Modules
//!
//! - [`auth`]: Sign-in with a provider credential, sign-out, profile
//! - [`requests`]: The feed, request creation, my-requests, map markers
//! - [`view`]: The view state machine and its access gate
//! - [`locale`]: Languages and translation
//! - [`payments`]: Payment processing and payment methods
//! - [`request_id`]: Request-id propagation middleware
//!
//! # Endpoints Overview
//!
//! ```text
//! GET    /health                     - Health check (public)
//! POST   /api/v1/auth/signin         - Sign in with a provider credential
//! POST   /api/v1/auth/signout        - Sign out (idempotent)
//! GET    /api/v1/auth/me             - Current session user
//! PATCH  /api/v1/auth/me             - Merge a profile update
//! GET    /api/v1/requests            - Visible feed (search/filter params)
//! POST   /api/v1/requests            - Create a request (session required)
//! GET    /api/v1/requests/mine       - Requests owned by the session user
//! GET    /api/v1/requests/{id}       - Single request
//! GET    /api/v1/map/markers         - Map pins for requests with coordinates
//! GET    /api/v1/view                - Current view state
//! POST   /api/v1/view                - Navigate (access gate applies)
//! GET    /api/v1/languages           - Available display languages
//! PUT    /api/v1/language            - Change the display language
//! POST   /api/v1/translate           - Translate text (degrades to input)
//! POST   /api/v1/payments            - Pay or tip for a request
//! GET    /api/v1/payments/methods    - List payment methods
//! POST   /api/v1/payments/methods    - Attach a payment method
//! ```
//!
//! An auth-gated route without a session answers `401` with
//! `sign_in_required: true` in the body, the HTTP rendering of the
//! sign-in prompt. No failed operation takes the server down.

pub mod auth;
pub mod locale;
pub mod payments;
pub mod request_id;
pub mod requests;
pub mod view;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use neighborly::catalog::CatalogError;
use neighborly::identity::IdentityError;
use neighborly::payment::PaymentError;
use neighborly::{App, AppError};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// Cloned per request (cheap: one Arc) and carrying the single application
/// context.
#[derive(Clone)]
pub struct AppState {
    pub app: Arc<App>,
}

/// Error body rendered for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// The HTTP rendering of the sign-in prompt
    pub sign_in_required: bool,
}

/// Map a controller error to its HTTP rendering.
pub(crate) fn error_response(err: AppError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        AppError::SignInRequired => StatusCode::UNAUTHORIZED,
        AppError::Identity(IdentityError::MalformedCredential | IdentityError::MissingClaim(_)) => {
            StatusCode::UNAUTHORIZED
        }
        AppError::Identity(IdentityError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Catalog(CatalogError::RequestNotFound(_)) => StatusCode::NOT_FOUND,
        AppError::Catalog(_) => StatusCode::BAD_REQUEST,
        AppError::Payment(PaymentError::InvalidAmount(_)) => StatusCode::BAD_REQUEST,
        AppError::Payment(PaymentError::Rejected(_)) => StatusCode::PAYMENT_REQUIRED,
    };
    let sign_in_required = matches!(err, AppError::SignInRequired);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            sign_in_required,
        }),
    )
}

/// Create the complete API router with all endpoints and middleware.
///
/// # Arguments
///
/// - `state`: Application state carrying the app context
///
/// # Returns
///
/// Configured Axum router ready to serve requests
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", create_v1_router())
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API v1 routes, versioned so the surface can evolve.
fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/auth/signin", post(auth::sign_in))
        .route("/auth/signout", post(auth::sign_out))
        .route("/auth/me", get(auth::me).patch(auth::update_me))
        .route(
            "/requests",
            get(requests::list_requests).post(requests::create_request),
        )
        .route("/requests/mine", get(requests::my_requests))
        .route("/requests/{request_id}", get(requests::get_request))
        .route("/map/markers", get(requests::map_markers))
        .route("/view", get(view::current_view).post(view::navigate))
        .route("/languages", get(locale::list_languages))
        .route("/language", put(locale::change_language))
        .route("/translate", post(locale::translate))
        .route("/payments", post(payments::process_payment))
        .route(
            "/payments/methods",
            get(payments::list_methods).post(payments::add_method),
        )
}

/// Health check endpoint for monitoring and load balancers.
///
/// The server has no external dependencies to probe; reports the catalog
/// size alongside liveness.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/health
/// # {"status":"healthy","version":"0.1.0","requests":5,"timestamp":"..."}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let requests = state.app.catalog.len().await;

    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "requests": requests,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
