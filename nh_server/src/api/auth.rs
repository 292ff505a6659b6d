//! Authentication API handlers.
//!
//! Sign-in consumes the opaque credential issued by the external identity
//! provider; the server never sees a password. Sign-out is idempotent.
//!
//! # Examples
//!
//! Sign in:
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/auth/signin \
//!   -H "Content-Type: application/json" \
//!   -d '{"credential": "<three-segment signed token>"}'
//! ```

use axum::{extract::State, http::StatusCode, Json};
use neighborly::identity::{User, UserUpdate};
use neighborly::AppError;
use serde::Deserialize;

use super::{error_response, AppState, ErrorResponse};
use crate::metrics;

#[derive(Debug, Deserialize)]
pub struct SignInPayload {
    pub credential: String,
}

/// Sign in with an identity provider credential.
///
/// # Response
///
/// `200 OK` with the session user. First-time users start with the default
/// reputation.
///
/// # Errors
///
/// - `401 Unauthorized`: malformed credential or missing claims; any prior
///   session is left untouched
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInPayload>,
) -> Result<Json<User>, (StatusCode, Json<ErrorResponse>)> {
    match state.app.sign_in(&payload.credential).await {
        Ok(user) => {
            metrics::signins_total("accepted");
            Ok(Json(user))
        }
        Err(e) => {
            metrics::signins_total("rejected");
            Err(error_response(e))
        }
    }
}

/// Clear the session. Always succeeds, signed in or not.
pub async fn sign_out(State(state): State<AppState>) -> StatusCode {
    state.app.sign_out().await;
    StatusCode::NO_CONTENT
}

/// The current session user.
///
/// # Errors
///
/// - `401 Unauthorized`: no session
pub async fn me(
    State(state): State<AppState>,
) -> Result<Json<User>, (StatusCode, Json<ErrorResponse>)> {
    state
        .app
        .sessions
        .current_user()
        .await
        .map(Json)
        .ok_or_else(|| error_response(AppError::SignInRequired))
}

/// Merge a partial profile update into the session user.
///
/// # Request Body
///
/// ```json
/// { "address": "12 Maple St", "bio": "Happy to help" }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: no session
pub async fn update_me(
    State(state): State<AppState>,
    Json(update): Json<UserUpdate>,
) -> Result<Json<User>, (StatusCode, Json<ErrorResponse>)> {
    state
        .app
        .update_profile(update)
        .await
        .map(Json)
        .map_err(error_response)
}
