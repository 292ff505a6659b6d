//! View state API handlers.
//!
//! Navigation is synchronous: the response carries the view actually
//! entered. An unauthenticated navigation to a protected view lands back on
//! the feed with `sign_in_required: true`. That is a `200`, not an error,
//! because the redirect is recoverable by signing in.

use axum::{extract::State, Json};
use neighborly::{Navigation, View};
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct ViewStateResponse {
    pub view: View,
    pub sign_in_prompt: bool,
}

#[derive(Debug, Deserialize)]
pub struct NavigatePayload {
    pub view: View,
}

/// The current view and whether the sign-in prompt is raised.
pub async fn current_view(State(state): State<AppState>) -> Json<ViewStateResponse> {
    Json(ViewStateResponse {
        view: state.app.current_view().await,
        sign_in_prompt: state.app.sign_in_prompt().await,
    })
}

/// Handle a navigation intent through the access gate.
///
/// # Request Body
///
/// ```json
/// { "view": "my-requests" }
/// ```
pub async fn navigate(
    State(state): State<AppState>,
    Json(payload): Json<NavigatePayload>,
) -> Json<Navigation> {
    Json(state.app.navigate(payload.view).await)
}
