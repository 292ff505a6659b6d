//! Locale and translation API handlers.

use axum::{extract::State, http::StatusCode, Json};
use neighborly::locale::{Language, LocaleError};
use serde::{Deserialize, Serialize};

use super::{AppState, ErrorResponse};

#[derive(Debug, Deserialize)]
pub struct ChangeLanguagePayload {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslatePayload {
    pub text: String,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub text: String,
}

/// The fixed table of selectable display languages.
pub async fn list_languages(State(state): State<AppState>) -> Json<Vec<Language>> {
    Json(state.app.locale.available_languages())
}

/// Change the display language and persist the preference.
///
/// # Errors
///
/// - `400 Bad Request`: unknown language code
pub async fn change_language(
    State(state): State<AppState>,
    Json(payload): Json<ChangeLanguagePayload>,
) -> Result<Json<Language>, (StatusCode, Json<ErrorResponse>)> {
    state
        .app
        .locale
        .change_language(&payload.code)
        .await
        .map(Json)
        .map_err(|e| {
            let status = match &e {
                LocaleError::UnknownLanguage(_) => StatusCode::BAD_REQUEST,
                LocaleError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                    sign_in_required: false,
                }),
            )
        })
}

/// Translate text into the selected (or an explicit) language.
///
/// Always answers `200`: an unavailable translation degrades to the input
/// text and is never surfaced as an error.
pub async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslatePayload>,
) -> Json<TranslateResponse> {
    let text = match payload.target {
        Some(target) => state.app.locale.translate_to(&payload.text, &target).await,
        None => state.app.locale.translate(&payload.text).await,
    };
    Json(TranslateResponse { text })
}
