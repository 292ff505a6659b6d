//! Payment API handlers.
//!
//! The processor boundary stays inside the library: these handlers only
//! carry the request id and the decimal amount. Card data never reaches
//! this server.

use axum::{extract::State, http::StatusCode, Json};
use neighborly::catalog::RequestId;
use neighborly::payment::{Payment, PaymentMethod};
use neighborly::AppError;
use serde::Deserialize;

use super::{error_response, AppState, ErrorResponse};
use crate::metrics;

#[derive(Debug, Deserialize)]
pub struct ProcessPaymentPayload {
    pub request_id: RequestId,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct AddMethodPayload {
    pub payment_method_id: String,
}

/// Pay or tip for a request. The receiver is the request owner.
///
/// # Request Body
///
/// ```json
/// { "request_id": "8e9f...", "amount": 25.0 }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: no session
/// - `404 Not Found`: no such request
/// - `400 Bad Request`: non-positive amount
/// - `402 Payment Required`: the processor declined; the attempt is
///   recorded with status `failed`
pub async fn process_payment(
    State(state): State<AppState>,
    Json(payload): Json<ProcessPaymentPayload>,
) -> Result<Json<Payment>, (StatusCode, Json<ErrorResponse>)> {
    match state
        .app
        .pay_for_request(payload.request_id, payload.amount)
        .await
    {
        Ok(payment) => {
            metrics::payments_processed_total("completed");
            Ok(Json(payment))
        }
        Err(e) => {
            if matches!(e, AppError::Payment(_)) {
                metrics::payments_processed_total("failed");
            }
            Err(error_response(e))
        }
    }
}

/// The attached payment methods.
pub async fn list_methods(State(state): State<AppState>) -> Json<Vec<PaymentMethod>> {
    Json(state.app.payments.payment_methods().await)
}

/// Attach a payment-method reference. The first one becomes the default.
pub async fn add_method(
    State(state): State<AppState>,
    Json(payload): Json<AddMethodPayload>,
) -> (StatusCode, Json<PaymentMethod>) {
    let method = state
        .app
        .payments
        .add_payment_method(&payload.payment_method_id)
        .await;
    (StatusCode::CREATED, Json(method))
}
