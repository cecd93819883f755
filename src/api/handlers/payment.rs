//! Payment endpoints: record a payment, list payments for an order.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreatePaymentRequest, CreatePaymentResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};
use crate::persistence::models::Payment;

/// `POST /api/payment` — Record a payment for an order.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if the referenced order does not
/// exist, or [`GatewayError::Persistence`] when the database is
/// unreachable.
#[utoipa::path(
    post,
    path = "/api/payment",
    tag = "Payments",
    summary = "Record a payment",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment stored", body = CreatePaymentResponse),
        (status = 404, description = "No such order", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    )
)]
pub async fn create_payment(
    State(state): State<AppState>,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    // The order must exist before a payment is recorded against it.
    state.store.get_order(req.siparis_id).await?;

    let odeme = state
        .store
        .create_payment(req.siparis_id, req.tutar, &req.yontem)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePaymentResponse {
            message: "Ödeme alındı!".to_string(),
            odeme,
        }),
    ))
}

/// `GET /api/payment/siparis/{id}` — Payments recorded for one order.
///
/// # Errors
///
/// Returns [`GatewayError::Persistence`] when the database is unreachable.
#[utoipa::path(
    get,
    path = "/api/payment/siparis/{id}",
    tag = "Payments",
    summary = "List payments for an order",
    params(
        ("id" = uuid::Uuid, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Payments, oldest first", body = Vec<Payment>),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    )
)]
pub async fn payments_for_order(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<Vec<Payment>>, GatewayError> {
    let payments = state.store.payments_for_order(id).await?;
    Ok(Json(payments))
}

/// Payment routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payment", post(create_payment))
        .route("/payment/siparis/{id}", get(payments_for_order))
}
