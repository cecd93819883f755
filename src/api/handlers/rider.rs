//! Rider endpoints. Every route here requires a valid bearer token; the
//! [`AuthClaims`] extractor rejects the request before the handler runs.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::auth::AuthClaims;
use crate::domain::OrderStatus;
use crate::error::{ErrorResponse, GatewayError};
use crate::persistence::models::Order;

/// Profile of the authenticated rider, taken from the token claims.
#[derive(Debug, Serialize, ToSchema)]
struct RiderProfileResponse {
    id: String,
    rol: String,
}

/// `GET /api/rider/profil` — Profile of the authenticated rider.
#[utoipa::path(
    get,
    path = "/api/rider/profil",
    tag = "Riders",
    summary = "Rider profile",
    responses(
        (status = 200, description = "Verified claims", body = RiderProfileResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
pub async fn profile(AuthClaims(claims): AuthClaims) -> Json<RiderProfileResponse> {
    Json(RiderProfileResponse {
        id: claims.id,
        rol: claims.rol,
    })
}

/// `GET /api/rider/siparisler` — Orders currently out for delivery.
///
/// # Errors
///
/// Returns [`GatewayError::Persistence`] when the database is unreachable.
#[utoipa::path(
    get,
    path = "/api/rider/siparisler",
    tag = "Riders",
    summary = "Orders out for delivery",
    responses(
        (status = 200, description = "Orders with status `yolda`", body = Vec<Order>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    )
)]
pub async fn active_orders(
    AuthClaims(_claims): AuthClaims,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>, GatewayError> {
    let orders = state.store.list_orders(Some(OrderStatus::Yolda)).await?;
    Ok(Json(orders))
}

/// Rider routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rider/profil", get(profile))
        .route("/rider/siparisler", get(active_orders))
}
