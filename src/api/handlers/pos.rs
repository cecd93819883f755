//! Point-of-sale endpoints: the incoming order feed.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use super::order::parse_status_filter;
use crate::api::dto::OrderListParams;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};
use crate::persistence::models::Order;

/// `GET /api/pos/siparisler` — Order feed for the point-of-sale screen.
///
/// Same listing as `/api/siparis`, kept as its own mount for the POS
/// clients.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for an unknown status filter,
/// or [`GatewayError::Persistence`] when the database is unreachable.
#[utoipa::path(
    get,
    path = "/api/pos/siparisler",
    tag = "PointOfSale",
    summary = "Order feed",
    params(
        ("durum" = Option<String>, Query, description = "Status filter, e.g. `hazirlaniyor`"),
    ),
    responses(
        (status = 200, description = "Orders, newest first", body = Vec<Order>),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    )
)]
pub async fn order_feed(
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> Result<Json<Vec<Order>>, GatewayError> {
    let durum = parse_status_filter(params.durum.as_deref())?;
    let orders = state.store.list_orders(durum).await?;
    Ok(Json(orders))
}

/// Point-of-sale routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/pos/siparisler", get(order_feed))
}
