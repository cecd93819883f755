//! Order endpoints: create, list, fetch, and update status.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::{
    CreateOrderRequest, CreateOrderResponse, OrderListParams, UpdateOrderStatusRequest,
};
use crate::app_state::AppState;
use crate::domain::OrderStatus;
use crate::error::{ErrorResponse, GatewayError};
use crate::persistence::models::Order;

/// `POST /api/siparis` — Create an order.
///
/// # Errors
///
/// Returns [`GatewayError::Persistence`] when the database is unreachable.
#[utoipa::path(
    post,
    path = "/api/siparis",
    tag = "Orders",
    summary = "Create an order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order stored", body = CreateOrderResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let siparis = state
        .store
        .create_order(&req.adres, &req.items, req.toplam)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            message: "Sipariş alındı!".to_string(),
            siparis,
        }),
    ))
}

/// `GET /api/siparis` — List orders, optionally filtered by status.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for an unknown status filter,
/// or [`GatewayError::Persistence`] when the database is unreachable.
#[utoipa::path(
    get,
    path = "/api/siparis",
    tag = "Orders",
    summary = "List orders",
    params(
        ("durum" = Option<String>, Query, description = "Status filter, e.g. `yolda`"),
    ),
    responses(
        (status = 200, description = "Orders, newest first", body = Vec<Order>),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> Result<Json<Vec<Order>>, GatewayError> {
    let durum = parse_status_filter(params.durum.as_deref())?;
    let orders = state.store.list_orders(durum).await?;
    Ok(Json(orders))
}

/// `GET /api/siparis/{id}` — Fetch a single order.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] if no such order exists, or
/// [`GatewayError::Persistence`] when the database is unreachable.
#[utoipa::path(
    get,
    path = "/api/siparis/{id}",
    tag = "Orders",
    summary = "Fetch an order",
    params(
        ("id" = uuid::Uuid, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "The order", body = Order),
        (status = 404, description = "No such order", body = ErrorResponse),
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<Order>, GatewayError> {
    let order = state.store.get_order(id).await?;
    Ok(Json(order))
}

/// `PUT /api/siparis/{id}/durum` — Update an order's status.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for an unknown status,
/// [`GatewayError::NotFound`] if no such order exists, or
/// [`GatewayError::Persistence`] when the database is unreachable.
#[utoipa::path(
    put,
    path = "/api/siparis/{id}/durum",
    tag = "Orders",
    summary = "Update order status",
    params(
        ("id" = uuid::Uuid, Path, description = "Order id"),
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Updated order", body = Order),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 404, description = "No such order", body = ErrorResponse),
    )
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Result<Json<Order>, GatewayError> {
    let durum = OrderStatus::parse(&req.durum)
        .ok_or_else(|| GatewayError::InvalidRequest(format!("unknown status: {}", req.durum)))?;
    let order = state.store.update_order_status(id, durum).await?;
    Ok(Json(order))
}

/// Parses an optional `?durum=` filter string.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for an unknown status string.
pub(super) fn parse_status_filter(
    durum: Option<&str>,
) -> Result<Option<OrderStatus>, GatewayError> {
    durum
        .map(|s| {
            OrderStatus::parse(s)
                .ok_or_else(|| GatewayError::InvalidRequest(format!("unknown status: {s}")))
        })
        .transpose()
}

/// Order routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/siparis", post(create_order).get(list_orders))
        .route("/siparis/{id}", get(get_order))
        .route("/siparis/{id}/durum", put(update_order_status))
}
