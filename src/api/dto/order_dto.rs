//! Order DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::models::Order;

/// Request body for `POST /api/siparis`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    /// Delivery address.
    pub adres: String,
    /// Ordered items; producer-defined shape.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub items: serde_json::Value,
    /// Order total.
    pub toplam: f64,
}

/// Response body for `POST /api/siparis` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    /// Confirmation message.
    pub message: String,
    /// The stored order.
    pub siparis: Order,
}

/// Query parameters for order listings.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderListParams {
    /// Optional status filter (e.g. `?durum=yolda`).
    #[serde(default)]
    pub durum: Option<String>,
}

/// Request body for `PUT /api/siparis/{id}/durum`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    /// New status string.
    pub durum: String,
}
