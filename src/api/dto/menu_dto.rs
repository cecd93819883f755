//! Menu DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::models::MenuItem;

/// Request body for `POST /yemek-ekle`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMenuItemRequest {
    /// Dish name.
    pub ad: String,
    /// Price.
    pub fiyat: f64,
    /// Optional description.
    #[serde(default)]
    pub aciklama: Option<String>,
    /// Optional image URL.
    #[serde(default)]
    pub resim: Option<String>,
}

/// Response body for `POST /yemek-ekle` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateMenuItemResponse {
    /// Confirmation message.
    pub message: String,
    /// The stored menu item.
    pub yemek: MenuItem,
}
