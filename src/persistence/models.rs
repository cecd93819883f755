//! Database models for menu items, orders, and payments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A menu item row from the `yemekler` table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    /// Row identifier.
    pub id: Uuid,
    /// Dish name.
    pub ad: String,
    /// Price.
    pub fiyat: f64,
    /// Optional description.
    pub aciklama: Option<String>,
    /// Optional image URL.
    pub resim: Option<String>,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// An order row from the `siparisler` table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Row identifier.
    pub id: Uuid,
    /// Delivery address.
    pub adres: String,
    /// Ordered items as opaque JSON.
    #[schema(value_type = Object)]
    pub items: serde_json::Value,
    /// Order total.
    pub toplam: f64,
    /// Current status string (see [`crate::domain::OrderStatus`]).
    pub durum: String,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last status change.
    pub updated_at: DateTime<Utc>,
}

/// A payment row from the `odemeler` table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    /// Row identifier.
    pub id: Uuid,
    /// Order this payment belongs to.
    pub siparis_id: Uuid,
    /// Amount paid.
    pub tutar: f64,
    /// Payment method (e.g. `"kart"`, `"nakit"`).
    pub yontem: String,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}
