//! PostgreSQL implementation of the persistence layer.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{MenuItem, Order, Payment};
use crate::domain::OrderStatus;
use crate::error::GatewayError;

type MenuItemRow = (Uuid, String, f64, Option<String>, Option<String>, DateTime<Utc>);
type OrderRow = (
    Uuid,
    String,
    serde_json::Value,
    f64,
    String,
    DateTime<Utc>,
    DateTime<Utc>,
);
type PaymentRow = (Uuid, Uuid, f64, String, DateTime<Utc>);

const ORDER_COLUMNS: &str = "id, adres, items, toplam, durum, created_at, updated_at";

/// PostgreSQL-backed store using `sqlx::PgPool`.
///
/// The pool is created lazily: the gateway starts and serves requests even
/// when the database is unreachable, and each query surfaces the failure
/// as a [`GatewayError::Persistence`].
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a menu item and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::Persistence`] on database failure.
    pub async fn create_menu_item(
        &self,
        ad: &str,
        fiyat: f64,
        aciklama: Option<&str>,
        resim: Option<&str>,
    ) -> Result<MenuItem, GatewayError> {
        let row = sqlx::query_as::<_, MenuItemRow>(
            "INSERT INTO yemekler (ad, fiyat, aciklama, resim) VALUES ($1, $2, $3, $4) \
             RETURNING id, ad, fiyat, aciklama, resim, created_at",
        )
        .bind(ad)
        .bind(fiyat)
        .bind(aciklama)
        .bind(resim)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(menu_item_from_row(row))
    }

    /// Returns every stored menu item, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::Persistence`] on database failure.
    pub async fn list_menu_items(&self) -> Result<Vec<MenuItem>, GatewayError> {
        let rows = sqlx::query_as::<_, MenuItemRow>(
            "SELECT id, ad, fiyat, aciklama, resim, created_at FROM yemekler ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(rows.into_iter().map(menu_item_from_row).collect())
    }

    /// Inserts a new order in the initial status and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::Persistence`] on database failure.
    pub async fn create_order(
        &self,
        adres: &str,
        items: &serde_json::Value,
        toplam: f64,
    ) -> Result<Order, GatewayError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "INSERT INTO siparisler (adres, items, toplam) VALUES ($1, $2, $3) \
             RETURNING id, adres, items, toplam, durum, created_at, updated_at",
        )
        .bind(adres)
        .bind(items)
        .bind(toplam)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(order_from_row(row))
    }

    /// Returns orders, newest first, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::Persistence`] on database failure.
    pub async fn list_orders(&self, durum: Option<OrderStatus>) -> Result<Vec<Order>, GatewayError> {
        let rows = if let Some(durum) = durum {
            sqlx::query_as::<_, OrderRow>(&format!(
                "SELECT {ORDER_COLUMNS} FROM siparisler WHERE durum = $1 ORDER BY created_at DESC",
            ))
            .bind(durum.as_str())
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, OrderRow>(&format!(
                "SELECT {ORDER_COLUMNS} FROM siparisler ORDER BY created_at DESC",
            ))
            .fetch_all(&self.pool)
            .await
        }
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(rows.into_iter().map(order_from_row).collect())
    }

    /// Returns a single order by id.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if no such order exists, or a
    /// [`GatewayError::Persistence`] on database failure.
    pub async fn get_order(&self, id: Uuid) -> Result<Order, GatewayError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM siparisler WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        row.map(order_from_row)
            .ok_or_else(|| GatewayError::NotFound(format!("order {id}")))
    }

    /// Updates an order's status and returns the updated row.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] if no such order exists, or a
    /// [`GatewayError::Persistence`] on database failure.
    pub async fn update_order_status(
        &self,
        id: Uuid,
        durum: OrderStatus,
    ) -> Result<Order, GatewayError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "UPDATE siparisler SET durum = $2, updated_at = now() WHERE id = $1 \
             RETURNING {ORDER_COLUMNS}",
        ))
        .bind(id)
        .bind(durum.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        row.map(order_from_row)
            .ok_or_else(|| GatewayError::NotFound(format!("order {id}")))
    }

    /// Records a payment for an order and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::Persistence`] on database failure.
    pub async fn create_payment(
        &self,
        siparis_id: Uuid,
        tutar: f64,
        yontem: &str,
    ) -> Result<Payment, GatewayError> {
        let row = sqlx::query_as::<_, PaymentRow>(
            "INSERT INTO odemeler (siparis_id, tutar, yontem) VALUES ($1, $2, $3) \
             RETURNING id, siparis_id, tutar, yontem, created_at",
        )
        .bind(siparis_id)
        .bind(tutar)
        .bind(yontem)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(payment_from_row(row))
    }

    /// Returns payments recorded for one order, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::Persistence`] on database failure.
    pub async fn payments_for_order(&self, siparis_id: Uuid) -> Result<Vec<Payment>, GatewayError> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            "SELECT id, siparis_id, tutar, yontem, created_at FROM odemeler \
             WHERE siparis_id = $1 ORDER BY created_at",
        )
        .bind(siparis_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(rows.into_iter().map(payment_from_row).collect())
    }
}

fn menu_item_from_row((id, ad, fiyat, aciklama, resim, created_at): MenuItemRow) -> MenuItem {
    MenuItem {
        id,
        ad,
        fiyat,
        aciklama,
        resim,
        created_at,
    }
}

fn order_from_row((id, adres, items, toplam, durum, created_at, updated_at): OrderRow) -> Order {
    Order {
        id,
        adres,
        items,
        toplam,
        durum,
        created_at,
        updated_at,
    }
}

fn payment_from_row((id, siparis_id, tutar, yontem, created_at): PaymentRow) -> Payment {
    Payment {
        id,
        siparis_id,
        tutar,
        yontem,
        created_at,
    }
}
