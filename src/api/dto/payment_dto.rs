//! Payment DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::persistence::models::Payment;

/// Request body for `POST /api/payment`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    /// Order being paid for.
    pub siparis_id: Uuid,
    /// Amount paid.
    pub tutar: f64,
    /// Payment method (e.g. `"kart"`, `"nakit"`).
    pub yontem: String,
}

/// Response body for `POST /api/payment` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatePaymentResponse {
    /// Confirmation message.
    pub message: String,
    /// The stored payment.
    pub odeme: Payment,
}
