//! Auth DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Response body for `POST /api/auth/demo-token`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed bearer token.
    pub token: String,
}
