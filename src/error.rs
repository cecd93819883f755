//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to an HTTP status code and the JSON error body served by the
//! public API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "message": "Hata oluştu",
///   "error": "connection refused"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Short user-facing message.
    pub message: String,
    /// Underlying error text, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing or invalid bearer token.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the short message served to clients for this variant.
    ///
    /// The underlying error text travels separately in
    /// [`ErrorResponse::error`].
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "Geçersiz istek",
            Self::NotFound(_) => "Bulunamadı",
            Self::Unauthorized(_) => "Yetkisiz",
            Self::Persistence(_) | Self::Internal(_) => "Hata oluştu",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            message: self.user_message().to_string(),
            error: Some(self.to_string()),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn persistence_maps_to_server_error() {
        let err = GatewayError::Persistence("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "Hata oluştu");
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let err = GatewayError::Unauthorized("expired".to_string());
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn error_body_keeps_underlying_text() {
        let err = GatewayError::Persistence("pool timed out".to_string());
        let body = ErrorResponse {
            message: err.user_message().to_string(),
            error: Some(err.to_string()),
        };
        let json = serde_json::to_string(&body).unwrap_or_default();
        assert!(json.contains("Hata oluştu"));
        assert!(json.contains("pool timed out"));
    }
}
