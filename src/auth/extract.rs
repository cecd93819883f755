//! Request extractor for authenticated routes.
//!
//! [`AuthClaims`] reads the `Authorization: Bearer <token>` header and
//! verifies it against the shared [`crate::auth::AuthKeys`]. Protected
//! handlers take it as an argument; requests without a valid token are
//! rejected with `401` before the handler body runs.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use super::token::Claims;
use crate::app_state::AppState;
use crate::error::GatewayError;

/// Verified claims of the requesting participant.
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = GatewayError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| GatewayError::Unauthorized("missing bearer token".to_string()))?;

        let token = bearer_token(header)
            .ok_or_else(|| GatewayError::Unauthorized("missing bearer token".to_string()))?;

        let claims = state.auth.verify_token(token)?;
        Ok(Self(claims))
    }
}

/// Extracts the token from an `Authorization` header value.
fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").map(str::trim)
}
