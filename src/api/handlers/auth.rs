//! Auth endpoints: demo token issuance.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::TokenResponse;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// Fixed subject used by the demo token endpoint.
const DEMO_USER_ID: &str = "64f0c1e2a9b3d4f5e6a7b8c9";

/// `POST /api/auth/demo-token` — Issue a demo bearer token.
///
/// Mints a token for a fixed demo subject with role `user`, valid for the
/// configured lifetime. Intended for trying out the protected routes.
///
/// # Errors
///
/// Returns [`GatewayError::Internal`] if signing fails.
#[utoipa::path(
    post,
    path = "/api/auth/demo-token",
    tag = "Auth",
    summary = "Issue a demo token",
    responses(
        (status = 200, description = "Signed token", body = TokenResponse),
        (status = 500, description = "Signing failure", body = ErrorResponse),
    )
)]
pub async fn demo_token(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let token = state.auth.issue_token(DEMO_USER_ID, "user")?;
    Ok(Json(TokenResponse { token }))
}

/// Auth routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/demo-token", post(demo_token))
}
