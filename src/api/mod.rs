//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Menu and system endpoints are mounted at the root level; everything
//! else lives under `/api`.

pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::menu::routes())
        .merge(handlers::system::routes())
}
