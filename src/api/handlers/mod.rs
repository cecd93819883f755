//! REST endpoint handlers organized by resource.

pub mod auth;
pub mod menu;
pub mod order;
pub mod payment;
pub mod pos;
pub mod rider;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes the resource routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth::routes())
        .merge(rider::routes())
        .merge(order::routes())
        .merge(payment::routes())
        .merge(pos::routes())
}
