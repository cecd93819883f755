//! Menu endpoints: add a dish, list the menu.
//!
//! Straight request → persistence → response mappings, mounted at the
//! root level.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreateMenuItemRequest, CreateMenuItemResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};
use crate::persistence::models::MenuItem;

/// `POST /yemek-ekle` — Add a menu item.
///
/// # Errors
///
/// Returns [`GatewayError::Persistence`] when the database is unreachable
/// or the insert fails.
#[utoipa::path(
    post,
    path = "/yemek-ekle",
    tag = "Menu",
    summary = "Add a menu item",
    request_body = CreateMenuItemRequest,
    responses(
        (status = 201, description = "Menu item stored", body = CreateMenuItemResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    )
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(req): Json<CreateMenuItemRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let yemek = state
        .store
        .create_menu_item(&req.ad, req.fiyat, req.aciklama.as_deref(), req.resim.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMenuItemResponse {
            message: "Yemek eklendi!".to_string(),
            yemek,
        }),
    ))
}

/// `GET /yemekler` — List every menu item.
///
/// # Errors
///
/// Returns [`GatewayError::Persistence`] when the database is unreachable.
#[utoipa::path(
    get,
    path = "/yemekler",
    tag = "Menu",
    summary = "List the menu",
    responses(
        (status = 200, description = "All stored menu items", body = Vec<MenuItem>),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    )
)]
pub async fn list_menu_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItem>>, GatewayError> {
    let liste = state.store.list_menu_items().await?;
    Ok(Json(liste))
}

/// Menu routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/yemek-ekle", post(create_menu_item))
        .route("/yemekler", get(list_menu_items))
}
