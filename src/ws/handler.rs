//! Axum WebSocket upgrade handler.

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_connection;
use crate::app_state::AppState;
use crate::domain::ConnectionId;

/// `GET /ws` — Upgrade HTTP connection to the location relay.
///
/// The bus subscription is taken before the upgrade completes, so a
/// participant observes every update published after its handshake.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let connection_id = ConnectionId::new();
    let bus = state.location_bus.clone();
    let updates = bus.subscribe();

    ws.on_upgrade(move |socket| run_connection(socket, connection_id, bus, updates))
}
