//! Relay loop for a single WebSocket connection.
//!
//! Each connection both produces and consumes location updates: incoming
//! `konum-guncelle` frames are published to the [`LocationBus`], and every
//! update on the bus is forwarded to the peer as `konum-guncellendi`. The
//! loop holds no state beyond its bus receiver, so disconnecting simply
//! drops the receiver.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use super::messages::{EVENT_LOCATION_UPDATE, WsEvent};
use crate::domain::{ConnectionId, LocationBus, LocationUpdate};

/// Runs the relay loop for one WebSocket connection until it closes.
///
/// Delivery to this peer is fire-and-forget: a failed send ends this loop
/// without affecting delivery to any other connection, and in-flight
/// broadcasts are never cancelled.
pub async fn run_connection(
    socket: WebSocket,
    connection_id: ConnectionId,
    bus: LocationBus,
    mut updates: broadcast::Receiver<LocationUpdate>,
) {
    tracing::info!(%connection_id, "courier connected");

    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            // Incoming frame from this participant
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(update) = parse_client_frame(&text) {
                            bus.publish(update);
                        }
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    _ => {}
                }
            }
            // Update published by any participant (this one included)
            update = updates.recv() => {
                match update {
                    Ok(update) => {
                        let frame = WsEvent::location_updated(update.into_payload());
                        let json = serde_json::to_string(&frame).unwrap_or_default();
                        if ws_tx.send(Message::text(json)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(%connection_id, lagged = n, "connection lagged behind location bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::info!(%connection_id, "courier disconnected");
}

/// Parses an incoming text frame, returning the location update to
/// rebroadcast.
///
/// Frames that are not a JSON envelope and events other than
/// `konum-guncelle` are ignored. The payload itself is never validated:
/// partial or malformed location objects are forwarded as-is.
fn parse_client_frame(text: &str) -> Option<LocationUpdate> {
    let frame: WsEvent = serde_json::from_str(text).ok()?;
    if frame.event == EVENT_LOCATION_UPDATE {
        Some(LocationUpdate::new(frame.payload))
    } else {
        None
    }
}
