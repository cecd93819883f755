//! End-to-end tests for the WebSocket location relay.

#![allow(clippy::panic)]

mod common;

use std::net::SocketAddr;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Opens a relay connection. The bus subscription is in place once the
/// upgrade response arrives, so updates published afterwards are observed.
async fn connect(addr: SocketAddr) -> WsClient {
    let Ok((ws, _)) = tokio_tungstenite::connect_async(format!("ws://{addr}/ws")).await else {
        panic!("websocket connect failed");
    };
    ws
}

async fn send_location(ws: &mut WsClient, payload: Value) {
    let frame = json!({"event": "konum-guncelle", "payload": payload});
    let Ok(()) = ws.send(Message::text(frame.to_string())).await else {
        panic!("send failed");
    };
}

/// Reads frames until the next `konum-guncellendi` event, returning its
/// payload.
async fn next_location(ws: &mut WsClient) -> Value {
    loop {
        let Some(Ok(msg)) = ws.next().await else {
            panic!("connection ended before an update arrived");
        };
        if let Message::Text(text) = msg {
            let Ok(frame) = serde_json::from_str::<Value>(text.as_str()) else {
                panic!("frame is not JSON");
            };
            if frame.get("event").and_then(|v| v.as_str()) == Some("konum-guncellendi") {
                let Some(payload) = frame.get("payload") else {
                    panic!("frame has no payload");
                };
                return payload.clone();
            }
        }
    }
}

#[tokio::test]
async fn update_reaches_all_participants_including_sender() {
    let addr = common::spawn_gateway().await;
    let mut c1 = connect(addr).await;
    let mut c2 = connect(addr).await;

    let payload = json!({"lat": 10, "lng": 20});
    send_location(&mut c1, payload.clone()).await;

    assert_eq!(next_location(&mut c1).await, payload);
    assert_eq!(next_location(&mut c2).await, payload);
}

#[tokio::test]
async fn disconnected_participant_receives_nothing_further() {
    let addr = common::spawn_gateway().await;
    let mut c1 = connect(addr).await;
    let mut c2 = connect(addr).await;

    let first = json!({"lat": 10, "lng": 20});
    send_location(&mut c1, first.clone()).await;
    assert_eq!(next_location(&mut c1).await, first);
    assert_eq!(next_location(&mut c2).await, first);

    let Ok(()) = c2.close(None).await else {
        panic!("close failed");
    };
    // Give the relay a moment to drop the receiver.
    tokio::time::sleep(Duration::from_millis(100)).await;

    send_location(&mut c1, json!({"lat": 11, "lng": 21})).await;
    assert_eq!(next_location(&mut c1).await, json!({"lat": 11, "lng": 21}));

    // Whatever is still queued on the closed connection, it is not the
    // second update.
    while let Some(Ok(msg)) = c2.next().await {
        if let Message::Text(text) = msg {
            assert!(
                !text.as_str().contains("\"lat\":11"),
                "closed connection must not receive updates"
            );
        }
    }
}

#[tokio::test]
async fn updates_from_one_sender_arrive_in_order() {
    let addr = common::spawn_gateway().await;
    let mut c1 = connect(addr).await;
    let mut c2 = connect(addr).await;

    for i in 0..5 {
        send_location(&mut c1, json!({"seq": i})).await;
    }

    for i in 0..5 {
        let payload = next_location(&mut c2).await;
        assert_eq!(payload.get("seq").and_then(|v| v.as_i64()), Some(i));
    }
}

#[tokio::test]
async fn malformed_payload_passes_through_unchanged() {
    let addr = common::spawn_gateway().await;
    let mut c1 = connect(addr).await;
    let mut c2 = connect(addr).await;

    // No lat/lng, wrong types: the relay forwards it anyway.
    let payload = json!({"lat": "bozuk", "eksik": true, "dizi": [1, null]});
    send_location(&mut c1, payload.clone()).await;

    assert_eq!(next_location(&mut c2).await, payload);
}

#[tokio::test]
async fn unknown_events_are_not_rebroadcast() {
    let addr = common::spawn_gateway().await;
    let mut c1 = connect(addr).await;
    let mut c2 = connect(addr).await;

    let frame = json!({"event": "yemek-ekle", "payload": {"ad": "pide"}});
    let Ok(()) = c1.send(Message::text(frame.to_string())).await else {
        panic!("send failed");
    };

    // The next update observed must be the real location event, not the
    // unknown one.
    let payload = json!({"lat": 10, "lng": 20});
    send_location(&mut c1, payload.clone()).await;
    assert_eq!(next_location(&mut c2).await, payload);
}
