//! Wire envelope for relay events.
//!
//! Frames are JSON objects of the form `{"event": "...", "payload": ...}`.
//! The payload is producer-defined and never schema-checked by the relay.

use serde::{Deserialize, Serialize};

/// Event name a producer uses to push a location update.
pub const EVENT_LOCATION_UPDATE: &str = "konum-guncelle";

/// Event name under which updates are rebroadcast to every participant.
pub const EVENT_LOCATION_UPDATED: &str = "konum-guncellendi";

/// A single relay frame in either direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsEvent {
    /// Event name.
    pub event: String,
    /// Opaque event payload. A missing payload decodes as JSON `null`.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl WsEvent {
    /// Builds the broadcast frame for a location update payload.
    #[must_use]
    pub fn location_updated(payload: serde_json::Value) -> Self {
        Self {
            event: EVENT_LOCATION_UPDATED.to_string(),
            payload,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_event_with_payload() {
        let text = r#"{"event": "konum-guncelle", "payload": {"lat": 10, "lng": 20}}"#;
        let Ok(frame) = serde_json::from_str::<WsEvent>(text) else {
            panic!("frame should decode");
        };
        assert_eq!(frame.event, EVENT_LOCATION_UPDATE);
        assert_eq!(frame.payload, json!({"lat": 10, "lng": 20}));
    }

    #[test]
    fn missing_payload_defaults_to_null() {
        let text = r#"{"event": "konum-guncelle"}"#;
        let Ok(frame) = serde_json::from_str::<WsEvent>(text) else {
            panic!("frame should decode");
        };
        assert!(frame.payload.is_null());
    }

    #[test]
    fn broadcast_frame_round_trips() {
        let payload = json!({"lat": 10, "lng": 20});
        let frame = WsEvent::location_updated(payload.clone());

        let json = serde_json::to_string(&frame).unwrap_or_default();
        let Ok(parsed) = serde_json::from_str::<WsEvent>(&json) else {
            panic!("frame should re-decode");
        };
        assert_eq!(parsed.event, EVENT_LOCATION_UPDATED);
        assert_eq!(parsed.payload, payload);
    }
}
