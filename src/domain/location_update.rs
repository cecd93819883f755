//! Opaque courier location payload.
//!
//! The relay does not validate, type, or persist location updates. The
//! payload is whatever JSON the producer sent, so the type is a thin
//! wrapper over [`serde_json::Value`]. Schema enforcement is left to
//! producers and consumers.

use serde::{Deserialize, Serialize};

/// A single location update as received from a producer.
///
/// Held only for the duration of one broadcast: never stored, never
/// deduplicated, never inspected beyond JSON framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationUpdate(serde_json::Value);

impl LocationUpdate {
    /// Wraps a raw JSON payload.
    #[must_use]
    pub const fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    /// Returns the payload exactly as received.
    #[must_use]
    pub const fn payload(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consumes the update, returning the payload.
    #[must_use]
    pub fn into_payload(self) -> serde_json::Value {
        self.0
    }
}
