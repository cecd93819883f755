//! Opaque identifier for one realtime connection.
//!
//! [`ConnectionId`] wraps a [`uuid::Uuid`] (v4). It exists only so that
//! connect and disconnect log lines can identify a participant; the relay
//! keeps no other per-connection state.

use std::fmt;

/// Unique identifier for one WebSocket participant.
///
/// Assigned at upgrade time and used purely for lifecycle logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionId(uuid::Uuid);

impl ConnectionId {
    /// Creates a new random `ConnectionId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_unique_ids() {
        let a = ConnectionId::new();
        let b = ConnectionId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_uuid_format() {
        let id = ConnectionId::new();
        let s = format!("{id}");
        assert_eq!(s.len(), 36); // UUID string length
        assert!(s.contains('-'));
    }
}
