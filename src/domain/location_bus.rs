//! Broadcast channel for courier location updates.
//!
//! [`LocationBus`] wraps a [`tokio::sync::broadcast`] channel. Every
//! location update received over any WebSocket connection is published
//! through the bus, and every connection subscribes once on upgrade, so
//! each update fans out to all connected participants — the sender
//! included.
//!
//! Delivery is at-most-once, best effort: a lagging receiver loses the
//! oldest updates, a dropped receiver simply stops being a target, and no
//! acknowledgement flows back to the sender.

use tokio::sync::broadcast;

use super::LocationUpdate;

/// Broadcast bus for [`LocationUpdate`]s.
///
/// Backed by a `tokio::broadcast` channel with a configurable capacity.
/// Updates from a single publisher reach each receiver in publish order;
/// interleaving across publishers is channel arrival order.
#[derive(Debug, Clone)]
pub struct LocationBus {
    sender: broadcast::Sender<LocationUpdate>,
}

impl LocationBus {
    /// Creates a new `LocationBus` with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an update to all subscribers.
    ///
    /// Returns the number of receivers that received the update.
    /// With no active receivers the update is silently dropped.
    pub fn publish(&self, update: LocationUpdate) -> usize {
        self.sender.send(update).unwrap_or(0)
    }

    /// Creates a new receiver that will observe all future updates.
    ///
    /// Each WebSocket connection calls this once on upgrade.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LocationUpdate> {
        self.sender.subscribe()
    }

    /// Returns the current number of active receivers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
