//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::auth::AuthKeys;
use crate::domain::LocationBus;
use crate::persistence::PostgresStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Menu, order, and payment persistence.
    pub store: Arc<PostgresStore>,
    /// Broadcast bus for courier location updates.
    pub location_bus: LocationBus,
    /// Bearer token signing and verification keys.
    pub auth: Arc<AuthKeys>,
}
