//! Domain layer: relay primitives and order domain types.
//!
//! Contains the courier-location broadcast bus, the opaque location update
//! payload, per-connection identity, and the order status set.

pub mod connection_id;
pub mod location_bus;
pub mod location_update;
pub mod order_status;

pub use connection_id::ConnectionId;
pub use location_bus::LocationBus;
pub use location_update::LocationUpdate;
pub use order_status::OrderStatus;
