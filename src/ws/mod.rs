//! WebSocket layer: the courier-location relay.
//!
//! The endpoint at `/ws` upgrades to a bidirectional event channel. Every
//! `konum-guncelle` event received from any participant is rebroadcast as
//! `konum-guncellendi` to all connected participants, sender included.
//! There is no filtering, no rooms, and no delivery guarantee beyond best
//! effort.

pub mod connection;
pub mod handler;
pub mod messages;
