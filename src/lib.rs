//! # kurye-gateway
//!
//! REST API and WebSocket gateway for a food-delivery backend.
//!
//! HTTP endpoints cover the menu, demo token issuance, and the rider /
//! order / payment / point-of-sale routers. The WebSocket endpoint at `/ws`
//! is the courier-location relay: every `konum-guncelle` event received
//! from any connected participant is rebroadcast unchanged to all connected
//! participants (the sender included) as `konum-guncellendi`. The relay is
//! a pure pass-through with no per-message state and no delivery guarantee
//! beyond best effort.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── Location Relay (ws/)
//!     │
//!     ├── AuthKeys (auth/)
//!     ├── LocationBus (domain/)
//!     │
//!     └── PostgreSQL Persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod ws;
