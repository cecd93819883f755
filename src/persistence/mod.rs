//! Persistence layer: PostgreSQL-backed stores for menu items, orders,
//! and payments.

pub mod models;
pub mod postgres;

pub use postgres::PostgresStore;
