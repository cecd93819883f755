//! kurye-gateway server entry point.
//!
//! Starts the Axum HTTP server with the REST endpoints, static file
//! serving, and the WebSocket location relay.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use kurye_gateway::api;
use kurye_gateway::app_state::AppState;
use kurye_gateway::auth::AuthKeys;
use kurye_gateway::config::GatewayConfig;
use kurye_gateway::domain::LocationBus;
use kurye_gateway::persistence::PostgresStore;
use kurye_gateway::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting kurye-gateway");

    // Database pool, created lazily: the gateway serves even while
    // PostgreSQL is down, and queries fail per-request instead.
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect_lazy(&config.database_url)?;

    match sqlx::migrate!().run(&pool).await {
        Ok(()) => tracing::info!("database migrations applied"),
        Err(e) => tracing::error!(error = %e, "database migration failed; continuing without it"),
    }

    // Build application state
    let app_state = AppState {
        store: Arc::new(PostgresStore::new(pool)),
        location_bus: LocationBus::new(config.location_bus_capacity),
        auth: Arc::new(AuthKeys::new(&config.jwt_secret, config.jwt_expiry_secs)),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
