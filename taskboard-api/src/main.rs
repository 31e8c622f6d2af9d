//! # Taskboard API Server
//!
//! HTTP entry point for the taskboard backend. Startup wires the handlers
//! into the mediator exactly once, builds the router, and serves until
//! shutdown; everything interesting happens in `taskboard-core`.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p taskboard-api
//! ```

use std::sync::Arc;
use taskboard_api::{
    app::{build_router, AppState},
    config::Config,
};
use taskboard_core::{db::Database, dispatch::MediatorBuilder, features};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Taskboard API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    // All mutable state lives here; handlers get an explicit handle.
    let db = Arc::new(Database::new());

    // Handlers are registered once, before any dispatch.
    let mediator = features::register_all(MediatorBuilder::new(), &db).build();
    tracing::info!(handlers = mediator.handler_count(), "features registered");

    let state = AppState::new(mediator, config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
