//! Main Entrypoint for the Pawsteps API Service
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Evaluating the availability gate and building the content service.
//! 3. Constructing the Axum router and applying middleware.
//! 4. Starting the web server and handling graceful shutdown.

use anyhow::Context;
use pawsteps_api::{config::Config, router::create_router, state::AppState};
use pawsteps_core::content;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Listens for the `Ctrl+C` signal to gracefully shut down the server.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received shutdown signal. Shutting down gracefully...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    info!("Configuration loaded. Initializing application state...");

    // --- 3. Evaluate the Availability Gate ---
    let content = content::from_credential(config.credential.as_deref(), &config.chat_model);
    if config.credential_available() {
        info!(model = %config.chat_model, "Credential configured. Live generation enabled.");
    } else {
        info!("No API credential configured. Serving canned demo content.");
    }

    let app_state = AppState {
        content,
        config: Arc::new(config.clone()),
    };

    // --- 4. Create Router and Apply Middleware ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(app_state).layer(cors);

    // --- 5. Start Server ---
    info!(bind_address = %config.bind_address, "Service configured. Starting server...");
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server has shut down.");
    Ok(())
}
