//! List items server: reads config from the environment (and `.env`), connects the configured
//! store, and serves `/lists` plus health routes.
//!
//! Run from repo root: `cargo run -p list_server`
//! Without a database: `STORE_BACKEND=memory cargo run -p list_server`

use list_items::{app, connect, init_tracing, AppState, ServerConfig, DEFAULT_LOG_DIRECTIVES};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing(DEFAULT_LOG_DIRECTIVES);

    let config = ServerConfig::from_env()?;
    tracing::info!(backend = config.backend.as_str(), "connecting store");
    let store = connect(&config).await?;
    let state = AppState::new(store);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
