//! Liveness endpoint for external monitoring. Fully independent of the chat
//! path; they share only the read-only config.

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing::info;

async fn root() -> &'static str {
    "🤖 Weather Bot is running! Use Telegram to interact with the bot."
}

async fn health() -> &'static str {
    "✅ Bot is healthy and running!"
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// Serves the health endpoints on 0.0.0.0:{port} until the process exits.
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let listener = TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    info!(port, "Health endpoint listening");
    serve_listener(listener).await
}

/// Serves on an already-bound listener (tests bind an ephemeral port).
pub async fn serve_listener(listener: TcpListener) -> anyhow::Result<()> {
    axum::serve(listener, router()).await?;
    Ok(())
}
