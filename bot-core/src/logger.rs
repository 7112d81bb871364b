//! Tracing initialization for the bot process.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
/// Reads the log level from RUST_LOG (e.g. info, debug); defaults to info.
/// Load .env (dotenvy::dotenv()) before calling this, or RUST_LOG from the
/// file will not take effect.
pub fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
