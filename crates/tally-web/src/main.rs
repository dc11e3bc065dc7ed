// File: crates/tally-web/src/main.rs
// Summary: Server binary: reads configuration from the environment and serves the tracker.

use anyhow::{Context, Result};
use tally_core::RenderOptions;
use tally_web::{open_store, router, AppState, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let store = open_store(&config).with_context(|| format!("failed to open store {:?}", config.store))?;

    let render = RenderOptions { theme: config.theme, ..RenderOptions::default() };
    let app = router(AppState::new(store, config.domain, render));

    info!(domain = %config.domain, theme = config.theme.name, "listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
