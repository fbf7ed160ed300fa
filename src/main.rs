//! ASO copy scorer: binary entrypoint.
//! Boots the Axum HTTP server, wiring keyword tables, routes and metrics.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use aso_copy_scorer::config::{AppConfig, KeywordTables, LogFormat};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("aso_copy_scorer=info,tower_http=warn"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when the file is absent.
    let _ = dotenvy::dotenv();

    let cfg = AppConfig::from_env()?;
    init_tracing(cfg.log_format);

    let tables = match &cfg.keywords_path {
        Some(path) => Arc::new(KeywordTables::from_path(path)?),
        None => KeywordTables::builtin(),
    };
    let app = aso_copy_scorer::app(&cfg, tables)?;

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("binding {}", cfg.bind_addr))?;
    info!(addr = %cfg.bind_addr, metrics = cfg.metrics_enabled, "copy scorer listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
