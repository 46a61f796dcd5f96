use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::Router;
use clap::Parser;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Serves the built task list frontend.
#[derive(Debug, Parser)]
#[command(name = "tasklist-server", version)]
struct Config {
    /// Address to listen on.
    #[arg(long, env = "TASKLIST_ADDR", default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Directory holding the built bundle (index.html, wasm, js).
    #[arg(long, env = "TASKLIST_DIST", default_value = "frontend/dist")]
    dist: PathBuf,
}

fn app(dist: &Path) -> Router {
    let index = ServeFile::new(dist.join("index.html"));
    Router::new()
        .fallback_service(ServeDir::new(dist).fallback(index))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::parse();
    if !config.dist.join("index.html").is_file() {
        tracing::warn!(dist = %config.dist.display(), "no index.html in dist directory");
    }

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!(addr = %config.addr, dist = %config.dist.display(), "serving task list");
    axum::serve(listener, app(&config.dist))
        .await
        .context("server error")?;
    Ok(())
}
