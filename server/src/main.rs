use anyhow::Context;
use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, WordSource};
use crate::services::{local::LocalWords, upstream::Upstream};

mod config;
mod handlers;
mod responses;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Failed to load dotenv file: {}", e);
    }

    let config = Config::from_env()?;
    init_tracing(&config.log_filter);

    let upstream = Upstream::new(&config.upstream_url, config.upstream_timeout)
        .context("Failed to build upstream client")?;

    let words = match config.word_source {
        WordSource::Upstream => handlers::word_routes(upstream.clone()),
        WordSource::Local => handlers::word_routes(
            LocalWords::bundled().context("Failed to parse bundled word list")?,
        ),
    };

    let index = ServeFile::new(&config.index_file);
    let assets = ServeDir::new(&config.assets_dir);
    let app = Router::new()
        .merge(words)
        .merge(handlers::session_routes(upstream))
        .nest_service("/assets", assets)
        .fallback_service(index)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    tracing::info!(
        addr = %config.bind_addr(),
        upstream = %config.upstream_url,
        word_source = ?config.word_source,
        "word challenge server listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}
