//! proteodash web server
//!
//! Run with: cargo run -p proteodash-web

use std::sync::Arc;

use proteodash_annotation::MyGeneClient;
use proteodash_web::{config::Config, router::build_router, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    info!(dataset = %config.dataset.path, "Starting proteodash web server...");

    let dataset = Arc::new(config.dataset.to_dataset());
    let annotation = Arc::new(MyGeneClient::new(config.annotation.to_mygene())?);
    let state = AppState::new(dataset, annotation, config.dataset.sample_prefix.clone())?;

    let app = build_router(state, &config.server.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
