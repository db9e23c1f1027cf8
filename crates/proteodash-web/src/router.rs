//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{
    boxplot::api_boxplot_data,
    dashboard::dashboard,
    gene_info::api_gene_info,
    volcano::api_volcano_data,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(dashboard))

        // API endpoints
        .route("/api/volcano-data",              get(api_volcano_data))
        .route("/api/boxplot-data/{gene_symbol}", get(api_boxplot_data))
        .route("/api/gene-info/{gene_symbol}",    get(api_gene_info))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
