//! Volcano plot data endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::SharedState;

/// GET /api/volcano-data — All limma result rows as volcano points.
#[instrument(skip(state))]
pub async fn api_volcano_data(State(state): State<SharedState>) -> Result<Response, ApiError> {
    let data = state.cache.volcano_data().await?;
    Ok(Json(&*data).into_response())
}
