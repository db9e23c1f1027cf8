//! Per-gene boxplot data endpoint.

use axum::{
    extract::{Path, State},
    response::Json,
};
use proteodash_data::boxplot::{prepare_boxplot_data_with_prefix, BoxplotData};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::SharedState;

/// GET /api/boxplot-data/{gene_symbol} — Young vs old sample values for one gene.
///
/// An unknown gene is still a 200; the body carries the error message.
#[instrument(skip(state))]
pub async fn api_boxplot_data(
    State(state): State<SharedState>,
    Path(gene_symbol): Path<String>,
) -> Result<Json<BoxplotData>, ApiError> {
    let table = state.cache.values_data().await?;
    let data = prepare_boxplot_data_with_prefix(&table, &gene_symbol, &state.sample_prefix)?;
    Ok(Json(data))
}
