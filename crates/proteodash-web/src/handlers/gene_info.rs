//! Gene publication lookup endpoint, backed by the annotation service.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use proteodash_annotation::LookupOutcome;
use serde_json::json;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::SharedState;

pub const GENE_NOT_FOUND: &str = "Gene not found";

/// GET /api/gene-info/{gene_symbol} — GeneRIF publications for a gene.
///
/// Unknown symbols answer 200 with `{"error": "Gene not found"}`; an
/// unreachable service answers 502.
#[instrument(skip(state))]
pub async fn api_gene_info(
    State(state): State<SharedState>,
    Path(gene_symbol): Path<String>,
) -> Result<Response, ApiError> {
    match state.annotation.gene_info(&gene_symbol).await {
        LookupOutcome::Found(info) => Ok(Json(info).into_response()),
        LookupOutcome::NotFound => Ok(Json(json!({ "error": GENE_NOT_FOUND })).into_response()),
        LookupOutcome::Unavailable(reason) => Err(ApiError::UpstreamUnavailable(reason)),
    }
}
