use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use proteodash_common::ProteodashError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Internal(#[from] ProteodashError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Annotation service unavailable")]
    UpstreamUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Internal { .. } | ApiError::Template { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
        };

        match &self {
            ApiError::UpstreamUnavailable(reason) => error!(%reason, "Upstream request failed"),
            other => error!(error = %other, "Request failed"),
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
