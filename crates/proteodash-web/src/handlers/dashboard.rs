//! Dashboard handler — the single page hosting the plots.

use axum::{extract::State, response::Html};
use minijinja::context;
use proteodash_data::volcano::{MIN_ABS_LOG_FC, SIGNIFICANCE_ALPHA};

use crate::error::ApiError;
use crate::state::SharedState;

/// GET / — Render the dashboard shell; the plots load their data client-side.
pub async fn dashboard(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let page = state.templates.get_template("index.html")?.render(context! {
        alpha => SIGNIFICANCE_ALPHA,
        min_abs_log_fc => MIN_ABS_LOG_FC,
    })?;
    Ok(Html(page))
}
