//! Shared application state for the web server.

use std::sync::Arc;

use minijinja::Environment;
use proteodash_annotation::GeneAnnotationSource;
use proteodash_data::DatasetSource;

use crate::cache::DatasetCache;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub cache: DatasetCache,
    pub annotation: Arc<dyn GeneAnnotationSource>,
    /// Name prefix that marks a values-sheet column as a sample.
    pub sample_prefix: String,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(
        dataset: Arc<dyn DatasetSource>,
        annotation: Arc<dyn GeneAnnotationSource>,
        sample_prefix: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let mut templates = Environment::new();
        templates.add_template("index.html", include_str!("../templates/index.html"))?;

        Ok(Self {
            cache: DatasetCache::new(dataset),
            annotation,
            sample_prefix: sample_prefix.into(),
            templates,
        })
    }
}

pub type SharedState = Arc<AppState>;
