//! Annotation lookup result types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneInfo {
    pub gene_symbol: String,
    pub gene_id: String,
    pub publications: Vec<Publication>,
}

/// Outcome of a gene lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(GeneInfo),
    /// The service has no gene with this symbol.
    NotFound,
    /// The service could not be reached or answered with something unusable.
    Unavailable(String),
}
