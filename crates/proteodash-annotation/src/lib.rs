//! proteodash-annotation — Gene publication lookup against MyGene.info.

pub mod models;
pub mod mygene;

pub use models::{GeneInfo, LookupOutcome, Publication};
pub use mygene::{MyGeneClient, MyGeneConfig};

use async_trait::async_trait;

/// Common interface for gene annotation services.
#[async_trait]
pub trait GeneAnnotationSource: Send + Sync {
    /// Resolve a gene symbol and collect its literature references.
    ///
    /// Never fails: transport problems are reported as
    /// [`LookupOutcome::Unavailable`].
    async fn gene_info(&self, gene_symbol: &str) -> LookupOutcome;
}
