//! MyGene.info REST API client.
//!
//! Two sequential calls per lookup:
//! - `GET {base}/v3/query?q=symbol:<SYMBOL>` resolves the gene id
//! - `GET {base}/v3/gene/<id>` returns the full record, including GeneRIFs
//!
//! Each GeneRIF that cites a PubMed id becomes one [`Publication`].

use std::time::Duration;

use async_trait::async_trait;
use proteodash_common::sandbox::{SandboxClient, DEFAULT_TIMEOUT};
use proteodash_common::{ProteodashError, Result};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::models::{GeneInfo, LookupOutcome, Publication};
use crate::GeneAnnotationSource;

pub const MYGENE_BASE_URL: &str = "https://mygene.info";
pub const PUBMED_BASE_URL: &str = "https://pubmed.ncbi.nlm.nih.gov";
pub const UNTITLED_PUBLICATION: &str = "No title available";

#[derive(Debug, Clone)]
pub struct MyGeneConfig {
    pub base_url: String,
    pub publication_url: String,
    pub timeout: Duration,
}

impl Default for MyGeneConfig {
    fn default() -> Self {
        Self {
            base_url: MYGENE_BASE_URL.to_string(),
            publication_url: PUBMED_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct MyGeneClient {
    client: SandboxClient,
    base_url: String,
    publication_url: String,
}

impl MyGeneClient {
    pub fn new(config: MyGeneConfig) -> Result<Self> {
        let mut client = SandboxClient::with_timeout(config.timeout)?;

        // The configured service host is always reachable.
        let base = Url::parse(&config.base_url)
            .map_err(|e| ProteodashError::Config(format!("invalid annotation base_url: {}", e)))?;
        if let Some(host) = base.host_str() {
            client.allow_domain(host);
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            publication_url: config.publication_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a gene symbol to the service's gene id. `Ok(None)` when there are no hits.
    #[instrument(skip(self))]
    pub async fn query_gene_id(&self, gene_symbol: &str) -> Result<Option<String>> {
        let url = format!("{}/v3/query", self.base_url);
        let q = format!("symbol:{}", gene_symbol);

        let body = self.client
            .get(&url)?
            .query(&[("q", q.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        parse_query_hits(&body)
    }

    /// Fetch the gene record and extract its PubMed-backed GeneRIFs.
    #[instrument(skip(self))]
    pub async fn fetch_publications(&self, gene_id: &str) -> Result<Vec<Publication>> {
        let url = format!("{}/v3/gene/{}", self.base_url, gene_id);

        let detail = self.client
            .get(&url)?
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(parse_publications(&detail, &self.publication_url))
    }

    async fn lookup(&self, gene_symbol: &str) -> Result<Option<GeneInfo>> {
        let Some(gene_id) = self.query_gene_id(gene_symbol).await? else {
            return Ok(None);
        };
        let publications = self.fetch_publications(&gene_id).await?;
        debug!(gene_symbol, gene_id = %gene_id, n_publications = publications.len(), "Resolved gene");

        Ok(Some(GeneInfo {
            gene_symbol: gene_symbol.to_string(),
            gene_id,
            publications,
        }))
    }
}

#[async_trait]
impl GeneAnnotationSource for MyGeneClient {
    #[instrument(skip(self))]
    async fn gene_info(&self, gene_symbol: &str) -> LookupOutcome {
        match self.lookup(gene_symbol).await {
            Ok(Some(info)) => LookupOutcome::Found(info),
            Ok(None) => LookupOutcome::NotFound,
            Err(e) => {
                warn!(gene_symbol, error = %e, "MyGene lookup failed");
                LookupOutcome::Unavailable(e.to_string())
            }
        }
    }
}

/// Take the id of the first query hit. An empty `hits` array is `Ok(None)`;
/// a body without a `hits` array, or a hit without an `_id`, is malformed.
pub fn parse_query_hits(body: &Value) -> Result<Option<String>> {
    let Some(hits) = body["hits"].as_array() else {
        return Err(ProteodashError::Other(anyhow::anyhow!(
            "query response has no hits array: {}",
            body
        )));
    };
    let Some(hit) = hits.first() else {
        return Ok(None);
    };
    match &hit["_id"] {
        Value::String(id) => Ok(Some(id.clone())),
        Value::Number(id) => Ok(Some(id.to_string())),
        other => Err(ProteodashError::Other(anyhow::anyhow!(
            "query hit has no usable _id: {}",
            other
        ))),
    }
}

/// Collect one publication per GeneRIF entry that carries a PubMed id.
///
/// `generif` is a list for most genes but a bare object when there is only one.
pub fn parse_publications(detail: &Value, publication_url: &str) -> Vec<Publication> {
    let entries: Vec<&Value> = match &detail["generif"] {
        Value::Array(items) => items.iter().collect(),
        obj @ Value::Object(_) => vec![obj],
        _ => vec![],
    };

    entries
        .into_iter()
        .filter_map(|rif| {
            let pubmed = match &rif["pubmed"] {
                Value::Number(n) => n.to_string(),
                Value::String(s) if !s.is_empty() => s.clone(),
                _ => return None,
            };
            Some(Publication {
                title: rif["text"].as_str().unwrap_or(UNTITLED_PUBLICATION).to_string(),
                url: format!("{}/{}", publication_url, pubmed),
            })
        })
        .collect()
}
