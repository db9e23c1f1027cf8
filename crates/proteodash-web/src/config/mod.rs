//! Configuration loading for proteodash.
//! Reads proteodash.toml from the current directory or the path in PROTEODASH_CONFIG.
//! Every field has a default, so running without a config file is supported.

use std::path::Path;
use std::time::Duration;

use proteodash_annotation::MyGeneConfig;
use proteodash_data::loader::{
    XlsxDataset, DEFAULT_DATASET_PATH, DEFAULT_HEADER_ROW, EXPRESSION_SHEET, VALUES_SHEET,
};
use proteodash_data::boxplot::DEFAULT_SAMPLE_PREFIX;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub annotation: AnnotationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host()       -> String { "127.0.0.1".to_string() }
fn default_port()       -> u16    { 5000 }
fn default_static_dir() -> String { "crates/proteodash-web/static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
    #[serde(default = "default_expression_sheet")]
    pub expression_sheet: String,
    #[serde(default = "default_values_sheet")]
    pub values_sheet: String,
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    #[serde(default = "default_sample_prefix")]
    pub sample_prefix: String,
}

fn default_dataset_path()     -> String { DEFAULT_DATASET_PATH.to_string() }
fn default_expression_sheet() -> String { EXPRESSION_SHEET.to_string() }
fn default_values_sheet()     -> String { VALUES_SHEET.to_string() }
fn default_header_row()       -> usize  { DEFAULT_HEADER_ROW }
fn default_sample_prefix()    -> String { DEFAULT_SAMPLE_PREFIX.to_string() }

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            expression_sheet: default_expression_sheet(),
            values_sheet: default_values_sheet(),
            header_row: default_header_row(),
            sample_prefix: default_sample_prefix(),
        }
    }
}

impl DatasetConfig {
    pub fn to_dataset(&self) -> XlsxDataset {
        XlsxDataset {
            path: self.path.clone().into(),
            expression_sheet: self.expression_sheet.clone(),
            values_sheet: self.values_sheet.clone(),
            header_row: self.header_row,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_publication_url")]
    pub publication_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url()        -> String { "https://mygene.info".to_string() }
fn default_publication_url() -> String { "https://pubmed.ncbi.nlm.nih.gov".to_string() }
fn default_timeout_secs()    -> u64    { 10 }

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            publication_url: default_publication_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AnnotationConfig {
    pub fn to_mygene(&self) -> MyGeneConfig {
        MyGeneConfig {
            base_url: self.base_url.clone(),
            publication_url: self.publication_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}


impl Config {
    /// Load configuration from proteodash.toml.
    /// Checks PROTEODASH_CONFIG env var first, then current directory.
    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("PROTEODASH_CONFIG")
            .unwrap_or_else(|_| "proteodash.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)?;
            info!(path = %path, "Loaded configuration");
            Self::from_toml_str(&content)?
        } else {
            info!(path = %path, "No config file found, using defaults");
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply PROTEODASH_PORT and PROTEODASH_DATA on top of the file values.
    pub fn apply_env_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(port) = var("PROTEODASH_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PROTEODASH_PORT value {:?}: {}", port, e))?;
        }
        if let Some(path) = var("PROTEODASH_DATA") {
            self.dataset.path = path;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
