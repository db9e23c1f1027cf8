//! Application-scoped dataset cache.
//!
//! Each sheet is read at most once per process. Concurrent first requests
//! share a single load; a failed load leaves the slot empty so the next
//! request tries again. Entries are never evicted.

use std::sync::Arc;

use proteodash_common::{ProteodashError, Result};
use proteodash_data::{prepare_volcano_data, DatasetSource, Table, VolcanoData};
use tokio::sync::OnceCell;
use tracing::{debug, info};

pub struct DatasetCache {
    source: Arc<dyn DatasetSource>,
    volcano_data: OnceCell<Arc<VolcanoData>>,
    values_data: OnceCell<Arc<Table>>,
}

impl DatasetCache {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self {
            source,
            volcano_data: OnceCell::new(),
            values_data: OnceCell::new(),
        }
    }

    /// Volcano points, shaped from the expression sheet on first use.
    pub async fn volcano_data(&self) -> Result<Arc<VolcanoData>> {
        let data = self
            .volcano_data
            .get_or_try_init(|| async {
                let source = Arc::clone(&self.source);
                let data = run_blocking(move || {
                    let table = source.load_expression()?;
                    prepare_volcano_data(&table)
                })
                .await?;
                info!(n_points = data.points.len(), "Cached volcano data");
                Ok::<_, ProteodashError>(Arc::new(data))
            })
            .await?;
        debug!("Volcano data served from cache");
        Ok(Arc::clone(data))
    }

    /// The raw values sheet, loaded on first use.
    pub async fn values_data(&self) -> Result<Arc<Table>> {
        let table = self
            .values_data
            .get_or_try_init(|| async {
                let source = Arc::clone(&self.source);
                let table = run_blocking(move || source.load_values()).await?;
                info!(n_rows = table.n_rows(), "Cached values table");
                Ok::<_, ProteodashError>(Arc::new(table))
            })
            .await?;
        Ok(Arc::clone(table))
    }

    pub fn is_volcano_cached(&self) -> bool {
        self.volcano_data.initialized()
    }

    pub fn is_values_cached(&self) -> bool {
        self.values_data.initialized()
    }
}

/// Spreadsheet parsing is CPU and disk bound; keep it off the async workers.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ProteodashError::Other(e.into()))?
}
