//! Per-gene boxplot shaping over the sample values sheet.
//!
//! Sample columns are named like `Set1_YD_03` / `Set2_OD_11`: a sample-set
//! prefix followed by a donor-age marker. Columns outside the sample prefix
//! (symbol, UniProt id, annotation text...) are never treated as samples.

use proteodash_common::Result;
use serde::Serialize;
use tracing::debug;

use crate::stats::{mean, population_std};
use crate::table::Table;
use crate::GENE_SYMBOL_COLUMN;

pub const DEFAULT_SAMPLE_PREFIX: &str = "Set";
pub const YOUNG_MARKER: &str = "YD";
pub const OLD_MARKER: &str = "OD";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub group: String,
    pub values: Vec<f64>,
    pub mean: f64,
    pub std: f64,
}

impl GroupSummary {
    fn new(group: &str, values: Vec<f64>) -> Self {
        Self {
            group: group.to_string(),
            mean: mean(&values),
            std: population_std(&values),
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BoxplotData {
    Found {
        gene_symbol: String,
        young: GroupSummary,
        old: GroupSummary,
    },
    NotFound {
        error: String,
    },
}

impl BoxplotData {
    pub fn not_found(gene_symbol: &str) -> Self {
        BoxplotData::NotFound {
            error: format!("Gene {} not found", gene_symbol),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, BoxplotData::Found { .. })
    }
}

/// Indices of the young and old sample columns, in sheet order.
///
/// A column is young iff its name contains `YD` and old iff it contains `OD`;
/// a column with neither marker lands in no group.
pub fn sample_groups(columns: &[String], prefix: &str) -> (Vec<usize>, Vec<usize>) {
    let mut young = Vec::new();
    let mut old = Vec::new();
    for (i, name) in columns.iter().enumerate().filter(|(_, name)| name.starts_with(prefix)) {
        if name.contains(YOUNG_MARKER) {
            young.push(i);
        }
        if name.contains(OLD_MARKER) {
            old.push(i);
        }
    }
    (young, old)
}

/// Boxplot data for `gene_symbol` using the default `Set` sample prefix.
pub fn prepare_boxplot_data(table: &Table, gene_symbol: &str) -> Result<BoxplotData> {
    prepare_boxplot_data_with_prefix(table, gene_symbol, DEFAULT_SAMPLE_PREFIX)
}

/// Collect every row whose symbol equals `gene_symbol` exactly and summarise
/// its young and old sample values.
///
/// Rows sharing a symbol are concatenated, not averaged.
pub fn prepare_boxplot_data_with_prefix(
    table: &Table,
    gene_symbol: &str,
    sample_prefix: &str,
) -> Result<BoxplotData> {
    let gene_idx = table.require_column(GENE_SYMBOL_COLUMN)?;

    let matched: Vec<(usize, &[_])> = table
        .rows()
        .enumerate()
        .filter(|(_, row)| row[gene_idx].text_eq(gene_symbol))
        .collect();

    if matched.is_empty() {
        debug!(gene_symbol, "No values rows for gene");
        return Ok(BoxplotData::not_found(gene_symbol));
    }

    let (young_cols, old_cols) = sample_groups(table.columns(), sample_prefix);
    let columns = table.columns();

    let collect = |cols: &[usize]| -> Result<Vec<f64>> {
        let mut values = Vec::with_capacity(matched.len() * cols.len());
        for (i, row) in &matched {
            for &c in cols {
                values.push(row[c].to_f64(&columns[c], *i)?);
            }
        }
        Ok(values)
    };

    let young = collect(&young_cols)?;
    let old = collect(&old_cols)?;

    debug!(
        gene_symbol,
        n_rows = matched.len(),
        n_young = young.len(),
        n_old = old.len(),
        "Shaped boxplot data"
    );

    Ok(BoxplotData::Found {
        gene_symbol: gene_symbol.to_string(),
        young: GroupSummary::new("Young", young),
        old: GroupSummary::new("Old", old),
    })
}
