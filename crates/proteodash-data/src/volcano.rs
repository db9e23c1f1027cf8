//! Volcano plot shaping: one point per limma result row.

use proteodash_common::Result;
use serde::Serialize;
use tracing::debug;

use crate::table::Table;
use crate::GENE_SYMBOL_COLUMN;

pub const LOG_FC_COLUMN: &str = "logFC";
pub const ADJ_P_COLUMN: &str = "adj.P.Val";

/// Adjusted p-value must be strictly below this to be significant.
pub const SIGNIFICANCE_ALPHA: f64 = 0.05;
/// |logFC| must be strictly above this to be significant.
pub const MIN_ABS_LOG_FC: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolcanoPoint {
    pub gene_symbol: String,
    #[serde(rename = "logFC")]
    pub log_fc: f64,
    /// `-log10(adj.P.Val)`; infinite for p = 0, NaN for p < 0 (both serialise as null).
    pub neg_log10_pval: f64,
    pub significant: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolcanoData {
    pub points: Vec<VolcanoPoint>,
}

pub fn is_significant(adj_p: f64, log_fc: f64) -> bool {
    adj_p < SIGNIFICANCE_ALPHA && log_fc.abs() > MIN_ABS_LOG_FC
}

/// Build the volcano points for every row of the expression table.
///
/// Any non-numeric logFC or adjusted p-value fails the whole table.
pub fn prepare_volcano_data(table: &Table) -> Result<VolcanoData> {
    let gene_idx = table.require_column(GENE_SYMBOL_COLUMN)?;
    let fc_idx = table.require_column(LOG_FC_COLUMN)?;
    let p_idx = table.require_column(ADJ_P_COLUMN)?;

    let points = table
        .rows()
        .enumerate()
        .map(|(i, row)| -> Result<VolcanoPoint> {
            let log_fc = row[fc_idx].to_f64(LOG_FC_COLUMN, i)?;
            let adj_p = row[p_idx].to_f64(ADJ_P_COLUMN, i)?;
            Ok(VolcanoPoint {
                gene_symbol: row[gene_idx].as_text(),
                log_fc,
                neg_log10_pval: -adj_p.log10(),
                significant: is_significant(adj_p, log_fc),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        n_points = points.len(),
        n_significant = points.iter().filter(|p| p.significant).count(),
        "Shaped volcano data"
    );

    Ok(VolcanoData { points })
}
